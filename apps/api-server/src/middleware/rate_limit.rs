//! Rate limiting middleware.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures::future::LocalBoxFuture;
use quill_shared::ErrorResponse;
use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

use quill_core::ports::{RateLimitDecision, RateLimiter};

/// Rate limiting middleware factory, keyed by the client's address.
pub struct RateLimitMiddleware {
    limiter: Arc<dyn RateLimiter>,
}

impl RateLimitMiddleware {
    pub fn new(limiter: Arc<dyn RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
        }))
    }
}

pub struct RateLimitMiddlewareService<S> {
    service: Rc<S>,
    limiter: Arc<dyn RateLimiter>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limiter = self.limiter.clone();

        let key = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        Box::pin(async move {
            match limiter.check(&key).await {
                Ok(RateLimitDecision::Limited { retry_after }) => {
                    tracing::warn!(client = %key, "Rate limit exceeded");

                    let retry_secs = retry_after.as_secs().max(1);
                    let response = HttpResponse::TooManyRequests()
                        .insert_header(("Retry-After", retry_secs.to_string()))
                        .json(ErrorResponse::new(format!(
                            "Too many requests, try again in {retry_secs} seconds"
                        )));

                    return Ok(req.into_response(response).map_into_right_body());
                }
                Ok(RateLimitDecision::Allowed) => {}
                Err(e) => tracing::error!("Rate limiter error, failing open: {}", e),
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
