//! Error handling - every failure becomes `{"error": "<message>"}`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use quill_core::domain::validation::{PublishError, SignupError};
use quill_core::error::{DomainError, RepoError};
use quill_core::ports::AuthError;
use quill_shared::ErrorResponse;

/// Application-level error type rendered as an `{error}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::Publish(err) => err.into(),
            DomainError::Signup(err) => err.into(),
            err @ (DomainError::NotFound { .. } | DomainError::Internal(_)) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<PublishError> for AppError {
    fn from(err: PublishError) -> Self {
        AppError::Forbidden(err.to_string())
    }
}

impl From<SignupError> for AppError {
    fn from(err: SignupError) -> Self {
        AppError::Forbidden(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => AppError::Unauthorized("No access token".to_string()),
            AuthError::TokenExpired | AuthError::InvalidToken(_) => {
                AppError::Forbidden("Access token is invalid".to_string())
            }
            AuthError::Signing(_) | AuthError::HashingError(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// JSON extractor config that reports malformed bodies as `400 {error}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request body: {}", err);
    AppError::BadRequest(err.to_string()).into()
}
