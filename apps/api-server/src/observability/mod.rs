//! Observability - request IDs and their tracing spans.

mod request_id;

pub use request_id::RequestIdMiddleware;
