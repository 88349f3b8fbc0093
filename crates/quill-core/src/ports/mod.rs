//! Ports - trait definitions for external dependencies.
//! Infrastructure provides the implementations.

mod auth;
mod rate_limit;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use rate_limit::{RateLimitDecision, RateLimitError, RateLimiter};
pub use repository::{BaseRepository, BlogFilter, BlogOrder, BlogRepository, UserRepository};
