//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Rate limiter keyed by client identity (usually the remote address).
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Consume one request for `key` and report whether it may proceed.
    async fn check(&self, key: &str) -> Result<RateLimitDecision, RateLimitError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    Limited { retry_after: Duration },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
