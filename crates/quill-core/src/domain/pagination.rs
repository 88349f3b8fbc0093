//! Page-number pagination with fixed page sizes per feed.

use crate::error::DomainError;

pub const LATEST_PAGE_SIZE: u64 = 5;
pub const TRENDING_LIMIT: u64 = 5;
pub const FILTER_PAGE_SIZE: u64 = 2;
pub const SEARCH_PAGE_SIZE: u64 = 2;
/// Upper bound for a client-chosen search page size.
pub const MAX_PAGE_SIZE: u64 = 50;
pub const USER_SEARCH_LIMIT: u64 = 50;

/// A validated 1-based page of `limit` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validate a client-supplied page number. Missing, < 1, or so large
    /// that its offset does not fit a SQL `BIGINT` is rejected.
    pub fn new(page: Option<i64>, limit: u64) -> Result<Self, DomainError> {
        match page.and_then(|p| u64::try_from(p).ok()) {
            Some(page) if page >= 1 && checked_skip(page, limit).is_some() => {
                Ok(Self { page, limit })
            }
            _ => Err(DomainError::InvalidInput("Invalid page number".to_string())),
        }
    }

    /// The first `limit` items, for feeds without page numbers.
    pub const fn first(limit: u64) -> Self {
        Self { page: 1, limit }
    }

    pub const fn page(&self) -> u64 {
        self.page
    }

    pub const fn limit(&self) -> u64 {
        self.limit
    }

    pub const fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn checked_skip(page: u64, limit: u64) -> Option<u64> {
    (page - 1)
        .checked_mul(limit)
        .filter(|skip| i64::try_from(*skip).is_ok())
}

/// Page size for a search request: the client's `limit` when it is within
/// `1..=MAX_PAGE_SIZE`, otherwise the default.
pub fn search_page_size(requested: Option<u64>) -> u64 {
    requested
        .filter(|limit| (1..=MAX_PAGE_SIZE).contains(limit))
        .unwrap_or(SEARCH_PAGE_SIZE)
}
