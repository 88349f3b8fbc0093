//! In-memory repositories - used when no database is configured and in tests.
//!
//! Both repositories share one [`InMemoryStore`] so blog listings can join
//! authors the way the SQL repositories do. Data is lost on restart.

mod blogs;
mod users;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Blog, User};

pub use blogs::InMemoryBlogRepository;
pub use users::InMemoryUserRepository;

/// Shared backing maps, keyed by internal id.
#[derive(Default)]
pub struct InMemoryStore {
    pub(crate) users: RwLock<HashMap<Uuid, User>>,
    pub(crate) blogs: RwLock<HashMap<Uuid, Blog>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Repositories over a fresh, empty store.
    pub fn repositories() -> (InMemoryUserRepository, InMemoryBlogRepository) {
        let store = Self::new();
        (
            InMemoryUserRepository::new(store.clone()),
            InMemoryBlogRepository::new(store),
        )
    }
}
