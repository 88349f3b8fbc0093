//! # Quill Core
//!
//! The domain layer of the Quill blogging backend.
//! Blogs, users, the publish/draft rules and the ports infrastructure implements.
//! No database or HTTP dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
