use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::pagination::PageRequest;
use crate::domain::search::SearchPattern;
use crate::domain::{AuthorSummary, Blog, BlogWithAuthor, User};
use crate::error::RepoError;

/// Operations every repository supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its internal id.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity and return the stored version.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Exact, case-sensitive username lookup.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Users whose username matches `pattern`, at most `limit` of them.
    async fn search_by_username(
        &self,
        pattern: &SearchPattern,
        limit: u64,
    ) -> Result<Vec<AuthorSummary>, RepoError>;

    /// Append `blog` to the author's blog list and, when the blog is
    /// published, bump `total_posts`. One atomic update.
    async fn record_post(&self, author: Uuid, blog: Uuid, published: bool)
    -> Result<(), RepoError>;

    /// Add one to the author's aggregate read counter.
    async fn increment_total_reads(&self, author: Uuid) -> Result<(), RepoError>;
}

/// Which published blogs a listing selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlogFilter {
    #[default]
    All,
    /// Blogs carrying `tag`, optionally leaving one blog out.
    Tag {
        tag: String,
        exclude_blog_id: Option<String>,
    },
    Title(SearchPattern),
    Author(Uuid),
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogOrder {
    /// Newest first.
    Latest,
    /// Most read, then most liked, then newest.
    Trending,
}

/// Blog repository. Listings and counts never include drafts.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    async fn list_published(
        &self,
        filter: &BlogFilter,
        order: BlogOrder,
        page: PageRequest,
    ) -> Result<Vec<BlogWithAuthor>, RepoError>;

    async fn count_published(&self, filter: &BlogFilter) -> Result<u64, RepoError>;

    /// Atomically add one to the blog's read counter and return it with its
    /// author. `None` when no blog has this external id.
    async fn read_by_blog_id(&self, blog_id: &str) -> Result<Option<BlogWithAuthor>, RepoError>;
}
