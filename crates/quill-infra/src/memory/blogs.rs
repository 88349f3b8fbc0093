use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::domain::pagination::PageRequest;
use quill_core::domain::{Blog, BlogWithAuthor, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogFilter, BlogOrder, BlogRepository};

use super::InMemoryStore;

pub struct InMemoryBlogRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryBlogRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn selects(filter: &BlogFilter, blog: &Blog) -> bool {
    if blog.draft {
        return false;
    }

    match filter {
        BlogFilter::All => true,
        BlogFilter::Tag {
            tag,
            exclude_blog_id,
        } => {
            blog.tags.iter().any(|t| t == tag)
                && exclude_blog_id.as_deref() != Some(blog.blog_id.as_str())
        }
        BlogFilter::Title(pattern) => pattern.matches(&blog.title),
        BlogFilter::Author(author) => blog.author == *author,
    }
}

fn join_author(blog: &Blog, users: &HashMap<Uuid, User>) -> Result<BlogWithAuthor, RepoError> {
    let author = users.get(&blog.author).ok_or_else(|| {
        RepoError::Corrupt(format!("author of blog {} is missing", blog.blog_id))
    })?;

    Ok(BlogWithAuthor {
        blog: blog.clone(),
        author: author.summary(),
    })
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.store.blogs.read().await.get(&id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut blogs = self.store.blogs.write().await;

        if blogs.contains_key(&blog.id) || blogs.values().any(|b| b.blog_id == blog.blog_id) {
            return Err(RepoError::Constraint(format!(
                "blog id {} already exists",
                blog.blog_id
            )));
        }
        if !self.store.users.read().await.contains_key(&blog.author) {
            return Err(RepoError::Constraint(format!(
                "author {} does not exist",
                blog.author
            )));
        }

        blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_published(
        &self,
        filter: &BlogFilter,
        order: BlogOrder,
        page: PageRequest,
    ) -> Result<Vec<BlogWithAuthor>, RepoError> {
        let blogs = self.store.blogs.read().await;
        let users = self.store.users.read().await;

        let mut selected: Vec<&Blog> = blogs.values().filter(|b| selects(filter, b)).collect();
        match order {
            BlogOrder::Latest => selected.sort_by_key(|b| Reverse(b.published_at)),
            BlogOrder::Trending => selected.sort_by_key(|b| {
                Reverse((b.activity.total_reads, b.activity.total_likes, b.published_at))
            }),
        }

        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        selected
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|blog| join_author(blog, &users))
            .collect()
    }

    async fn count_published(&self, filter: &BlogFilter) -> Result<u64, RepoError> {
        let blogs = self.store.blogs.read().await;
        Ok(blogs.values().filter(|b| selects(filter, b)).count() as u64)
    }

    async fn read_by_blog_id(&self, blog_id: &str) -> Result<Option<BlogWithAuthor>, RepoError> {
        let mut blogs = self.store.blogs.write().await;
        let Some(blog) = blogs.values_mut().find(|b| b.blog_id == blog_id) else {
            return Ok(None);
        };
        blog.activity.total_reads += 1;

        let users = self.store.users.read().await;
        join_author(blog, &users).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use quill_core::domain::BlogInput;
    use quill_core::domain::search::SearchPattern;

    use super::*;
    use crate::memory::InMemoryUserRepository;

    async fn setup() -> (InMemoryUserRepository, InMemoryBlogRepository, Uuid) {
        let (users, blogs) = InMemoryStore::repositories();
        let author = users
            .insert(User::new(
                "Ada Lovelace".to_string(),
                "ada@example.com".to_string(),
                "hash".to_string(),
                "ada".to_string(),
            ))
            .await
            .unwrap();
        (users, blogs, author.id)
    }

    fn blog(author: Uuid, blog_id: &str, tags: &[&str], minutes_ago: i64, reads: i64) -> Blog {
        let input = BlogInput {
            title: blog_id.replace('-', " "),
            desc: "desc".to_string(),
            banner: "https://cdn/b.png".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        };
        let mut blog = Blog::new(author, blog_id.to_string(), input);
        blog.published_at = Utc::now() - Duration::minutes(minutes_ago);
        blog.activity.total_reads = reads;
        blog
    }

    fn ids(rows: &[BlogWithAuthor]) -> Vec<&str> {
        rows.iter().map(|r| r.blog.blog_id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_latest_skips_drafts_and_pages() {
        let (_, blogs, author) = setup().await;
        for (i, id) in ["one", "two", "three"].into_iter().enumerate() {
            blogs.insert(blog(author, id, &["rust"], i as i64, 0)).await.unwrap();
        }
        let mut draft = blog(author, "draft", &["rust"], 0, 0);
        draft.draft = true;
        blogs.insert(draft).await.unwrap();

        let first = blogs
            .list_published(&BlogFilter::All, BlogOrder::Latest, PageRequest::first(2))
            .await
            .unwrap();
        let second = blogs
            .list_published(
                &BlogFilter::All,
                BlogOrder::Latest,
                PageRequest::new(Some(2), 2).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(ids(&first), vec!["one", "two"]);
        assert_eq!(ids(&second), vec!["three"]);
        assert_eq!(first[0].author.personal_info.username, "ada");
        assert_eq!(blogs.count_published(&BlogFilter::All).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_trending_orders_by_reads() {
        let (_, blogs, author) = setup().await;
        blogs.insert(blog(author, "quiet", &[], 0, 1)).await.unwrap();
        blogs.insert(blog(author, "popular", &[], 10, 50)).await.unwrap();

        let rows = blogs
            .list_published(&BlogFilter::All, BlogOrder::Trending, PageRequest::first(5))
            .await
            .unwrap();

        assert_eq!(ids(&rows), vec!["popular", "quiet"]);
    }

    #[tokio::test]
    async fn test_tag_filter_excludes_blog() {
        let (_, blogs, author) = setup().await;
        blogs.insert(blog(author, "a", &["rust"], 0, 0)).await.unwrap();
        blogs.insert(blog(author, "b", &["rust", "web"], 1, 0)).await.unwrap();
        blogs.insert(blog(author, "c", &["go"], 2, 0)).await.unwrap();

        let filter = BlogFilter::Tag {
            tag: "rust".to_string(),
            exclude_blog_id: Some("a".to_string()),
        };
        let rows = blogs
            .list_published(&filter, BlogOrder::Latest, PageRequest::first(5))
            .await
            .unwrap();

        assert_eq!(ids(&rows), vec!["b"]);
        assert_eq!(blogs.count_published(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_title_search_is_literal() {
        let (_, blogs, author) = setup().await;
        blogs.insert(blog(author, "Learning-Rust", &[], 0, 0)).await.unwrap();
        blogs.insert(blog(author, "Go-Tips", &[], 0, 0)).await.unwrap();

        let filter = BlogFilter::Title(SearchPattern::contains("rust"));
        assert_eq!(blogs.count_published(&filter).await.unwrap(), 1);

        let filter = BlogFilter::Title(SearchPattern::contains(".*"));
        assert_eq!(blogs.count_published(&filter).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_read_increments_counter() {
        let (_, blogs, author) = setup().await;
        blogs.insert(blog(author, "hello", &[], 0, 4)).await.unwrap();

        let row = blogs.read_by_blog_id("hello").await.unwrap().unwrap();
        assert_eq!(row.blog.activity.total_reads, 5);

        assert!(blogs.read_by_blog_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_requires_existing_author() {
        let (_, blogs, _) = setup().await;

        let result = blogs.insert(blog(Uuid::new_v4(), "orphan", &[], 0, 0)).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(blogs.count_published(&BlogFilter::All).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_author_filter() {
        let (users, blogs, author) = setup().await;
        let other = users
            .insert(User::new(
                "Bob".to_string(),
                "bob@example.com".to_string(),
                "hash".to_string(),
                "bob".to_string(),
            ))
            .await
            .unwrap();
        blogs.insert(blog(author, "mine", &[], 0, 0)).await.unwrap();
        blogs.insert(blog(other.id, "theirs", &[], 0, 0)).await.unwrap();

        let rows = blogs
            .list_published(
                &BlogFilter::Author(other.id),
                BlogOrder::Latest,
                PageRequest::first(5),
            )
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec!["theirs"]);
    }
}
