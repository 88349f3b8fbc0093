use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::AuthorSummary;

/// Structured editor output: an ordered list of blocks plus editor metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BlogContent {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A single editor block. The payload is opaque to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Engagement counters kept on every blog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_reads: i64,
    pub total_parent_comments: i64,
}

/// Fields a client submits when publishing or saving a draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogInput {
    pub title: String,
    pub desc: String,
    pub banner: String,
    pub tags: Vec<String>,
    pub content: BlogContent,
    pub draft: bool,
}

impl BlogInput {
    /// Lower-case every tag. Stored tags are always lower-case.
    pub fn with_normalized_tags(mut self) -> Self {
        self.tags = self.tags.iter().map(|tag| tag.to_lowercase()).collect();
        self
    }
}

/// Blog entity.
///
/// `id` is the internal key; `blog_id` is the external, human-readable one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub blog_id: String,
    pub title: String,
    pub desc: String,
    pub banner: String,
    pub content: BlogContent,
    pub tags: Vec<String>,
    pub author: Uuid,
    pub draft: bool,
    pub activity: Activity,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog owned by `author` with zeroed counters.
    pub fn new(author: Uuid, blog_id: String, input: BlogInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            blog_id,
            title: input.title,
            desc: input.desc,
            banner: input.banner,
            content: input.content,
            tags: input.tags,
            author,
            draft: input.draft,
            activity: Activity::default(),
            published_at: now,
            updated_at: now,
        }
    }
}

/// A blog joined with the public fields of its author.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogWithAuthor {
    pub blog: Blog,
    pub author: AuthorSummary,
}

/// Listing projection used by the latest, filter and search feeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogCard {
    pub blog_id: String,
    pub title: String,
    pub desc: String,
    pub banner: String,
    pub activity: Activity,
    pub tags: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub author: AuthorSummary,
}

impl From<BlogWithAuthor> for BlogCard {
    fn from(row: BlogWithAuthor) -> Self {
        let BlogWithAuthor { blog, author } = row;
        Self {
            blog_id: blog.blog_id,
            title: blog.title,
            desc: blog.desc,
            banner: blog.banner,
            activity: blog.activity,
            tags: blog.tags,
            published_at: blog.published_at,
            author,
        }
    }
}

/// Compact projection for the trending sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingBlog {
    pub blog_id: String,
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub author: AuthorSummary,
}

impl From<BlogWithAuthor> for TrendingBlog {
    fn from(row: BlogWithAuthor) -> Self {
        Self {
            blog_id: row.blog.blog_id,
            title: row.blog.title,
            published_at: row.blog.published_at,
            author: row.author,
        }
    }
}

/// Full projection returned when a single blog is read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogDetail {
    pub blog_id: String,
    pub title: String,
    pub desc: String,
    pub content: BlogContent,
    pub banner: String,
    pub activity: Activity,
    pub tags: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub author: AuthorSummary,
}

impl From<BlogWithAuthor> for BlogDetail {
    fn from(row: BlogWithAuthor) -> Self {
        let BlogWithAuthor { blog, author } = row;
        Self {
            blog_id: blog.blog_id,
            title: blog.title,
            desc: blog.desc,
            content: blog.content,
            banner: blog.banner,
            activity: blog.activity,
            tags: blog.tags,
            published_at: blog.published_at,
            author,
        }
    }
}
