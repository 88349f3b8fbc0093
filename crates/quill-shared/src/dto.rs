//! Data Transfer Objects - request/response bodies for the API.
//!
//! Missing optional fields deserialize to their defaults so handlers can
//! produce the same validation messages whether a field is absent or empty.

use serde::{Deserialize, Serialize};

use quill_core::domain::{BlogContent, BlogInput};

/// `POST /latest-blogs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestBlogsRequest {
    #[serde(default)]
    pub page: Option<i64>,
}

/// `POST /filter-blogs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterBlogsRequest {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub page: Option<i64>,
}

/// `POST /filter-blogs-count`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagCountRequest {
    #[serde(default)]
    pub tag: String,
}

/// `POST /search-blogs`. The first non-empty of `tag`, `query`, `author`
/// selects the filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBlogsRequest {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    /// Internal id of the author.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<u64>,
    /// External id of a blog to leave out of tag results.
    #[serde(default)]
    pub eliminate_blog: Option<String>,
}

/// `POST /search-blogs-count`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCountRequest {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// `POST /create-blog`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: BlogContent,
    #[serde(default)]
    pub draft: bool,
}

impl From<CreateBlogRequest> for BlogInput {
    fn from(req: CreateBlogRequest) -> Self {
        Self {
            title: req.title,
            desc: req.desc,
            banner: req.banner,
            tags: req.tags,
            content: req.content,
            draft: req.draft,
        }
    }
}

/// `POST /get-blog`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetBlogRequest {
    #[serde(default)]
    pub blog_id: String,
}

/// `POST /search-users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchUsersRequest {
    #[serde(default)]
    pub query: String,
}

/// `POST /get-profile`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetProfileRequest {
    #[serde(default)]
    pub username: String,
}

/// `POST /signup`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /signin`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by sign-up and sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub profile_img: String,
    pub username: String,
    pub fullname: String,
}

/// The external id of a freshly created blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogsResponse<T> {
    pub blogs: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse<T> {
    pub blog: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse<T> {
    pub users: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(rename = "totalDocs")]
    pub total_docs: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateBlogRequest = serde_json::from_value(json!({ "title": "Hello" })).unwrap();

        assert_eq!(req.title, "Hello");
        assert!(!req.draft);
        assert!(req.tags.is_empty());
        assert!(req.content.is_empty());
    }

    #[test]
    fn test_create_request_parses_editor_output() {
        let req: CreateBlogRequest = serde_json::from_value(json!({
            "title": "Hello",
            "content": {
                "time": 1_700_000_000_000_i64,
                "blocks": [{ "id": "x1", "type": "header", "data": { "text": "Hi", "level": 2 } }],
                "version": "2.28.2"
            },
            "draft": true
        }))
        .unwrap();

        let input = BlogInput::from(req);
        assert!(input.draft);
        assert_eq!(input.content.blocks[0].kind.as_deref(), Some("header"));
    }

    #[test]
    fn test_search_request_with_null_fields() {
        let req: SearchBlogsRequest =
            serde_json::from_value(json!({ "query": "rust", "tag": null, "page": 2 })).unwrap();

        assert_eq!(req.query.as_deref(), Some("rust"));
        assert!(req.tag.is_none());
        assert_eq!(req.page, Some(2));
        assert!(req.limit.is_none());
    }

    #[test]
    fn test_count_response_field_name() {
        let body = serde_json::to_value(CountResponse { total_docs: 3 }).unwrap();
        assert_eq!(body, json!({ "totalDocs": 3 }));
    }
}
