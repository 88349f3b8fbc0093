//! Blog feeds, search, publishing and reading.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::identifiers::generate_blog_id;
use quill_core::domain::pagination::{
    FILTER_PAGE_SIZE, LATEST_PAGE_SIZE, PageRequest, TRENDING_LIMIT, search_page_size,
};
use quill_core::domain::search::SearchPattern;
use quill_core::domain::validation::validate_blog;
use quill_core::domain::{Blog, BlogCard, BlogDetail, BlogInput, BlogWithAuthor, TrendingBlog};
use quill_core::error::DomainError;
use quill_core::ports::{BaseRepository, BlogFilter, BlogOrder};
use quill_shared::dto::{
    BlogResponse, BlogsResponse, CountResponse, CreateBlogRequest, CreateBlogResponse,
    FilterBlogsRequest, GetBlogRequest, LatestBlogsRequest, SearchBlogsRequest,
    SearchCountRequest, TagCountRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn cards(rows: Vec<BlogWithAuthor>) -> BlogsResponse<BlogCard> {
    BlogsResponse {
        blogs: rows.into_iter().map(BlogCard::from).collect(),
    }
}

/// Empty strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn tag_filter(tag: &str, exclude_blog_id: Option<String>) -> BlogFilter {
    BlogFilter::Tag {
        tag: tag.to_lowercase(),
        exclude_blog_id,
    }
}

/// POST /latest-blogs
pub async fn latest_blogs(
    state: web::Data<AppState>,
    body: web::Json<LatestBlogsRequest>,
) -> AppResult<HttpResponse> {
    let page = PageRequest::new(body.page, LATEST_PAGE_SIZE)?;

    let rows = state
        .blogs
        .list_published(&BlogFilter::All, BlogOrder::Latest, page)
        .await?;

    Ok(HttpResponse::Ok().json(cards(rows)))
}

/// GET /all-latest-blogs-count
pub async fn all_latest_blogs_count(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let total_docs = state.blogs.count_published(&BlogFilter::All).await?;
    Ok(HttpResponse::Ok().json(CountResponse { total_docs }))
}

/// GET /trending-blogs
pub async fn trending_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let rows = state
        .blogs
        .list_published(
            &BlogFilter::All,
            BlogOrder::Trending,
            PageRequest::first(TRENDING_LIMIT),
        )
        .await?;

    Ok(HttpResponse::Ok().json(BlogsResponse {
        blogs: rows
            .into_iter()
            .map(TrendingBlog::from)
            .collect::<Vec<_>>(),
    }))
}

/// POST /filter-blogs
pub async fn filter_blogs(
    state: web::Data<AppState>,
    body: web::Json<FilterBlogsRequest>,
) -> AppResult<HttpResponse> {
    let page = PageRequest::new(body.page, FILTER_PAGE_SIZE)?;

    let rows = state
        .blogs
        .list_published(&tag_filter(&body.tag, None), BlogOrder::Latest, page)
        .await?;

    Ok(HttpResponse::Ok().json(cards(rows)))
}

/// POST /filter-blogs-count
pub async fn filter_blogs_count(
    state: web::Data<AppState>,
    body: web::Json<TagCountRequest>,
) -> AppResult<HttpResponse> {
    let total_docs = state
        .blogs
        .count_published(&tag_filter(&body.tag, None))
        .await?;
    Ok(HttpResponse::Ok().json(CountResponse { total_docs }))
}

/// POST /search-blogs
///
/// The first present of `tag`, `query` and `author` picks the filter.
pub async fn search_blogs(
    state: web::Data<AppState>,
    body: web::Json<SearchBlogsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let page = PageRequest::new(req.page, search_page_size(req.limit))?;

    let filter = if let Some(tag) = present(req.tag) {
        tag_filter(&tag, present(req.eliminate_blog))
    } else if let Some(query) = present(req.query) {
        BlogFilter::Title(SearchPattern::contains(&query))
    } else if let Some(author) = present(req.author) {
        let author = Uuid::parse_str(&author)
            .map_err(|_| DomainError::InvalidInput("Invalid author id".to_string()))?;
        BlogFilter::Author(author)
    } else {
        BlogFilter::All
    };

    tracing::debug!(?filter, page = page.page(), "Searching blogs");

    let rows = state
        .blogs
        .list_published(&filter, BlogOrder::Latest, page)
        .await?;

    Ok(HttpResponse::Ok().json(cards(rows)))
}

/// POST /search-blogs-count
pub async fn search_blogs_count(
    state: web::Data<AppState>,
    body: web::Json<SearchCountRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let filter = if let Some(tag) = present(req.tag) {
        tag_filter(&tag, None)
    } else if let Some(query) = present(req.query) {
        BlogFilter::Title(SearchPattern::contains(&query))
    } else {
        BlogFilter::All
    };

    let total_docs = state.blogs.count_published(&filter).await?;
    Ok(HttpResponse::Ok().json(CountResponse { total_docs }))
}

/// POST /create-blog - Protected route
pub async fn create_blog(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let input = BlogInput::from(body.into_inner());
    validate_blog(&input)?;

    let input = input.with_normalized_tags();
    let published = !input.draft;
    let blog_id = generate_blog_id(&input.title);

    let blog = state
        .blogs
        .insert(Blog::new(identity.user_id, blog_id, input))
        .await?;

    state
        .users
        .record_post(identity.user_id, blog.id, published)
        .await?;

    tracing::info!(
        blog_id = %blog.blog_id,
        author = %identity.user_id,
        draft = blog.draft,
        "Blog created"
    );

    Ok(HttpResponse::Ok().json(CreateBlogResponse { id: blog.blog_id }))
}

/// POST /get-blog
///
/// Counts a read on the blog and, best effort, on its author.
pub async fn get_blog(
    state: web::Data<AppState>,
    body: web::Json<GetBlogRequest>,
) -> AppResult<HttpResponse> {
    let blog_id = body.into_inner().blog_id;

    let Some(row) = state.blogs.read_by_blog_id(&blog_id).await? else {
        return Err(DomainError::NotFound {
            entity_type: "Blog",
            key: blog_id,
        }
        .into());
    };

    if let Err(e) = state.users.increment_total_reads(row.blog.author).await {
        tracing::warn!(
            author = %row.blog.author,
            error = %e,
            "Failed to count read for blog author"
        );
    }

    Ok(HttpResponse::Ok().json(BlogResponse {
        blog: BlogDetail::from(row),
    }))
}
