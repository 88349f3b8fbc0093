//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use quill_core::domain::pagination::PageRequest;
use quill_core::domain::search::{LIKE_ESCAPE, SearchPattern};
use quill_core::domain::{AuthorSummary, Blog, BlogWithAuthor, User};
use quill_core::error::RepoError;
use quill_core::ports::{BlogFilter, BlogOrder, BlogRepository, UserRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// `lower(column) LIKE pattern ESCAPE '\'`.
fn ilike_literal<C>(column: C, pattern: &SearchPattern) -> SimpleExpr
where
    C: ColumnTrait,
{
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
        .like(LikeExpr::new(pattern.like_pattern()).escape(LIKE_ESCAPE))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!("Finding user by email");

        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(repo_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(repo_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn search_by_username(
        &self,
        pattern: &SearchPattern,
        limit: u64,
    ) -> Result<Vec<AuthorSummary>, RepoError> {
        let users = UserEntity::find()
            .filter(ilike_literal(user::Column::Username, pattern))
            .order_by_asc(user::Column::Username)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(users.iter().map(user::Model::summary).collect())
    }

    async fn record_post(
        &self,
        author: Uuid,
        blog: Uuid,
        published: bool,
    ) -> Result<(), RepoError> {
        let increment: i64 = if published { 1 } else { 0 };

        let result = UserEntity::update_many()
            .col_expr(
                user::Column::TotalPosts,
                Expr::col(user::Column::TotalPosts).add(increment),
            )
            .col_expr(
                user::Column::Blogs,
                Expr::cust_with_values(r#"array_append("blogs", $1)"#, [blog]),
            )
            .filter(user::Column::Id.eq(author))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn increment_total_reads(&self, author: Uuid) -> Result<(), RepoError> {
        let result = UserEntity::update_many()
            .col_expr(
                user::Column::TotalReads,
                Expr::col(user::Column::TotalReads).add(1),
            )
            .filter(user::Column::Id.eq(author))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// Non-draft blogs narrowed by `filter`.
fn published(filter: &BlogFilter) -> Select<BlogEntity> {
    let query = BlogEntity::find().filter(blog::Column::Draft.eq(false));

    match filter {
        BlogFilter::All => query,
        BlogFilter::Tag {
            tag,
            exclude_blog_id,
        } => {
            let query = query.filter(Expr::cust_with_values(
                r#"$1 = ANY("blogs"."tags")"#,
                [tag.clone()],
            ));
            match exclude_blog_id {
                Some(excluded) => query.filter(blog::Column::BlogId.ne(excluded.as_str())),
                None => query,
            }
        }
        BlogFilter::Title(pattern) => query.filter(ilike_literal(blog::Column::Title, pattern)),
        BlogFilter::Author(author) => query.filter(blog::Column::AuthorId.eq(*author)),
    }
}

fn join_author(
    blog: blog::Model,
    author: Option<user::Model>,
) -> Result<BlogWithAuthor, RepoError> {
    let author = author.ok_or_else(|| {
        RepoError::Corrupt(format!("author of blog {} is missing", blog.blog_id))
    })?;

    Ok(BlogWithAuthor {
        author: author.summary(),
        blog: Blog::try_from(blog)?,
    })
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list_published(
        &self,
        filter: &BlogFilter,
        order: BlogOrder,
        page: PageRequest,
    ) -> Result<Vec<BlogWithAuthor>, RepoError> {
        let query = match order {
            BlogOrder::Latest => published(filter).order_by_desc(blog::Column::PublishedAt),
            BlogOrder::Trending => published(filter)
                .order_by_desc(blog::Column::TotalReads)
                .order_by_desc(blog::Column::TotalLikes)
                .order_by_desc(blog::Column::PublishedAt),
        };

        let rows = query
            .find_also_related(UserEntity)
            .offset(page.skip())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        rows.into_iter()
            .map(|(blog, author)| join_author(blog, author))
            .collect()
    }

    async fn count_published(&self, filter: &BlogFilter) -> Result<u64, RepoError> {
        published(filter).count(&self.db).await.map_err(repo_error)
    }

    async fn read_by_blog_id(&self, blog_id: &str) -> Result<Option<BlogWithAuthor>, RepoError> {
        let updated = BlogEntity::update_many()
            .col_expr(
                blog::Column::TotalReads,
                Expr::col(blog::Column::TotalReads).add(1),
            )
            .filter(blog::Column::BlogId.eq(blog_id))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if updated.rows_affected == 0 {
            return Ok(None);
        }

        let row = BlogEntity::find()
            .filter(blog::Column::BlogId.eq(blog_id))
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        row.map(|(blog, author)| join_author(blog, author))
            .transpose()
    }
}
