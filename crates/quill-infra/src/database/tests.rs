use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbConn, MockDatabase, MockExecResult, Statement, Value};
use serde_json::json;
use uuid::Uuid;

use quill_core::domain::Blog;
use quill_core::domain::pagination::PageRequest;
use quill_core::domain::search::SearchPattern;
use quill_core::ports::{BaseRepository, BlogFilter, BlogOrder, BlogRepository, UserRepository};

use crate::database::entity::{blog, user};
use crate::database::postgres_repo::{PostgresBlogRepository, PostgresUserRepository};

fn user_model(id: Uuid, username: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id,
        fullname: "Ada Lovelace".to_owned(),
        email: format!("{username}@example.com"),
        password: Some("$argon2id$hash".to_owned()),
        username: username.to_owned(),
        bio: String::new(),
        profile_img: format!("https://img/{username}"),
        social_links: json!({ "github": "https://github.com/ada" }),
        total_posts: 2,
        total_reads: 40,
        google_auth: false,
        blogs: vec![Uuid::new_v4(), Uuid::new_v4()],
        joined_at: now.into(),
        updated_at: now.into(),
    }
}

fn blog_model(author_id: Uuid, blog_id: &str, total_reads: i64) -> blog::Model {
    let now = Utc::now();
    blog::Model {
        id: Uuid::new_v4(),
        blog_id: blog_id.to_owned(),
        title: "Test Blog".to_owned(),
        description: "Desc".to_owned(),
        banner: "https://cdn/banner.png".to_owned(),
        content: json!({ "blocks": [{ "type": "paragraph", "data": { "text": "hi" } }] }),
        tags: vec!["rust".to_owned()],
        author_id,
        draft: false,
        total_likes: 0,
        total_comments: 0,
        total_reads,
        total_parent_comments: 0,
        published_at: now.into(),
        updated_at: now.into(),
    }
}

fn mock(db: MockDatabase) -> DbConn {
    db.into_connection()
}

fn count_result(n: i64) -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![BTreeMap::from([("num_items", Value::BigInt(Some(n)))])]])
}

/// Every statement the mock connection has executed.
fn statements(db: DbConn) -> Vec<Statement> {
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().to_vec())
        .collect()
}

fn values(statement: &Statement) -> Vec<Value> {
    statement
        .values
        .as_ref()
        .map(|values| values.0.clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_find_blog_by_id() {
    let author = Uuid::new_v4();
    let model = blog_model(author, "Test-Blog-abc", 3);
    let id = model.id;

    let db = mock(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![model]]));
    let repo = PostgresBlogRepository::new(db);

    let blog: Blog = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(blog.id, id);
    assert_eq!(blog.title, "Test Blog");
    assert_eq!(blog.desc, "Desc");
    assert_eq!(blog.activity.total_reads, 3);
    assert_eq!(blog.content.blocks.len(), 1);
    assert_eq!(blog.content.blocks[0].kind.as_deref(), Some("paragraph"));
}

#[tokio::test]
async fn test_corrupt_content_is_reported() {
    let mut model = blog_model(Uuid::new_v4(), "Broken-abc", 0);
    model.content = json!("not a document");
    let id = model.id;

    let db = mock(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![model]]));
    let repo = PostgresBlogRepository::new(db);

    let result: Result<Option<Blog>, _> = repo.find_by_id(id).await;
    assert!(matches!(result, Err(quill_core::RepoError::Corrupt(_))));
}

#[tokio::test]
async fn test_find_user_by_username() {
    let id = Uuid::new_v4();
    let db = mock(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(id, "ada")]]),
    );
    let repo = PostgresUserRepository::new(db);

    let user = repo.find_by_username("ada").await.unwrap().unwrap();

    assert_eq!(user.id, id);
    assert_eq!(user.account_info.total_reads, 40);
    assert_eq!(user.social_links.github, "https://github.com/ada");
    assert_eq!(user.blogs.len(), 2);
}

#[tokio::test]
async fn test_search_users_returns_summaries() {
    let db = mock(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
        user_model(Uuid::new_v4(), "ada"),
        user_model(Uuid::new_v4(), "adam"),
    ]]));
    let repo = PostgresUserRepository::new(db);

    let pattern = SearchPattern::contains("AD");
    let users = repo.search_by_username(&pattern, 50).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].personal_info.username, "adam");
}

#[tokio::test]
async fn test_record_post_for_unknown_author() {
    let db = mock(
        MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }]),
    );
    let repo = PostgresUserRepository::new(db);

    let result = repo.record_post(Uuid::new_v4(), Uuid::new_v4(), true).await;
    assert!(matches!(result, Err(quill_core::RepoError::NotFound)));
}

#[tokio::test]
async fn test_list_latest_joins_author() {
    let author_id = Uuid::new_v4();
    let db = mock(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
        (
            blog_model(author_id, "First-abc", 1),
            user_model(author_id, "ada"),
        ),
        (
            blog_model(author_id, "Second-def", 9),
            user_model(author_id, "ada"),
        ),
    ]]));
    let repo = PostgresBlogRepository::new(db);

    let rows = repo
        .list_published(
            &BlogFilter::All,
            BlogOrder::Latest,
            PageRequest::new(Some(1), 5).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].blog.blog_id, "First-abc");
    assert_eq!(rows[0].author.personal_info.username, "ada");
}

#[tokio::test]
async fn test_count_published() {
    let repo = PostgresBlogRepository::new(mock(count_result(7)));

    let count = repo
        .count_published(&BlogFilter::Tag {
            tag: "rust".to_owned(),
            exclude_blog_id: None,
        })
        .await
        .unwrap();

    assert_eq!(count, 7);
}

#[tokio::test]
async fn test_read_unknown_blog_returns_none() {
    let db = mock(
        MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }]),
    );
    let repo = PostgresBlogRepository::new(db);

    assert!(repo.read_by_blog_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_read_blog_returns_joined_row() {
    let author_id = Uuid::new_v4();
    let db = mock(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![(
                blog_model(author_id, "Read-me-abc", 6),
                user_model(author_id, "ada"),
            )]]),
    );
    let repo = PostgresBlogRepository::new(db);

    let row = repo.read_by_blog_id("Read-me-abc").await.unwrap().unwrap();

    assert_eq!(row.blog.activity.total_reads, 6);
    assert_eq!(row.blog.author, author_id);
    assert_eq!(row.author.personal_info.fullname, "Ada Lovelace");
}

#[tokio::test]
async fn test_title_search_escapes_like_wildcards() {
    let repo = PostgresBlogRepository::new(mock(count_result(0)));

    repo.count_published(&BlogFilter::Title(SearchPattern::contains("50%_X\\")))
        .await
        .unwrap();

    let log = statements(repo.db);
    assert_eq!(log.len(), 1);
    assert!(log[0].sql.contains(r#"LOWER("blogs"."title") LIKE $"#));
    assert!(log[0].sql.contains("ESCAPE"));
    assert!(values(&log[0]).contains(&Value::from(r"%50\%\_x\\%")));
}

#[tokio::test]
async fn test_tag_search_excludes_blog() {
    let repo = PostgresBlogRepository::new(mock(count_result(1)));

    repo.count_published(&BlogFilter::Tag {
        tag: "rust".to_owned(),
        exclude_blog_id: Some("Current-abc".to_owned()),
    })
    .await
    .unwrap();

    let log = statements(repo.db);
    assert_eq!(log.len(), 1);
    assert!(log[0].sql.contains(r#"= ANY("blogs"."tags")"#));
    assert!(log[0].sql.contains(r#""blogs"."blog_id" <> $"#));
    let values = values(&log[0]);
    assert!(values.contains(&Value::from("rust")));
    assert!(values.contains(&Value::from("Current-abc")));
}

#[tokio::test]
async fn test_record_post_appends_blog_in_one_update() {
    let db = mock(
        MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }]),
    );
    let repo = PostgresUserRepository::new(db);
    let (author, blog) = (Uuid::new_v4(), Uuid::new_v4());

    repo.record_post(author, blog, true).await.unwrap();

    let log = statements(repo.db);
    assert_eq!(log.len(), 1);
    assert!(log[0].sql.starts_with(r#"UPDATE "users""#));
    assert!(log[0].sql.contains(r#"array_append("blogs", $"#));
    assert!(log[0].sql.contains(r#""total_posts" + $"#));
    let values = values(&log[0]);
    assert!(values.contains(&Value::from(blog)));
    assert!(values.contains(&Value::from(author)));
    assert!(values.contains(&Value::BigInt(Some(1))));
}
