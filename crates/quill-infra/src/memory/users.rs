use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use quill_core::domain::search::SearchPattern;
use quill_core::domain::{AuthorSummary, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, UserRepository};

use super::InMemoryStore;

pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.store.users.write().await;

        let taken = users.values().any(|existing| {
            existing.personal_info.email == user.personal_info.email
                || existing.personal_info.username == user.personal_info.username
        });
        if taken || users.contains_key(&user.id) {
            return Err(RepoError::Constraint("user already exists".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.store.users.read().await;
        Ok(users
            .values()
            .find(|user| user.personal_info.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let users = self.store.users.read().await;
        Ok(users
            .values()
            .find(|user| user.personal_info.username == username)
            .cloned())
    }

    async fn search_by_username(
        &self,
        pattern: &SearchPattern,
        limit: u64,
    ) -> Result<Vec<AuthorSummary>, RepoError> {
        let users = self.store.users.read().await;
        let mut matches: Vec<&User> = users
            .values()
            .filter(|user| pattern.matches(&user.personal_info.username))
            .collect();
        matches.sort_by(|a, b| a.personal_info.username.cmp(&b.personal_info.username));

        Ok(matches
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(User::summary)
            .collect())
    }

    async fn record_post(
        &self,
        author: Uuid,
        blog: Uuid,
        published: bool,
    ) -> Result<(), RepoError> {
        let mut users = self.store.users.write().await;
        let user = users.get_mut(&author).ok_or(RepoError::NotFound)?;

        if published {
            user.account_info.total_posts += 1;
        }
        user.blogs.push(blog);
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn increment_total_reads(&self, author: Uuid) -> Result<(), RepoError> {
        let mut users = self.store.users.write().await;
        let user = users.get_mut(&author).ok_or(RepoError::NotFound)?;
        user.account_info.total_reads += 1;
        Ok(())
    }
}
