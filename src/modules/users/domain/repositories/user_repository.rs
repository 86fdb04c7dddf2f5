use crate::modules::users::domain::entities::user::{ProfileChanges, User};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Persists a new account. Username and email are unique at the store
    /// level; a conflict surfaces as a `ValidationError`.
    async fn insert(&self, user: &User) -> AppResult<User>;

    async fn update_profile(&self, id: &Uuid, changes: &ProfileChanges) -> AppResult<User>;
}
