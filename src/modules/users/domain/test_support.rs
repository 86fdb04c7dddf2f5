//! Mock repository for use in service-level tests across modules.

use super::entities::user::{ProfileChanges, User};
use super::repositories::user_repository::UserRepository;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

mockall::mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
        async fn insert(&self, user: &User) -> AppResult<User>;
        async fn update_profile(&self, id: &Uuid, changes: &ProfileChanges) -> AppResult<User>;
    }
}
