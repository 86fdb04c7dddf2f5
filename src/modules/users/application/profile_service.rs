use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::modules::reviews::domain::{ReviewRepository, ReviewWithMovie};
use crate::modules::users::domain::{ProfileChanges, User, UserRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// A user plus their review history, the profile page shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub user: User,
    pub reviews: Vec<ReviewWithMovie>,
}

pub struct ProfileService {
    user_repo: Arc<dyn UserRepository>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl ProfileService {
    pub fn new(user_repo: Arc<dyn UserRepository>, review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self {
            user_repo,
            review_repo,
        }
    }

    pub async fn get_profile(&self, id: &Uuid) -> AppResult<ProfileDetail> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let reviews = self.review_repo.find_all_for_user(id).await?;

        Ok(ProfileDetail { user, reviews })
    }

    pub async fn update_profile(&self, id: &Uuid, changes: ProfileChanges) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::ValidationError(
                "at least one field must be provided".to_string(),
            ));
        }
        if let Some(username) = &changes.username {
            Validator::validate_username(username)?;
        }
        if let Some(email) = &changes.email {
            Validator::validate_email(email)?;
        }

        self.user_repo.update_profile(id, &changes).await
    }
}
