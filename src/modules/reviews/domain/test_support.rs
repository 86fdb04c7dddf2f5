//! Mock repository for use in service-level tests across modules.

use super::entities::review::{Review, ReviewWithAuthor, ReviewWithMovie};
use super::repositories::review_repository::ReviewRepository;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

mockall::mock! {
    pub ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn find_existing(
            &self,
            user_id: &Uuid,
            movie_id: &Uuid,
        ) -> AppResult<Option<Review>>;
        async fn insert(&self, review: &Review) -> AppResult<Review>;
        async fn find_all_for_movie(&self, movie_id: &Uuid) -> AppResult<Vec<Review>>;
        async fn find_all_for_movie_with_authors(
            &self,
            movie_id: &Uuid,
        ) -> AppResult<Vec<ReviewWithAuthor>>;
        async fn find_all_for_user(&self, user_id: &Uuid) -> AppResult<Vec<ReviewWithMovie>>;
    }
}
