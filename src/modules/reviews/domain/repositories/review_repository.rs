use crate::modules::reviews::domain::entities::review::{
    Review, ReviewWithAuthor, ReviewWithMovie,
};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Pre-insert duplicate probe; no side effects.
    async fn find_existing(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<Option<Review>>;

    /// Persists a review. The store enforces (user, movie) uniqueness
    /// atomically at insert time; a conflicting concurrent insert surfaces
    /// as `AppError::DuplicateReview`, never as a second stored row.
    async fn insert(&self, review: &Review) -> AppResult<Review>;

    /// All reviews for a movie in insertion order; aggregation input and
    /// raw display path.
    async fn find_all_for_movie(&self, movie_id: &Uuid) -> AppResult<Vec<Review>>;

    /// Reviews for a movie with author identity resolved for display.
    async fn find_all_for_movie_with_authors(
        &self,
        movie_id: &Uuid,
    ) -> AppResult<Vec<ReviewWithAuthor>>;

    /// A user's reviews with movie summaries, for the profile page.
    async fn find_all_for_user(&self, user_id: &Uuid) -> AppResult<Vec<ReviewWithMovie>>;
}
