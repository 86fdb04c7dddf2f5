//! Mock repository for use in service-level tests across modules.

use super::entities::movie::{Movie, MovieFilter};
use super::repositories::movie_repository::MovieRepository;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

mockall::mock! {
    pub MovieRepo {}

    #[async_trait]
    impl MovieRepository for MovieRepo {
        async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>>;
        async fn create(&self, movie: &Movie) -> AppResult<Movie>;
        async fn update_aggregate_fields(
            &self,
            id: &Uuid,
            average_rating: f32,
            total_reviews: i32,
        ) -> AppResult<()>;
        async fn set_poster_url(&self, id: &Uuid, poster_url: &str) -> AppResult<()>;
        async fn list(
            &self,
            filter: &MovieFilter,
            page: &PaginationParams,
        ) -> AppResult<PaginatedResult<Movie>>;
    }
}
