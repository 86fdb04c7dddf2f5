use crate::modules::movies::domain::entities::movie::{Movie, MovieFilter};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>>;

    async fn create(&self, movie: &Movie) -> AppResult<Movie>;

    /// The only mutation path for the derived rating fields.
    ///
    /// The write is conditional on `total_reviews` not going backwards:
    /// reviews are immutable and never deleted, so a recompute carrying a
    /// smaller count was derived from a stale snapshot and must not clobber
    /// a newer one. Returns `NotFound` if the movie row does not exist.
    async fn update_aggregate_fields(
        &self,
        id: &Uuid,
        average_rating: f32,
        total_reviews: i32,
    ) -> AppResult<()>;

    async fn set_poster_url(&self, id: &Uuid, poster_url: &str) -> AppResult<()>;

    /// Ordering is (created_at, id) so pages are stable for an unchanged set.
    async fn list(
        &self,
        filter: &MovieFilter,
        page: &PaginationParams,
    ) -> AppResult<PaginatedResult<Movie>>;
}
