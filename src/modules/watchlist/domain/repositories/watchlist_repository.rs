use crate::modules::watchlist::domain::entities::watchlist_entry::{
    WatchlistEntry, WatchlistItem,
};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    async fn find_entry(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
    ) -> AppResult<Option<WatchlistEntry>>;

    /// The composite primary key makes the (user, movie) pair unique at the
    /// store level; a racing duplicate insert surfaces as a `ValidationError`
    /// identical to the pre-check rejection.
    async fn insert(&self, entry: &WatchlistEntry) -> AppResult<WatchlistEntry>;

    /// Returns whether an entry was actually removed.
    async fn delete(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<bool>;

    async fn find_all_for_user(&self, user_id: &Uuid) -> AppResult<Vec<WatchlistItem>>;
}
