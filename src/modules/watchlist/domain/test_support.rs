//! Mock repository for use in service-level tests across modules.

use super::entities::watchlist_entry::{WatchlistEntry, WatchlistItem};
use super::repositories::watchlist_repository::WatchlistRepository;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

mockall::mock! {
    pub WatchlistRepo {}

    #[async_trait]
    impl WatchlistRepository for WatchlistRepo {
        async fn find_entry(
            &self,
            user_id: &Uuid,
            movie_id: &Uuid,
        ) -> AppResult<Option<WatchlistEntry>>;
        async fn insert(&self, entry: &WatchlistEntry) -> AppResult<WatchlistEntry>;
        async fn delete(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<bool>;
        async fn find_all_for_user(&self, user_id: &Uuid) -> AppResult<Vec<WatchlistItem>>;
    }
}
