use std::sync::Arc;

use uuid::Uuid;

use crate::modules::movies::domain::MovieRepository;
use crate::modules::watchlist::domain::{WatchlistEntry, WatchlistItem, WatchlistRepository};
use crate::shared::errors::{AppError, AppResult};

pub struct WatchlistService {
    watchlist_repo: Arc<dyn WatchlistRepository>,
    movie_repo: Arc<dyn MovieRepository>,
}

impl WatchlistService {
    pub fn new(
        watchlist_repo: Arc<dyn WatchlistRepository>,
        movie_repo: Arc<dyn MovieRepository>,
    ) -> Self {
        Self {
            watchlist_repo,
            movie_repo,
        }
    }

    pub async fn get_watchlist(&self, user_id: &Uuid) -> AppResult<Vec<WatchlistItem>> {
        self.watchlist_repo.find_all_for_user(user_id).await
    }

    pub async fn add(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<WatchlistEntry> {
        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

        if self
            .watchlist_repo
            .find_entry(user_id, movie_id)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(
                "Movie already in watchlist".to_string(),
            ));
        }

        let entry = WatchlistEntry::new(*user_id, *movie_id);
        self.watchlist_repo.insert(&entry).await
    }

    pub async fn remove(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<()> {
        let removed = self.watchlist_repo.delete(user_id, movie_id).await?;
        if !removed {
            return Err(AppError::NotFound(
                "Item not found in watchlist".to_string(),
            ));
        }
        Ok(())
    }
}
