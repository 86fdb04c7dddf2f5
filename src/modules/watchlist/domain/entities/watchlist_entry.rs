use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::movies::domain::Movie;

/// A user-to-movie bookmark. The (user, movie) pair is the identity; at most
/// one entry exists per pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntry {
    pub fn new(user_id: Uuid, movie_id: Uuid) -> Self {
        Self {
            user_id,
            movie_id,
            added_at: Utc::now(),
        }
    }
}

/// A watchlist entry with the movie resolved for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub movie: Movie,
    pub added_at: DateTime<Utc>,
}
