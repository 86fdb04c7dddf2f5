use crate::modules::watchlist::domain::WatchlistEntry;
use crate::schema::watchlist_entries;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = watchlist_entries)]
#[diesel(primary_key(user_id, movie_id))]
pub struct WatchlistEntryModel {
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntryModel {
    pub fn into_entity(self) -> WatchlistEntry {
        WatchlistEntry {
            user_id: self.user_id,
            movie_id: self.movie_id,
            added_at: self.added_at,
        }
    }

    pub fn from_entity(entry: &WatchlistEntry) -> Self {
        Self {
            user_id: entry.user_id,
            movie_id: entry.movie_id,
            added_at: entry.added_at,
        }
    }
}
