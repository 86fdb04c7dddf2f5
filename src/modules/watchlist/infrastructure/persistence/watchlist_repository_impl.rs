use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;
use uuid::Uuid;

use crate::modules::movies::infrastructure::models::MovieModel;
use crate::modules::watchlist::domain::{WatchlistEntry, WatchlistItem, WatchlistRepository};
use crate::modules::watchlist::infrastructure::models::WatchlistEntryModel;
use crate::schema::{movies, watchlist_entries};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct WatchlistRepositoryImpl {
    db: Arc<Database>,
}

impl WatchlistRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WatchlistRepository for WatchlistRepositoryImpl {
    async fn find_entry(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
    ) -> AppResult<Option<WatchlistEntry>> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;
        let movie_id = *movie_id;

        let model = task::spawn_blocking(move || -> AppResult<Option<WatchlistEntryModel>> {
            let mut conn = db.get_connection()?;
            let m = watchlist_entries::table
                .filter(watchlist_entries::user_id.eq(user_id))
                .filter(watchlist_entries::movie_id.eq(movie_id))
                .first::<WatchlistEntryModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(WatchlistEntryModel::into_entity))
    }

    async fn insert(&self, entry: &WatchlistEntry) -> AppResult<WatchlistEntry> {
        let db = Arc::clone(&self.db);
        let row = WatchlistEntryModel::from_entity(entry);

        let stored = task::spawn_blocking(move || -> AppResult<WatchlistEntryModel> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(watchlist_entries::table)
                .values(&row)
                .get_result::<WatchlistEntryModel>(&mut conn)
                .map_err(|e| match e {
                    // Composite primary key caught a racing duplicate
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AppError::ValidationError("Movie already in watchlist".to_string())
                    }
                    other => AppError::from(other),
                })
        })
        .await??;

        Ok(stored.into_entity())
    }

    async fn delete(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;
        let movie_id = *movie_id;

        let removed = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(
                watchlist_entries::table
                    .filter(watchlist_entries::user_id.eq(user_id))
                    .filter(watchlist_entries::movie_id.eq(movie_id)),
            )
            .execute(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(removed > 0)
    }

    async fn find_all_for_user(&self, user_id: &Uuid) -> AppResult<Vec<WatchlistItem>> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;

        let rows = task::spawn_blocking(
            move || -> AppResult<Vec<(WatchlistEntryModel, MovieModel)>> {
                let mut conn = db.get_connection()?;
                let rows = watchlist_entries::table
                    .inner_join(movies::table)
                    .filter(watchlist_entries::user_id.eq(user_id))
                    .order(watchlist_entries::added_at.desc())
                    .load::<(WatchlistEntryModel, MovieModel)>(&mut conn)?;
                Ok(rows)
            },
        )
        .await??;

        Ok(rows
            .into_iter()
            .map(|(entry, movie)| WatchlistItem {
                movie: movie.into_entity(),
                added_at: entry.added_at,
            })
            .collect())
    }
}
