use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::movies::domain::{Movie, MovieFilter, MovieRepository};
use crate::modules::movies::infrastructure::models::{MovieModel, NewMovieRow};
use crate::schema::movies;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn apply_filter<'a>(
        filter: &MovieFilter,
        mut query: movies::BoxedQuery<'a, diesel::pg::Pg>,
    ) -> movies::BoxedQuery<'a, diesel::pg::Pg> {
        if let Some(search) = &filter.search {
            let escaped = search.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
            query = query.filter(movies::title.ilike(format!("%{}%", escaped)));
        }
        if let Some(genre) = &filter.genre {
            // Exact membership in the genre tag array
            query = query.filter(movies::genre.contains(serde_json::json!([genre])));
        }
        if let Some(year) = filter.year {
            query = query.filter(movies::release_year.eq(year));
        }
        if let Some(min_rating) = filter.min_rating {
            query = query.filter(movies::average_rating.ge(min_rating));
        }
        query
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::id.eq(id))
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(MovieModel::into_entity))
    }

    async fn create(&self, movie: &Movie) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);
        let row = NewMovieRow::from_entity(movie);

        let stored = task::spawn_blocking(move || -> AppResult<MovieModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(movies::table)
                .values(&row)
                .get_result::<MovieModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(stored.into_entity())
    }

    async fn update_aggregate_fields(
        &self,
        id: &Uuid,
        average_rating: f32,
        total_reviews: i32,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            // Conditional write: reviews are append-only, so a recompute that
            // carries a lower count than the stored one was derived from a
            // stale read and must not overwrite the newer aggregate.
            let updated = diesel::update(
                movies::table
                    .filter(movies::id.eq(id))
                    .filter(movies::total_reviews.le(total_reviews)),
            )
            .set((
                movies::average_rating.eq(average_rating),
                movies::total_reviews.eq(total_reviews),
                movies::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

            if updated == 0 {
                let movie_exists: bool =
                    select(exists(movies::table.filter(movies::id.eq(id))))
                        .get_result(&mut conn)?;
                if !movie_exists {
                    return Err(AppError::NotFound(format!(
                        "Movie with ID {} not found",
                        id
                    )));
                }
                log_debug!(
                    "Skipped stale aggregate write for movie {} (count {} behind stored value)",
                    id,
                    total_reviews
                );
            }

            Ok(())
        })
        .await?
    }

    async fn set_poster_url(&self, id: &Uuid, poster_url: &str) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;
        let poster_url = poster_url.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(movies::table.filter(movies::id.eq(id)))
                .set((
                    movies::poster_url.eq(poster_url),
                    movies::updated_at.eq(Utc::now()),
                ))
                .execute(&mut conn)?;

            if updated == 0 {
                return Err(AppError::NotFound(format!(
                    "Movie with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn list(
        &self,
        filter: &MovieFilter,
        page: &PaginationParams,
    ) -> AppResult<PaginatedResult<Movie>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        let page = page.clone();
        let query_page = page.clone();

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<MovieModel>, i64)> {
            let mut conn = db.get_connection()?;

            let total: i64 = Self::apply_filter(&filter, movies::table.into_boxed())
                .count()
                .get_result(&mut conn)?;

            let models = Self::apply_filter(&filter, movies::table.into_boxed())
                .order((movies::created_at.desc(), movies::id.asc()))
                .limit(query_page.limit())
                .offset(query_page.offset())
                .load::<MovieModel>(&mut conn)?;

            Ok((models, total))
        })
        .await??;

        let items = models.into_iter().map(MovieModel::into_entity).collect();
        Ok(PaginatedResult::new(items, total as u64, &page))
    }
}
