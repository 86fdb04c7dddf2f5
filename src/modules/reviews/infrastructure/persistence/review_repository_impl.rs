use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;
use uuid::Uuid;

use crate::modules::reviews::domain::{
    Review, ReviewAuthor, ReviewRepository, ReviewWithAuthor, ReviewWithMovie,
};
use crate::modules::reviews::infrastructure::models::{NewReviewRow, ReviewModel};
use crate::schema::{movies, reviews, users};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn find_existing(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<Option<Review>> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;
        let movie_id = *movie_id;

        let model = task::spawn_blocking(move || -> AppResult<Option<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let m = reviews::table
                .filter(reviews::user_id.eq(user_id))
                .filter(reviews::movie_id.eq(movie_id))
                .first::<ReviewModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(ReviewModel::into_entity))
    }

    async fn insert(&self, review: &Review) -> AppResult<Review> {
        let db = Arc::clone(&self.db);
        let row = NewReviewRow::from_entity(review);

        let stored = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(reviews::table)
                .values(&row)
                .get_result::<ReviewModel>(&mut conn)
                .map_err(|e| match e {
                    // The (user_id, movie_id) unique index caught a racing
                    // duplicate that slipped past the pre-insert check.
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AppError::DuplicateReview
                    }
                    other => AppError::from(other),
                })
        })
        .await??;

        Ok(stored.into_entity())
    }

    async fn find_all_for_movie(&self, movie_id: &Uuid) -> AppResult<Vec<Review>> {
        let db = Arc::clone(&self.db);
        let movie_id = *movie_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let m = reviews::table
                .filter(reviews::movie_id.eq(movie_id))
                .order(reviews::created_at.asc())
                .load::<ReviewModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(models.into_iter().map(ReviewModel::into_entity).collect())
    }

    async fn find_all_for_movie_with_authors(
        &self,
        movie_id: &Uuid,
    ) -> AppResult<Vec<ReviewWithAuthor>> {
        let db = Arc::clone(&self.db);
        let movie_id = *movie_id;

        type Row = (
            Uuid,
            Uuid,
            Uuid,
            i32,
            String,
            DateTime<Utc>,
            String,
            Option<String>,
        );

        let rows = task::spawn_blocking(move || -> AppResult<Vec<Row>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .inner_join(users::table)
                .filter(reviews::movie_id.eq(movie_id))
                .order(reviews::created_at.asc())
                .select((
                    reviews::id,
                    reviews::user_id,
                    reviews::movie_id,
                    reviews::rating,
                    reviews::review_text,
                    reviews::created_at,
                    users::username,
                    users::profile_picture,
                ))
                .load::<Row>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(
                |(id, user_id, movie_id, rating, review_text, created_at, username, picture)| {
                    ReviewWithAuthor {
                        id,
                        user: ReviewAuthor {
                            id: user_id,
                            username,
                            profile_picture: picture,
                        },
                        movie_id,
                        rating,
                        review_text,
                        created_at,
                    }
                },
            )
            .collect())
    }

    async fn find_all_for_user(&self, user_id: &Uuid) -> AppResult<Vec<ReviewWithMovie>> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;

        type Row = (
            Uuid,
            Uuid,
            i32,
            String,
            DateTime<Utc>,
            String,
            Option<String>,
        );

        let rows = task::spawn_blocking(move || -> AppResult<Vec<Row>> {
            let mut conn = db.get_connection()?;
            let rows = reviews::table
                .inner_join(movies::table)
                .filter(reviews::user_id.eq(user_id))
                .order(reviews::created_at.desc())
                .select((
                    reviews::id,
                    reviews::movie_id,
                    reviews::rating,
                    reviews::review_text,
                    reviews::created_at,
                    movies::title,
                    movies::poster_url,
                ))
                .load::<Row>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(
                |(id, movie_id, rating, review_text, created_at, title, poster)| ReviewWithMovie {
                    id,
                    movie_id,
                    movie_title: title,
                    movie_poster_url: poster,
                    rating,
                    review_text,
                    created_at,
                },
            )
            .collect())
    }
}
