use std::sync::Arc;

use uuid::Uuid;

use crate::log_error;
use crate::modules::movies::domain::MovieRepository;
use crate::modules::reviews::domain::{
    RatingAggregator, Review, ReviewAuthor, ReviewRepository, ReviewWithAuthor,
};
use crate::modules::users::domain::UserRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// The review submission workflow: validate, check the movie and author
/// exist, reject duplicates, persist, then recompute the movie's derived
/// rating fields.
///
/// The duplicate pre-check is advisory only; the store's (user, movie)
/// uniqueness constraint is what actually prevents two racing submissions
/// from both landing, and a constraint conflict is reported to the caller
/// exactly like a pre-check hit.
pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    movie_repo: Arc<dyn MovieRepository>,
    user_repo: Arc<dyn UserRepository>,
    aggregator: Arc<RatingAggregator>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        user_repo: Arc<dyn UserRepository>,
        aggregator: Arc<RatingAggregator>,
    ) -> Self {
        Self {
            review_repo,
            movie_repo,
            user_repo,
            aggregator,
        }
    }

    pub async fn submit_review(
        &self,
        movie_id: &Uuid,
        user_id: &Uuid,
        rating: i32,
        review_text: String,
    ) -> AppResult<ReviewWithAuthor> {
        Validator::validate_rating(rating)?;
        Validator::validate_review_text(&review_text)?;

        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

        let author = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if self
            .review_repo
            .find_existing(user_id, movie_id)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateReview);
        }

        let review = Review::new(*user_id, *movie_id, rating, review_text);
        let stored = self.review_repo.insert(&review).await?;

        // The review is durable from here. A failed recompute leaves the
        // cached aggregate transiently stale but never fails the submission.
        if let Err(e) = self.aggregator.recompute(movie_id).await {
            log_error!(
                "Aggregation failed for movie {} after review {} was stored: {}",
                movie_id,
                stored.id,
                e
            );
        }

        Ok(ReviewWithAuthor::from_parts(
            stored,
            ReviewAuthor {
                id: author.id,
                username: author.username,
                profile_picture: author.profile_picture,
            },
        ))
    }

    pub async fn list_reviews(&self, movie_id: &Uuid) -> AppResult<Vec<ReviewWithAuthor>> {
        self.review_repo
            .find_all_for_movie_with_authors(movie_id)
            .await
    }
}
