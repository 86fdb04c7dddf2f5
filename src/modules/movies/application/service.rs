use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::log_info;
use crate::modules::movies::domain::{Movie, MovieDraft, MovieFilter, MovieRepository};
use crate::modules::reviews::domain::{ReviewRepository, ReviewWithAuthor};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// A movie plus its reviews with author identity resolved, as returned by the
/// detail endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub reviews: Vec<ReviewWithAuthor>,
}

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self {
            movie_repo,
            review_repo,
        }
    }

    pub async fn list_movies(
        &self,
        filter: MovieFilter,
        page: PaginationParams,
    ) -> AppResult<PaginatedResult<Movie>> {
        self.movie_repo.list(&filter, &page).await
    }

    pub async fn get_movie(&self, id: &Uuid) -> AppResult<MovieDetail> {
        let movie = self
            .movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))?;

        let reviews = self.review_repo.find_all_for_movie_with_authors(id).await?;

        Ok(MovieDetail { movie, reviews })
    }

    pub async fn create_movie(&self, draft: MovieDraft) -> AppResult<Movie> {
        Validator::validate_movie_title(&draft.title)?;
        Validator::validate_release_year(draft.release_year)?;
        if draft.director.is_empty() {
            return Err(AppError::ValidationError(
                "director: cannot be empty".to_string(),
            ));
        }
        if draft.synopsis.is_empty() {
            return Err(AppError::ValidationError(
                "synopsis: cannot be empty".to_string(),
            ));
        }
        if draft.genre.is_empty() {
            return Err(AppError::ValidationError(
                "genre: at least one genre is required".to_string(),
            ));
        }

        let movie = Movie::from_draft(draft);
        let stored = self.movie_repo.create(&movie).await?;

        log_info!("Created movie '{}' ({})", stored.title, stored.id);
        Ok(stored)
    }
}
