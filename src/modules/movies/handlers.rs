use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::extractors::AdminUser;
use crate::api::state::AppState;
use crate::log_warn;
use crate::modules::movies::domain::MovieDraft;
use crate::modules::movies::domain::MovieFilter;
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub min_rating: Option<f32>,
    pub page: Option<u32>,
}

/// GET /api/movies
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = MovieFilter {
        search: query.search,
        genre: query.genre,
        year: query.year,
        min_rating: query.min_rating,
    };
    let page = PaginationParams::new(query.page.unwrap_or(1), PaginationParams::default().page_size);

    let result = state.movie_service.list_movies(filter, page).await?;
    Ok(Json(result))
}

/// GET /api/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let detail = state.movie_service.get_movie(&id).await?;
    Ok(Json(detail))
}

/// POST /api/movies — admin only, multipart with text fields plus an
/// optional `poster` image part.
pub async fn create_movie(
    _admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut draft = MovieDraft::default();
    let mut poster: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "poster" {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::ValidationError(format!("Failed to read poster: {}", e)))?;
            poster = Some((content_type, filename, bytes.to_vec()));
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::ValidationError(format!("Malformed field '{}': {}", name, e)))?;

        match name.as_str() {
            "title" => draft.title = value,
            "genre" => draft.genre = split_tags(&value),
            "releaseYear" => {
                draft.release_year = value.parse().map_err(|_| {
                    AppError::ValidationError("releaseYear: must be an integer".to_string())
                })?
            }
            "director" => draft.director = value,
            "cast" => draft.cast = split_tags(&value),
            "synopsis" => draft.synopsis = value,
            "trailerUrl" => {
                if !value.is_empty() {
                    draft.trailer_url = Some(value);
                }
            }
            other => log_warn!("Ignoring unknown movie field '{}'", other),
        }
    }

    let movie = state.movie_service.create_movie(draft).await?;

    // Poster attachment is best-effort ordering-wise: the movie exists from
    // this point even if the upload below fails.
    let movie = if let Some((content_type, filename, bytes)) = poster {
        state
            .poster_storage
            .attach_poster(&movie.id, &content_type, &filename, &bytes)
            .await?;
        state.movie_service.get_movie(&movie.id).await?.movie
    } else {
        movie
    };

    Ok((StatusCode::CREATED, Json(movie)))
}

/// Comma-separated tag list as submitted by the catalog form
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
