use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::extractors::AuthUser;
use crate::api::state::AppState;
use crate::shared::errors::AppResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub rating: i32,
    pub review_text: String,
}

/// GET /api/movies/:id/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let reviews = state.review_service.list_reviews(&movie_id).await?;
    Ok(Json(reviews))
}

/// POST /api/movies/:id/reviews — authenticated
pub async fn submit_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
    Json(body): Json<SubmitReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let review = state
        .review_service
        .submit_review(&movie_id, &auth.user_id, body.rating, body.review_text)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}
