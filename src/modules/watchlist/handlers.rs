use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::extractors::AuthUser;
use crate::api::state::AppState;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWatchlistRequest {
    pub movie_id: Uuid,
}

fn authorize_watchlist_access(auth: &AuthUser, owner_id: &Uuid) -> AppResult<()> {
    if auth.user_id != *owner_id && !auth.role.is_admin() {
        return Err(AppError::Forbidden(
            "Cannot access another user's watchlist".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/users/:id/watchlist
pub async fn get_watchlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    authorize_watchlist_access(&auth, &user_id)?;
    let items = state.watchlist_service.get_watchlist(&user_id).await?;
    Ok(Json(items))
}

/// POST /api/users/:id/watchlist
pub async fn add_to_watchlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<AddToWatchlistRequest>,
) -> AppResult<impl IntoResponse> {
    authorize_watchlist_access(&auth, &user_id)?;
    let entry = state.watchlist_service.add(&user_id, &body.movie_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/users/:id/watchlist/:movie_id
pub async fn remove_from_watchlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    authorize_watchlist_access(&auth, &user_id)?;
    state.watchlist_service.remove(&user_id, &movie_id).await?;
    Ok(Json(json!({ "message": "Removed from watchlist" })))
}
