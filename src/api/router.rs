use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::state::AppState;
use crate::modules::movies::application::poster_storage::MAX_POSTER_BYTES;
use crate::modules::{movies, reviews, users, watchlist};

/// GET / — health probe
async fn health() -> impl IntoResponse {
    Json(json!({ "message": "Movie review API is running" }))
}

pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(state.config.upload_dir.clone());

    Router::new()
        .route("/", get(health))
        .route("/api/auth/register", post(users::handlers::register))
        .route("/api/auth/login", post(users::handlers::login))
        .route(
            "/api/movies",
            get(movies::handlers::list_movies).post(movies::handlers::create_movie),
        )
        .route("/api/movies/:id", get(movies::handlers::get_movie))
        .route(
            "/api/movies/:id/reviews",
            get(reviews::handlers::list_reviews).post(reviews::handlers::submit_review),
        )
        .route(
            "/api/users/:id",
            get(users::handlers::get_profile).put(users::handlers::update_profile),
        )
        .route(
            "/api/users/:id/watchlist",
            get(watchlist::handlers::get_watchlist).post(watchlist::handlers::add_to_watchlist),
        )
        .route(
            "/api/users/:id/watchlist/:movie_id",
            delete(watchlist::handlers::remove_from_watchlist),
        )
        .nest_service("/uploads", uploads)
        // Poster cap plus headroom for the multipart framing and text fields
        .layer(DefaultBodyLimit::max(MAX_POSTER_BYTES + 64 * 1024))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
