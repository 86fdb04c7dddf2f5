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
use crate::modules::users::domain::ProfileChanges;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let response = state
        .auth_service
        .register(body.username, body.email, body.password)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let response = state.auth_service.login(body.email, body.password).await?;
    Ok(Json(response))
}

/// Profile access is restricted to the owner, or an admin.
fn authorize_profile_access(auth: &AuthUser, profile_id: &Uuid) -> AppResult<()> {
    if auth.user_id != *profile_id && !auth.role.is_admin() {
        return Err(AppError::Forbidden(
            "Cannot access another user's profile".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/users/:id
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    authorize_profile_access(&auth, &id)?;
    let profile = state.profile_service.get_profile(&id).await?;
    Ok(Json(profile))
}

/// PUT /api/users/:id
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<ProfileChanges>,
) -> AppResult<impl IntoResponse> {
    authorize_profile_access(&auth, &id)?;
    let user = state.profile_service.update_profile(&id, changes).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::domain::UserRole;

    #[test]
    fn owner_and_admin_pass_profile_guard() {
        let owner_id = Uuid::new_v4();
        let owner = AuthUser {
            user_id: owner_id,
            role: UserRole::Standard,
        };
        assert!(authorize_profile_access(&owner, &owner_id).is_ok());

        let admin = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Admin,
        };
        assert!(authorize_profile_access(&admin, &owner_id).is_ok());
    }

    #[test]
    fn stranger_is_forbidden() {
        let stranger = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Standard,
        };
        let err = authorize_profile_access(&stranger, &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
