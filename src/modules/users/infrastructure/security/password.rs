use tokio::task;

use crate::shared::errors::{AppError, AppResult};

/// Bcrypt hashing runs on the blocking pool; it is deliberately slow.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    task::spawn_blocking(move || {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
    })
    .await?
}

pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    task::spawn_blocking(move || bcrypt::verify(password, &hash).map_err(AppError::from)).await?
}
