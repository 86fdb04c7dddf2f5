use std::sync::Arc;

use serde::Serialize;

use crate::log_info;
use crate::modules::users::domain::{User, UserRepository, UserRole};
use crate::modules::users::infrastructure::security::password::{hash_password, verify_password};
use crate::modules::users::infrastructure::security::token::TokenService;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<AuthResponse> {
        Validator::validate_username(&username)?;
        Validator::validate_email(&email)?;
        Validator::validate_password(&password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ValidationError(
                "email: already registered".to_string(),
            ));
        }
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::ValidationError(
                "username: already taken".to_string(),
            ));
        }

        let password_hash = hash_password(&password).await?;
        let user = User::new(username, email, password_hash, UserRole::Standard);

        // The unique indexes still back this up if two registrations race.
        let stored = self.user_repo.insert(&user).await?;
        let token = self.tokens.issue(&stored)?;

        log_info!("Registered user '{}' ({})", stored.username, stored.id);
        Ok(AuthResponse {
            user: stored,
            token,
        })
    }

    pub async fn login(&self, email: String, password: String) -> AppResult<AuthResponse> {
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&password, &user.password_hash).await? {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.tokens.issue(&user)?;
        Ok(AuthResponse { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::domain::test_support::MockUserRepo;

    fn service(user_repo: MockUserRepo) -> AuthService {
        AuthService::new(
            Arc::new(user_repo),
            Arc::new(TokenService::new("test-secret")),
        )
    }

    #[tokio::test]
    async fn register_rejects_short_password_before_lookup() {
        let err = service(MockUserRepo::new())
            .register(
                "newuser".to_string(),
                "new@example.com".to_string(),
                "12345".to_string(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| {
            Ok(Some(User::new(
                "existing".to_string(),
                "new@example.com".to_string(),
                "hash".to_string(),
                UserRole::Standard,
            )))
        });

        let err = service(repo)
            .register(
                "newuser".to_string(),
                "new@example.com".to_string(),
                "secret123".to_string(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn register_stores_hash_and_issues_token() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_insert().returning(|u| Ok(u.clone()));

        let response = service(repo)
            .register(
                "newuser".to_string(),
                "new@example.com".to_string(),
                "secret123".to_string(),
            )
            .await
            .unwrap();

        assert_ne!(response.user.password_hash, "secret123");
        assert!(!response.token.is_empty());
        assert_eq!(response.user.role, UserRole::Standard);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let hash = bcrypt::hash("rightpass", 4).unwrap();
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(move |_| {
            Ok(Some(User::new(
                "someone".to_string(),
                "someone@example.com".to_string(),
                hash.clone(),
                UserRole::Standard,
            )))
        });

        let err = service(repo)
            .login("someone@example.com".to_string(), "wrongpass".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_unauthorized() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let err = service(repo)
            .login("ghost@example.com".to_string(), "whatever".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
