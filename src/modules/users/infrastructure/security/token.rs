use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::users::domain::{User, UserRole};
use crate::shared::errors::{AppError, AppResult};

/// Session lifetime; clients re-authenticate after 30 days
const TOKEN_VALIDITY_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub role: UserRole,
    pub exp: i64,
}

/// Issues and validates HS256 bearer tokens. Authentication lives entirely
/// here; handlers only ever see the decoded identity.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user: &User) -> AppResult<String> {
        let claims = Claims {
            sub: user.id,
            role: user.role,
            exp: (Utc::now() + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::from)
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
        Ok(data.claims)
    }
}
