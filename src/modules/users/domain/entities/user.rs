use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::users::domain::value_objects::user_role::UserRole;

/// An account. The credential hash never serializes onto the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub role: UserRole,
    pub join_date: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            profile_picture: None,
            role,
            join_date: Utc::now(),
        }
    }
}

/// Optional field updates for the profile endpoint; absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.profile_picture.is_none()
    }
}
