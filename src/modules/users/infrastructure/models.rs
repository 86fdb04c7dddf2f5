use crate::modules::users::domain::{User, UserRole};
use crate::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub role: UserRole,
    pub join_date: DateTime<Utc>,
}

// For inserting new users
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub role: UserRole,
    pub join_date: DateTime<Utc>,
}

impl UserModel {
    pub fn into_entity(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            profile_picture: self.profile_picture,
            role: self.role,
            join_date: self.join_date,
        }
    }
}

impl NewUserRow {
    pub fn from_entity(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            profile_picture: user.profile_picture.clone(),
            role: user.role,
            join_date: user.join_date,
        }
    }
}
