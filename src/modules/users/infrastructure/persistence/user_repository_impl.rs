use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;
use uuid::Uuid;

use crate::modules::users::domain::{ProfileChanges, User, UserRepository};
use crate::modules::users::infrastructure::models::{NewUserRow, UserModel};
use crate::schema::users;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn map_unique_violation(e: DieselError) -> AppError {
        match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AppError::ValidationError("username or email already in use".to_string())
            }
            other => AppError::from(other),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::id.eq(id))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::email.eq(email))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::username.eq(username))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn insert(&self, user: &User) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let row = NewUserRow::from_entity(user);

        let stored = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(users::table)
                .values(&row)
                .get_result::<UserModel>(&mut conn)
                .map_err(Self::map_unique_violation)
        })
        .await??;

        Ok(stored.into_entity())
    }

    async fn update_profile(&self, id: &Uuid, changes: &ProfileChanges) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let id = *id;
        let changes = changes.clone();

        let stored = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;

            // Absent fields keep their current value
            let current = users::table
                .filter(users::id.eq(id))
                .first::<UserModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", id)))?;

            diesel::update(users::table.filter(users::id.eq(id)))
                .set((
                    users::username.eq(changes.username.unwrap_or(current.username)),
                    users::email.eq(changes.email.unwrap_or(current.email)),
                    users::profile_picture
                        .eq(changes.profile_picture.or(current.profile_picture)),
                ))
                .get_result::<UserModel>(&mut conn)
                .map_err(Self::map_unique_violation)
        })
        .await??;

        Ok(stored.into_entity())
    }
}
