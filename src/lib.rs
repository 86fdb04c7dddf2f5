pub mod api;
pub mod modules;
pub mod schema;
pub mod shared;

use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
