pub mod auth_service;
pub mod profile_service;

pub use auth_service::{AuthResponse, AuthService};
pub use profile_service::{ProfileDetail, ProfileService};
