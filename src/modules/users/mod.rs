pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{AuthResponse, AuthService, ProfileDetail, ProfileService};
pub use domain::{ProfileChanges, User, UserRepository, UserRole};
pub use infrastructure::{TokenService, UserRepositoryImpl};
