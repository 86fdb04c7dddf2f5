// Shared kernel used by every bounded context

pub mod application; // Pagination and other cross-context application helpers
pub mod config; // Environment-backed runtime configuration
pub mod database; // Connection pool
pub mod errors; // Shared error types
pub mod utils; // Validation, logging

// Re-exports for convenience
pub use config::Config;
pub use database::Database;
