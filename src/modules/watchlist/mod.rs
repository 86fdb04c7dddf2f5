pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::WatchlistService;
pub use domain::{WatchlistEntry, WatchlistItem, WatchlistRepository};
pub use infrastructure::WatchlistRepositoryImpl;
