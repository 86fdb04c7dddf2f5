pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ReviewService;
pub use domain::{RatingAggregator, Review, ReviewRepository, ReviewWithAuthor, ReviewWithMovie};
pub use infrastructure::ReviewRepositoryImpl;
