pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{MovieDetail, MovieService, PosterStorage};
pub use domain::{Movie, MovieDraft, MovieFilter, MovieRepository};
pub use infrastructure::MovieRepositoryImpl;
