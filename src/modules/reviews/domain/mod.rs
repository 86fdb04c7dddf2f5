pub mod entities;
pub mod repositories;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use entities::review::{Review, ReviewAuthor, ReviewWithAuthor, ReviewWithMovie};
pub use repositories::review_repository::ReviewRepository;
pub use services::rating_aggregator::RatingAggregator;
