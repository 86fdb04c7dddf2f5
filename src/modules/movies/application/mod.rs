pub mod poster_storage;
pub mod service;

pub use poster_storage::PosterStorage;
pub use service::{MovieDetail, MovieService};
