pub mod entities;
pub mod repositories;
#[cfg(test)]
pub mod test_support;

pub use entities::movie::{Movie, MovieDraft, MovieFilter};
pub use repositories::movie_repository::MovieRepository;
