pub mod entities;
pub mod repositories;
#[cfg(test)]
pub mod test_support;

pub use entities::watchlist_entry::{WatchlistEntry, WatchlistItem};
pub use repositories::watchlist_repository::WatchlistRepository;
