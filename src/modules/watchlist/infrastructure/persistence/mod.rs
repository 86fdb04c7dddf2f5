pub mod watchlist_repository_impl;

pub use watchlist_repository_impl::WatchlistRepositoryImpl;
