pub mod watchlist_repository;
