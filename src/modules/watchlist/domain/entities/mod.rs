pub mod watchlist_entry;
