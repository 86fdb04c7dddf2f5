pub mod rating_aggregator;
