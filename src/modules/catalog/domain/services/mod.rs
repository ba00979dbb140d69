pub mod rating_aggregator;

pub use rating_aggregator::RatingAggregator;
