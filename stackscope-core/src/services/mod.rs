//! Services built on top of the provider traits

mod aggregator;

pub use aggregator::RelationshipAggregator;
