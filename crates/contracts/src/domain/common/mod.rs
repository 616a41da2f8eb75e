//! Common types and traits for all domain records

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
