//! Common building blocks for all aggregates

pub mod id;

// Re-exports
pub use id::{random_id, timestamp_id, unique_timestamp_id};
