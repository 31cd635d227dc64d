//! Survey lead scoring: keyword rules per question, a weighted composite,
//! tier classification and batch aggregation by attribution source.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod scoring;
pub mod store;
pub mod telemetry;
pub mod types;
