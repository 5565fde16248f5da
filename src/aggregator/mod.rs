//! Repository/branch aggregation core
//!
//! Joins one upstream repository listing with N concurrent branch listings
//! into a single ordered result, filtering out forks along the way.

mod service;

pub use service::{AggregateResult, RepositoryAggregator, RepositoryInfo};
