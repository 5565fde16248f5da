//! RepoLens - GitHub repository/branch aggregation service
//!
//! Given a user name, RepoLens fetches that user's non-fork repositories
//! from the GitHub API, fetches each repository's branch list concurrently,
//! and serves the combined result over a single HTTP endpoint.
//!
//! # Architecture
//!
//! - **github**: Upstream API client (repository and branch listings)
//! - **aggregator**: Fan-out/join core (fork filtering, ordering, failure policy)
//! - **server**: axum HTTP surface and error rendering
//! - **config**: YAML configuration with env overrides
//! - **error**: Crate-wide error taxonomy and status mappings

pub mod aggregator;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod server;

// Re-exports
pub use error::{RepoLensError, Result};
