//! Upstream GitHub API client
//!
//! Translates the two read operations this service needs (list a user's
//! repositories, list a repository's branches) into upstream REST calls and
//! normalizes upstream failures into the crate error taxonomy.

mod client;

pub use client::{Branch, Commit, GitHubClient, Owner, Repository, RepositoryHost};
