//! Fan-out/join aggregator implementation

use crate::github::{Branch, Owner, RepositoryHost};
use crate::Result;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// A repository with its branch list attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub owner: Owner,
    pub branches: Vec<Branch>,
    pub fork: bool,
}

/// The combined response for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub repositories: Vec<RepositoryInfo>,
}

/// Joins a user's repository listing with per-repository branch listings.
///
/// Failure policy: a failed repository listing fails the whole request. A
/// failed branch listing is absorbed, the repository is kept with an empty
/// branch list, and the request still succeeds. The absorb policy applies
/// uniformly to every branch-fetch error kind.
pub struct RepositoryAggregator {
    host: Arc<dyn RepositoryHost>,
}

impl RepositoryAggregator {
    /// Create a new aggregator over the given upstream host
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self { host }
    }

    /// Fetch a user's non-fork repositories together with their branches.
    ///
    /// Branch listings for distinct repositories run concurrently, but the
    /// output preserves the order the upstream returned the repositories in
    /// (after fork filtering): `join_all` yields results in the order the
    /// futures were given, independent of completion order. Dropping the
    /// returned future cancels all in-flight branch fetches.
    pub async fn get_user_repositories(&self, username: &str) -> Result<AggregateResult> {
        let listed = self.host.list_repositories(username).await?;
        let total = listed.len();

        let sources: Vec<_> = listed.into_iter().filter(|r| !r.fork).collect();
        debug!(
            username = %username,
            total,
            kept = sources.len(),
            "Filtered forked repositories"
        );

        let branch_lists = join_all(
            sources
                .iter()
                .map(|repo| self.branches_or_empty(username, &repo.name)),
        )
        .await;

        let repositories = sources
            .into_iter()
            .zip(branch_lists)
            .map(|(repo, branches)| RepositoryInfo {
                name: repo.name,
                owner: repo.owner,
                branches,
                fork: repo.fork,
            })
            .collect();

        Ok(AggregateResult { repositories })
    }

    /// Fetch one repository's branches, absorbing failures into an empty list
    async fn branches_or_empty(&self, username: &str, repository: &str) -> Vec<Branch> {
        match self.host.list_branches(username, repository).await {
            Ok(branches) => branches,
            Err(e) => {
                warn!(
                    username = %username,
                    repo = %repository,
                    error = %e,
                    "Branch listing failed, substituting empty branch list"
                );
                Vec::new()
            }
        }
    }
}
