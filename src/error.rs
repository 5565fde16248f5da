//! Error types for RepoLens
//!
//! Defines a single error enum covering all failure modes across the system,
//! plus the mappings between upstream GitHub status codes, error variants,
//! and the status codes this service exposes to its own callers.
//! Uses thiserror for ergonomic error handling.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for RepoLens operations
pub type Result<T> = std::result::Result<T, RepoLensError>;

/// Comprehensive error type for RepoLens operations
#[derive(Error, Debug)]
pub enum RepoLensError {
    /// Upstream user does not exist (repository listing returned 404)
    #[error("User with '{0}' username wasn't found")]
    UserNotFound(String),

    /// Upstream rejected the request (403)
    #[error("Access denied")]
    AccessDenied,

    /// Upstream rejected the request as malformed (other 4xx)
    #[error("Bad request")]
    BadRequest,

    /// Upstream is temporarily unavailable (503)
    #[error("Service unavailable")]
    ServiceUnavailable,

    /// Upstream failed with another 5xx
    #[error("Server error: {0}")]
    Upstream(String),

    /// Branch listing failed for a single repository
    #[error("Failed to retrieve branches for repository: {0}")]
    BranchRetrieval(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors (transport faults included)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),

    /// Anyhow errors (for more context)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Map a non-success status from the repository listing call to an error.
///
/// Kept as a single flat match so the whole status-to-error table is
/// auditable in one place.
pub fn map_repo_list_status(status: StatusCode, username: &str) -> RepoLensError {
    match status {
        StatusCode::NOT_FOUND => RepoLensError::UserNotFound(username.to_string()),
        StatusCode::FORBIDDEN => RepoLensError::AccessDenied,
        StatusCode::SERVICE_UNAVAILABLE => RepoLensError::ServiceUnavailable,
        s if s.is_client_error() => RepoLensError::BadRequest,
        s => RepoLensError::Upstream(format!("upstream returned HTTP {}", s)),
    }
}

/// Map a non-success status from the branch listing call to an error.
///
/// A 503 keeps its own variant; everything else collapses into a
/// per-repository branch retrieval failure, tagged with the repository
/// name so the aggregator can log which fetch went wrong.
pub fn map_branch_list_status(status: StatusCode, repository: &str) -> RepoLensError {
    match status {
        StatusCode::SERVICE_UNAVAILABLE => RepoLensError::ServiceUnavailable,
        _ => RepoLensError::BranchRetrieval(repository.to_string()),
    }
}

impl RepoLensError {
    /// HTTP status exposed to callers of this service for this error.
    pub fn exposed_status(&self) -> StatusCode {
        match self {
            RepoLensError::UserNotFound(_) => StatusCode::NOT_FOUND,
            RepoLensError::AccessDenied => StatusCode::FORBIDDEN,
            RepoLensError::BadRequest => StatusCode::BAD_REQUEST,
            RepoLensError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            RepoLensError::Upstream(_)
            | RepoLensError::BranchRetrieval(_)
            | RepoLensError::Http(_)
            | RepoLensError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RepoLensError::Config(_)
            | RepoLensError::Io(_)
            | RepoLensError::Yaml(_)
            | RepoLensError::Other(_)
            | RepoLensError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
