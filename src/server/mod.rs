//! HTTP server for RepoLens
//!
//! Exposes the aggregated repository view over a small REST API.
//!
//! # Routes
//!
//! - `GET /health` - Liveness check
//! - `GET /api/github/users/{username}/repositories` - Aggregated
//!   repositories with branches for one user
//!
//! On failure the handler returns a `{"status": <code>, "message": "..."}`
//! body with the status code mapped from the error taxonomy.

use crate::aggregator::{AggregateResult, RepositoryAggregator};
use crate::RepoLensError;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Error body returned to callers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

/// Shared server state
struct AppState {
    aggregator: RepositoryAggregator,
}

/// HTTP server wrapping the aggregator
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a new server over the given aggregator
    pub fn new(aggregator: RepositoryAggregator) -> Self {
        Self {
            state: Arc::new(AppState { aggregator }),
        }
    }

    /// Build the router (exposed for in-process tests)
    pub fn router(aggregator: RepositoryAggregator) -> Router {
        Self::router_with_state(Arc::new(AppState { aggregator }))
    }

    fn router_with_state(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/health", get(health))
            .route(
                "/api/github/users/{username}/repositories",
                get(list_user_repositories),
            )
            .with_state(state)
    }

    /// Run the server on the given address
    pub async fn run(self, addr: &str) -> crate::Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| RepoLensError::Config(format!("Failed to bind {}: {}", addr, e)))?;

        tracing::info!(addr = addr, "RepoLens listening");

        axum::serve(listener, Self::router_with_state(self.state))
            .await
            .map_err(RepoLensError::Io)
    }
}

async fn health() -> &'static str {
    "OK"
}

/// `GET /api/github/users/{username}/repositories`
async fn list_user_repositories(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<AggregateResult>, RepoLensError> {
    let result = state.aggregator.get_user_repositories(&username).await?;
    Ok(Json(result))
}

impl IntoResponse for RepoLensError {
    fn into_response(self) -> Response {
        let status = self.exposed_status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                status: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            status: 404,
            message: "User with 'testUser' username wasn't found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["message"], "User with 'testUser' username wasn't found");
    }
}
