//! HTTP layer for the depth chart service
//!
//! Parses requests at the boundary, calls into the [`RosterStore`], and maps
//! store outcomes to status codes:
//!
//! | Outcome | Status |
//! |---|---|
//! | `InvalidArgument`, `Conflict`, `OutOfRange`, malformed request | 400 |
//! | `NotFound` | 404 |
//! | anything else | 500 |

pub mod handlers;
pub mod requests;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::{error, warn};

use crate::{
    config::CacheConfig,
    core::CacheManager,
    error::{DepthChartError, Result},
    roster::RosterStore,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RosterStore>,
    pub cache: Arc<CacheManager>,
}

impl AppState {
    pub fn new(cache: &CacheConfig) -> Self {
        Self::with_store(Arc::new(RosterStore::new()), cache)
    }

    pub fn with_store(store: Arc<RosterStore>, cache: &CacheConfig) -> Self {
        Self {
            store,
            cache: Arc::new(CacheManager::new(cache)),
        }
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    let team_routes = Router::new()
        .route("/addPlayer", post(handlers::add_player))
        .route("/removePlayer", delete(handlers::remove_player))
        .route("/getBackups", get(handlers::get_backups))
        .route("/fullDepthChart", get(handlers::full_depth_chart));

    Router::new()
        .nest("/api/depthchart/{sport_id}/{team_id}", team_routes)
        .route("/api/depthchart/seedData", post(handlers::seed_data))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bind the service listener
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

/// Serve the router on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

impl DepthChartError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            DepthChartError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DepthChartError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

impl From<JsonRejection> for DepthChartError {
    fn from(rejection: JsonRejection) -> Self {
        DepthChartError::invalid(rejection.body_text())
    }
}

impl From<PathRejection> for DepthChartError {
    fn from(rejection: PathRejection) -> Self {
        DepthChartError::invalid(rejection.body_text())
    }
}

impl From<QueryRejection> for DepthChartError {
    fn from(rejection: QueryRejection) -> Self {
        DepthChartError::invalid(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            DepthChartError::invalid("negative rank").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DepthChartError::Conflict {
                number: 12,
                position: "QB".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DepthChartError::OutOfRange { rank: 4, len: 1 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DepthChartError::NotFound {
                number: 12,
                position: "QB".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DepthChartError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_code_follows_client_error_classification() {
        let errors = vec![
            DepthChartError::invalid("blank name"),
            DepthChartError::Conflict {
                number: 2,
                position: "QB".to_string(),
            },
            DepthChartError::OutOfRange { rank: 9, len: 0 },
            DepthChartError::NotFound {
                number: 2,
                position: "QB".to_string(),
            },
            DepthChartError::from("x".parse::<u32>().unwrap_err()),
        ];

        for error in errors {
            assert_eq!(
                error.is_client_error(),
                error.status_code() == StatusCode::BAD_REQUEST,
                "{:?}",
                error
            );
        }
    }

    #[tokio::test]
    async fn test_bind_address_in_use_is_io_error() {
        let taken = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = taken.local_addr().unwrap();

        match bind(addr).await {
            Err(DepthChartError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("Expected Io error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(
            DepthChartError::from(std::io::Error::from(std::io::ErrorKind::AddrInUse)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = DepthChartError::OutOfRange { rank: 4, len: 1 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
