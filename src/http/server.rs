//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the mock handler on every path and method
//! - Wire up middleware (tracing, timeout, request ID)
//! - Resolve each request against the current catalog mount
//! - Serve the resolved leaf's content

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{MockConfig, SharedConfig};
use crate::http::request::{request_id_of, MakeRequestUuidV4};
use crate::http::response;
use crate::lifecycle::Shutdown;
use crate::locator::{CandidateMatch, Locator, LocatorError, Request as LookupRequest};
use crate::observability::metrics;
use crate::store::FsStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: SharedConfig,
}

/// HTTP server serving a mock catalog.
pub struct MockServer {
    router: Router,
    config: SharedConfig,
}

impl MockServer {
    /// Create a new server reading its catalog settings from `config` on every request.
    pub fn new(config: SharedConfig) -> Self {
        let router = Self::build_router(&config.load(), AppState {
            config: config.clone(),
        });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &MockConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(mock_handler))
            .route("/", any(mock_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http())
    }

    /// The configured router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: Arc<Shutdown>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mount = ?self.config.load().catalog.mount,
            "Mock server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("Mock server stopped");
        Ok(())
    }
}

/// Resolve the request against the catalog and serve the best leaf.
async fn mock_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id_of(&request).to_string();
    let lookup = LookupRequest::from_http(&request);
    let config = state.config.load_full();

    tracing::debug!(
        request_id = %request_id,
        method = %lookup.method,
        path = %request.uri().path(),
        "Resolving mock request"
    );

    let store = FsStore::new(config.catalog.mount.clone());
    let task_lookup = lookup.clone();
    let outcome = tokio::task::spawn_blocking(move || -> Result<Option<(CandidateMatch, Vec<u8>)>, LocatorError> {
        let locator = Locator::new(store);
        let found = locator.find(&task_lookup)?;
        match found {
            Some(candidate) => {
                let content = locator.store().read_leaf(&candidate.path)?;
                Ok(Some((candidate, content)))
            }
            None => Ok(None),
        }
    })
    .await;

    let response = match outcome {
        Ok(Ok(Some((candidate, content)))) => {
            tracing::info!(
                request_id = %request_id,
                leaf = %candidate.path,
                weight = candidate.weight,
                params = ?candidate.params,
                "Serving mock entry"
            );
            response::leaf(&candidate, content, &config.catalog.default_content_type)
        }
        Ok(Ok(None)) => {
            tracing::warn!(
                request_id = %request_id,
                method = %lookup.method,
                segments = ?lookup.path_segments,
                "No mock entry matched"
            );
            response::not_found(&lookup)
        }
        Ok(Err(e)) => {
            tracing::error!(request_id = %request_id, error = %e, "Mock lookup failed");
            response::lookup_failed(&e)
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Mock lookup task panicked");
            response::lookup_failed(&e)
        }
    };

    metrics::record_response(&lookup.method, response.status().as_u16());
    response
}
