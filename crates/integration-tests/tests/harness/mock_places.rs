//! Mock place-lookup backend for integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock lookup backend returning a fixed candidate place list
pub struct MockPlaces {
    addr: SocketAddr,
    shutdown: CancellationToken,
}

#[derive(Clone)]
struct MockPlacesState {
    /// `false` means every lookup fails with 500
    healthy: bool,
}

impl MockPlaces {
    /// Start a mock returning one candidate place per lookup
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(true).await
    }

    /// Start a mock that always fails with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(false).await
    }

    async fn start_inner(healthy: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockPlacesState { healthy });

        let app = Router::new()
            .route("/places", routing::get(handle_lookup))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown })
    }

    /// Base URL for configuring the mock as the lookup backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockPlaces {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_lookup(State(state): State<Arc<MockPlacesState>>) -> axum::response::Response {
    if !state.healthy {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock lookup intentional failure").into_response();
    }

    Json(serde_json::json!([{
        "name": "Café des Arts",
        "address": "12 Rue Example",
        "geo": {"lat": 48.8566, "lng": 2.3522},
        "url": "https://example.test/cafe",
        "price_estimate": "$$",
        "description": "quiet corner café",
        "menu_items": ["espresso", "croissant"]
    }]))
    .into_response()
}
