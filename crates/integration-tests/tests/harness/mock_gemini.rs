//! Mock generation backend for integration tests
//!
//! Implements a minimal Google `generateContent` endpoint that wraps a
//! canned candidate text in the response envelope.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock generation backend that returns predictable responses
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGeminiState>,
}

struct MockGeminiState {
    request_count: AtomicU32,
    /// Number of requests to fail with 500 before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Candidate text returned inside the response envelope
    candidate_text: String,
}

impl MockGemini {
    /// Start a mock returning a three-chapter Paris plan
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, plan_text("Paris", 3)).await
    }

    /// Start a mock returning the given candidate text verbatim
    pub async fn start_with_text(text: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, text.to_owned()).await
    }

    /// Start a mock returning a plan for the given destination and day count
    pub async fn start_with_plan(destination: &str, days: u32) -> anyhow::Result<Self> {
        Self::start_inner(0, plan_text(destination, days)).await
    }

    /// Start a mock that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, plan_text("Paris", 3)).await
    }

    async fn start_inner(fail_count: u32, candidate_text: String) -> anyhow::Result<Self> {
        let state = Arc::new(MockGeminiState {
            request_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            candidate_text,
        });

        // The path parameter swallows the whole "model:generateContent" segment
        let app = Router::new()
            .route("/v1beta/models/{call}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

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

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the generation backend
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(State(state): State<Arc<MockGeminiState>>) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {
                    "code": 500,
                    "message": "mock backend intentional failure",
                    "status": "INTERNAL"
                }
            })),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": state.candidate_text}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 120,
                "candidatesTokenCount": 480,
                "totalTokenCount": 600
            }
        })),
    )
}

/// Canned plan JSON with one chapter per day
pub fn plan_text(destination: &str, days: u32) -> String {
    let chapters: Vec<_> = (1..=days)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "title": format!("Day {day} in {destination}"),
                "time_window": "morning to late evening",
                "story_paragraph": format!("Day {day} unfolds slowly."),
                "story_image_prompt": format!("watercolor of {destination}, day {day}"),
                "activities": [{
                    "type": "walk",
                    "description": "a wander through the old quarter",
                    "estimated_price_usd": 0,
                    "time_allocation": "2 hours",
                    "places": []
                }]
            })
        })
        .collect();

    serde_json::json!({
        "title": format!("{destination} Story"),
        "summary": format!("A slow trip through {destination}."),
        "destination": destination,
        "travel_style": "romantic",
        "chapters": chapters
    })
    .to_string()
}
