//! Mock speech-synthesis backend for integration tests

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock synthesis backend that returns canned audio bytes
pub struct MockSpeech {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSpeechState>,
}

struct MockSpeechState {
    /// Audio payload to return; `None` means always fail with 500
    audio: Option<Vec<u8>>,
    /// Voice and output format seen on the last request
    last_call: Mutex<Option<(String, Option<String>)>>,
}

impl MockSpeech {
    /// Start a mock returning ten audio bytes
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Some(vec![7u8; 10])).await
    }

    /// Start a mock returning the given audio payload
    pub async fn start_with_audio(audio: Vec<u8>) -> anyhow::Result<Self> {
        Self::start_inner(Some(audio)).await
    }

    /// Start a mock that always fails with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    async fn start_inner(audio: Option<Vec<u8>>) -> anyhow::Result<Self> {
        let state = Arc::new(MockSpeechState {
            audio,
            last_call: Mutex::new(None),
        });

        let app = Router::new()
            .route("/text-to-speech/{voice}", routing::post(handle_synthesize))
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

    /// Base URL for configuring the mock as the synthesis backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Voice and `output_format` from the most recent request
    pub fn last_call(&self) -> Option<(String, Option<String>)> {
        self.state.last_call.lock().unwrap().clone()
    }
}

impl Drop for MockSpeech {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[derive(serde::Deserialize)]
struct SynthesisQuery {
    output_format: Option<String>,
}

async fn handle_synthesize(
    State(state): State<Arc<MockSpeechState>>,
    Path(voice): Path<String>,
    Query(query): Query<SynthesisQuery>,
) -> axum::response::Response {
    *state.last_call.lock().unwrap() = Some((voice, query.output_format));

    match &state.audio {
        Some(audio) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            audio.clone(),
        )
            .into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "mock synthesis intentional failure",
        )
            .into_response(),
    }
}
