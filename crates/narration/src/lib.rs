//! Chapter narration for Wayfarer
//!
//! Delegates text to the ElevenLabs speech-synthesis backend and returns
//! the audio bytes to the caller.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use serde::Deserialize;

pub use error::SynthesisError;
pub use provider::SpeechProvider;
pub use server::Narrator;
pub use types::{OUTPUT_FORMAT, SpeechAudio, SpeechRequest};

/// Build the narrator from configuration
pub fn build_state(config: &wayfarer_config::Config) -> anyhow::Result<Arc<Narrator>> {
    Ok(Arc::new(Narrator::from_config(&config.narration)?))
}

/// Create the endpoint router for chapter narration
pub fn endpoint_router() -> Router<Arc<Narrator>> {
    Router::new().route("/api/chapter/{chapter}/audio", get(chapter_audio))
}

#[derive(Debug, Deserialize)]
struct AudioParams {
    text: Option<String>,
}

/// Handle `GET /api/chapter/{chapter}/audio`
async fn chapter_audio(
    State(narrator): State<Arc<Narrator>>,
    Path(chapter): Path<u32>,
    Query(params): Query<AudioParams>,
) -> axum::response::Response {
    let Some(text) = params.text.filter(|text| !text.trim().is_empty()) else {
        let body = serde_json::json!({
            "error": {
                "type": "request_validation_error",
                "message": "provide a non-empty `text` query parameter",
            }
        });
        return (http::StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    tracing::debug!(chapter, input_len = text.len(), "chapter audio requested");

    match narrator.narrate(&text).await {
        Ok(audio) => audio.into_response(),
        Err(error) => {
            tracing::error!(chapter, error = %error, "narration failed");
            error.into_response()
        }
    }
}
