use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;
use wayfarer_core::HttpError;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Request to the synthesis backend could not be sent or timed out
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// Synthesis backend rejected the configured credentials
    #[error("authentication with the synthesis backend failed: {0}")]
    AuthenticationFailed(String),

    /// Synthesis backend rejected the request payload
    #[error("synthesis backend rejected the request: {0}")]
    InvalidRequest(String),

    /// Synthesis backend returned an unexpected error status
    #[error("synthesis backend returned {status}: {message}")]
    ProviderApi { status: u16, message: String },

    /// Synthesis backend returned a success status with no audio bytes
    #[error("synthesis backend returned no audio")]
    EmptyAudio,

    /// Audio payload could not be read
    #[error("failed to read audio payload: {0}")]
    Payload(String),
}

impl HttpError for SynthesisError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Transport(_) | Self::ProviderApi { .. } => StatusCode::BAD_GATEWAY,
            Self::AuthenticationFailed(_)
            | Self::InvalidRequest(_)
            | Self::EmptyAudio
            | Self::Payload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Transport(_) | Self::ProviderApi { .. } => "upstream_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::EmptyAudio => "empty_audio_error",
            Self::Payload(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for SynthesisError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.client_message(),
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}
