use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use thiserror::Error;
use wayfarer_core::HttpError;

/// Errors that can occur while producing an itinerary
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Upstream call failed or returned a non-success status
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Upstream returned a response with no itinerary text
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Upstream text is not parseable as JSON
    #[error("model output is not valid JSON: {detail}; response begins: {snippet}")]
    InvalidJson {
        /// Parser diagnostic
        detail: String,
        /// Truncated prefix of the raw response text
        snippet: String,
    },

    /// Parsed JSON does not match the trip plan shape
    #[error("itinerary failed validation: {detail}; response begins: {snippet}")]
    SchemaViolation {
        /// Validation diagnostic
        detail: String,
        /// Truncated prefix of the raw response text
        snippet: String,
    },
}

impl HttpError for GenerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::EmptyResponse | Self::InvalidJson { .. } | Self::SchemaViolation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Upstream(_) => "upstream_error",
            Self::EmptyResponse => "empty_response_error",
            Self::InvalidJson { .. } => "invalid_json_error",
            Self::SchemaViolation { .. } => "schema_violation_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for GenerationError {
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

/// Place lookup failure
///
/// Never surfaced to API consumers; enrichment degrades to an empty
/// place list instead.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("place lookup request failed: {0}")]
    Transport(String),

    #[error("place lookup returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Truncate raw upstream text for error diagnostics
///
/// Keeps roughly the first 200 characters on a char boundary so malformed
/// output stays diagnosable without echoing whole responses into logs.
pub(crate) fn snippet(raw: &str) -> String {
    const LIMIT: usize = 200;

    let trimmed = raw.trim();
    match trimmed.char_indices().nth(LIMIT) {
        Some((index, _)) => format!("{}…", &trimmed[..index]),
        None => trimmed.to_owned(),
    }
}
