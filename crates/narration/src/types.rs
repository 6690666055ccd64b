/// Output profile for narration audio: MP3, 44.1 kHz, 128 kbps
pub const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Speech synthesis request
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub text: String,
    /// Voice identifier
    pub voice: String,
    /// Synthesis model identifier
    pub model: String,
    /// Output audio format tag
    pub output_format: String,
}

/// Raw audio payload from a synthesis provider
pub struct SpeechAudio {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl SpeechAudio {
    /// Convert the audio payload into an axum HTTP response
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .unwrap()
            })
    }
}
