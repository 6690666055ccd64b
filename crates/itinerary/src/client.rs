//! Generation client: one outbound `generateContent` call per plan request
//!
//! Transient transport failures are retried with bounded backoff; anything
//! wrong with the returned payload is fatal and surfaced with a truncated
//! snippet of the raw text.

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use wayfarer_config::GenerationConfig;

use crate::error::{GenerationError, snippet};
use crate::prompt::build_prompt;
use crate::protocol::{GoogleContent, GoogleGenerationConfig, GooglePart, GoogleRequest, GoogleResponse};
use crate::types::{TripPlan, TripRequest};

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the itinerary generation backend
pub struct GenerationClient {
    client: Client,
    base_url: Url,
    model: String,
    api_key: SecretString,
    temperature: f64,
    max_output_tokens: u32,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl GenerationClient {
    /// Create from generation configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &GenerationConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build generation HTTP client: {e}"))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        Ok(Self {
            client,
            base_url,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            max_retries: config.max_retries,
            retry_base_delay: Duration::from_millis(config.retry_base_delay_ms),
        })
    }

    /// Build the `generateContent` endpoint URL
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!(
            "{base}/models/{}:generateContent?key={}",
            self.model,
            self.api_key.expose_secret()
        )
    }

    /// Generate a trip plan for the given request
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the upstream call fails after retries,
    /// the response is empty, or the returned text fails JSON parsing or
    /// schema validation.
    pub async fn generate(&self, request: &TripRequest) -> Result<TripPlan, GenerationError> {
        let prompt = build_prompt(request);

        let wire_request = GoogleRequest {
            contents: vec![GoogleContent {
                role: Some("user".to_owned()),
                parts: vec![GooglePart { text: prompt }],
            }],
            generation_config: Some(GoogleGenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: Some(self.max_output_tokens),
                response_mime_type: Some("application/json".to_owned()),
            }),
        };

        let text = self.fetch_candidate_text(&wire_request).await?;
        let plan = parse_plan(&text)?;

        warn_on_shape_drift(&plan, request.duration_days);

        Ok(plan)
    }

    /// Send the request, retrying transient transport failures with backoff
    async fn fetch_candidate_text(&self, wire_request: &GoogleRequest) -> Result<String, GenerationError> {
        let url = self.generate_url();
        let mut delay = self.retry_base_delay;
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            match self.try_fetch(&url, wire_request).await {
                Ok(text) => return Ok(text),
                Err((error, retryable)) => {
                    if !retryable || attempt > self.max_retries {
                        return Err(error);
                    }

                    tracing::warn!(
                        model = %self.model,
                        attempt,
                        error = %error,
                        "transient generation failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    /// One request/response cycle; the bool marks retryable failures
    async fn try_fetch(
        &self,
        url: &str,
        wire_request: &GoogleRequest,
    ) -> Result<String, (GenerationError, bool)> {
        let response = self.client.post(url).json(wire_request).send().await.map_err(|e| {
            tracing::error!(model = %self.model, error = %e, "upstream request failed");
            (GenerationError::Upstream(format!("request failed: {e}")), true)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(model = %self.model, status = %status, "upstream returned error");

            let retryable = status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS;
            return Err((
                GenerationError::Upstream(format!("provider returned {status}: {}", snippet(&body))),
                retryable,
            ));
        }

        let wire_response: GoogleResponse = response.json().await.map_err(|e| {
            (
                GenerationError::Upstream(format!("failed to parse response envelope: {e}")),
                false,
            )
        })?;

        Ok(wire_response.first_candidate_text())
    }
}

/// Parse and validate raw model text into a trip plan
///
/// Fail-closed: syntax errors, shape mismatches, and out-of-range values are
/// rejected rather than coerced. Fatal errors carry a prefix of the raw text.
pub fn parse_plan(raw: &str) -> Result<TripPlan, GenerationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let plan: TripPlan = serde_json::from_str(text).map_err(|e| {
        if e.classify() == serde_json::error::Category::Data {
            GenerationError::SchemaViolation {
                detail: e.to_string(),
                snippet: snippet(text),
            }
        } else {
            GenerationError::InvalidJson {
                detail: e.to_string(),
                snippet: snippet(text),
            }
        }
    })?;

    for chapter in &plan.chapters {
        for activity in &chapter.activities {
            if let Some(price) = activity.estimated_price_usd
                && (price < 0.0 || !price.is_finite())
            {
                return Err(GenerationError::SchemaViolation {
                    detail: format!(
                        "activity '{}' on day {} has negative price {price}",
                        activity.kind, chapter.day
                    ),
                    snippet: snippet(text),
                });
            }
        }
    }

    Ok(plan)
}

/// Flag plans whose chapter structure drifts from the requested duration
///
/// The upstream contract for a mismatched chapter count is unspecified, so
/// the plan is delivered unchanged and the drift is logged.
fn warn_on_shape_drift(plan: &TripPlan, duration_days: u32) {
    let chapter_count = plan.chapters.len();
    if u32::try_from(chapter_count) != Ok(duration_days) {
        tracing::warn!(
            requested_days = duration_days,
            chapter_count,
            "chapter count does not match requested duration"
        );
    }

    let days_in_order = plan
        .chapters
        .iter()
        .zip(1u32..)
        .all(|(chapter, expected)| chapter.day == expected);
    if !days_in_order {
        tracing::warn!("chapter day numbers are not sequential from 1");
    }
}
