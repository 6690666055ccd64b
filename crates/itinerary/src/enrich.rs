//! Place enrichment for generated plans
//!
//! Fills in candidate places for activities the model left without any.
//! Lookup failure is swallowed: a plan is never withheld because the
//! helper was unavailable.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;
use wayfarer_config::PlacesConfig;

use crate::error::EnrichmentError;
use crate::types::{Place, TripPlan};

/// Candidate place lookup by activity type, destination, and time of day
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// Look up candidate places for an activity
    async fn lookup(
        &self,
        kind: &str,
        destination: &str,
        time_window: Option<&str>,
    ) -> Result<Vec<Place>, EnrichmentError>;
}

/// HTTP-backed place lookup helper
pub struct HttpPlaceLookup {
    client: Client,
    base_url: Url,
}

impl HttpPlaceLookup {
    /// Create from places configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &PlacesConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build places HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl PlaceLookup for HttpPlaceLookup {
    async fn lookup(
        &self,
        kind: &str,
        destination: &str,
        time_window: Option<&str>,
    ) -> Result<Vec<Place>, EnrichmentError> {
        let url = format!("{}/places", self.base_url.as_str().trim_end_matches('/'));

        let mut query = vec![("kind", kind), ("destination", destination)];
        if let Some(window) = time_window {
            query.push(("time_window", window));
        }

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| EnrichmentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<Place>>()
            .await
            .map_err(|e| EnrichmentError::Transport(format!("failed to parse place list: {e}")))
    }
}

/// Fill empty place lists across the plan
///
/// Activities that already carry places are left untouched. A failed lookup
/// leaves that activity's list empty.
pub async fn enrich_plan(plan: &mut TripPlan, lookup: &dyn PlaceLookup) {
    let destination = plan.destination.clone();

    for chapter in &mut plan.chapters {
        for activity in &mut chapter.activities {
            if !activity.places.is_empty() {
                continue;
            }

            match lookup
                .lookup(&activity.kind, &destination, activity.time_allocation.as_deref())
                .await
            {
                Ok(places) => activity.places = places,
                Err(error) => {
                    tracing::debug!(
                        activity = %activity.kind,
                        day = chapter.day,
                        error = %error,
                        "place lookup failed, leaving places empty"
                    );
                }
            }
        }
    }
}
