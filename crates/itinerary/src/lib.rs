//! Itinerary planning for Wayfarer
//!
//! Builds a prompt from trip parameters, delegates generation to the
//! Google Generative Language backend, validates the returned structure,
//! and optionally enriches activities with place lookups.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod enrich;
mod error;
mod prompt;
pub mod protocol;
pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::post};

pub use client::{GenerationClient, parse_plan};
pub use enrich::{HttpPlaceLookup, PlaceLookup, enrich_plan};
pub use error::{EnrichmentError, GenerationError};
pub use prompt::build_prompt;
pub use types::{TripPlan, TripRequest};

/// Process-wide planning state: generation client plus optional lookup
pub struct PlanState {
    generator: GenerationClient,
    lookup: Option<HttpPlaceLookup>,
}

/// Build the planning state from configuration
pub fn build_state(config: &wayfarer_config::Config) -> anyhow::Result<Arc<PlanState>> {
    let generator = GenerationClient::new(&config.generation)?;
    let lookup = config.places.as_ref().map(HttpPlaceLookup::new).transpose()?;

    Ok(Arc::new(PlanState { generator, lookup }))
}

/// Create the endpoint router for itinerary planning
pub fn endpoint_router() -> Router<Arc<PlanState>> {
    Router::new().route("/api/plan", post(create_plan))
}

/// Handle `POST /api/plan`
async fn create_plan(
    State(state): State<Arc<PlanState>>,
    Json(request): Json<TripRequest>,
) -> axum::response::Response {
    if let Err(violations) = request.validate() {
        let body = serde_json::json!({
            "error": {
                "type": "request_validation_error",
                "message": "invalid trip request",
                "fields": violations,
            }
        });
        return (http::StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }

    tracing::debug!(
        destination = %request.destination,
        duration_days = request.duration_days,
        "plan requested"
    );

    match state.generator.generate(&request).await {
        Ok(mut plan) => {
            if let Some(ref lookup) = state.lookup {
                enrich_plan(&mut plan, lookup).await;
            }

            tracing::debug!(chapters = plan.chapters.len(), "plan generated");
            Json(plan).into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "itinerary generation failed");
            error.into_response()
        }
    }
}
