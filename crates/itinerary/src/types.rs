//! Trip planning data model
//!
//! `TripRequest` is the inbound contract; the remaining types mirror the
//! JSON shape the generation backend is instructed to produce. Optional
//! fields model the backend's presence/absence semantics explicitly and
//! unknown upstream fields are ignored.

use serde::{Deserialize, Serialize};

/// Parameters for a single trip planning request
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    /// Starting location
    pub origin: String,
    /// Destination city or region
    pub destination: String,
    /// Optional trip start date, free-form
    #[serde(default)]
    pub start_date: Option<String>,
    /// Trip length in days, must be positive
    pub duration_days: u32,
    /// Total budget in USD, must be non-negative
    pub budget: f64,
    /// Free-text style tag (e.g. "romantic", "adventure")
    pub travel_style: String,
    /// Free-text interest tags, order irrelevant
    #[serde(default)]
    pub interests: Vec<String>,
    /// Whether restaurant meals should be planned
    #[serde(default = "default_eat_out")]
    pub eat_out: bool,
}

const fn default_eat_out() -> bool {
    true
}

/// A single field-level validation failure
#[derive(Debug, Serialize)]
pub struct FieldViolation {
    /// Offending request field
    pub field: &'static str,
    /// Human-readable description of the violation
    pub message: String,
}

impl TripRequest {
    /// Validate field-level constraints
    ///
    /// # Errors
    ///
    /// Returns every violated constraint so the caller can surface
    /// field-level detail in one response.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        for (field, value) in [
            ("origin", &self.origin),
            ("destination", &self.destination),
            ("travel_style", &self.travel_style),
        ] {
            if value.trim().is_empty() {
                violations.push(FieldViolation {
                    field,
                    message: format!("{field} must not be empty"),
                });
            }
        }

        if self.duration_days == 0 {
            violations.push(FieldViolation {
                field: "duration_days",
                message: "duration_days must be greater than 0".to_owned(),
            });
        }

        if self.budget < 0.0 || !self.budget.is_finite() {
            violations.push(FieldViolation {
                field: "budget",
                message: "budget must be a non-negative number".to_owned(),
            });
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Structured day-by-day trip plan with narrative text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub title: String,
    pub summary: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_style: Option<String>,
    pub chapters: Vec<Chapter>,
}

/// One day's worth of itinerary content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based day index
    pub day: u32,
    pub title: String,
    /// Label like "morning to late evening"
    #[serde(default)]
    pub time_window: String,
    /// Narrative paragraph for this day
    #[serde(default)]
    pub story_paragraph: String,
    /// Prompt for illustrating this day
    #[serde(default)]
    pub story_image_prompt: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single planned action within a chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity type tag (e.g. "museum", "hike")
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price_usd: Option<f64>,
    /// Label like "2 hours"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_allocation: Option<String>,
    /// Concrete venues, possibly empty until enrichment
    #[serde(default)]
    pub places: Vec<Place>,
}

/// A concrete venue or location associated with an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Symbolic price tier such as "$$"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<Vec<String>>,
}

/// Geographic coordinate in floating-point degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}
