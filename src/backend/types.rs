//! Wire types for the search backend API
//!
//! The backend owns these shapes; this side only maps UI state onto the
//! request bodies and reads the subset of each response it renders.

use serde::{Deserialize, Serialize};

use crate::filters::FilterState;

/// Results requested per search
pub const TOP_K: u32 = 5;

/// Body of POST /api/v1/search
///
/// `industry` and `location_filter` are omitted entirely when unset; the
/// backend distinguishes a missing key from an explicit null.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_filter: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SearchRequest {
    /// Shape the outgoing payload from the prompt and current filters.
    ///
    /// The salary bound is always sent, defaults included; industry and
    /// distance only when the user constrained them.
    pub fn from_filters(query: &str, filters: &FilterState) -> Self {
        let (min, max) = filters.salary_range;
        Self {
            query: query.to_string(),
            top_k: TOP_K,
            industry: filters.industry.as_filter().map(str::to_string),
            salary_range: Some(SalaryRange { min, max }),
            location_filter: filters.location_km,
        }
    }
}

/// Body of POST /api/v1/search responses
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Candidate>,
}

/// Candidate record produced by the search service
///
/// The backend sends a much wider document per candidate; only the
/// rendered fields are modeled here and every optional one may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: CandidateLocation,
    pub match_score: Option<f64>,
    pub explanation: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateLocation {
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl CandidateLocation {
    /// City when known, postal code otherwise
    pub fn label(&self) -> Option<&str> {
        self.city.as_deref().or(self.postal_code.as_deref())
    }
}

/// User judgment on a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Up,
    Down,
}

/// Body of POST /api/v1/feedback
///
/// `reason` goes out as an explicit null when the user left it empty;
/// that is the shape the backend's feedback tagger expects.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub candidate_id: String,
    pub feedback_type: FeedbackType,
    pub reason: Option<String>,
}

/// Body of GET /api/v1/health, extra fields ignored
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
