//! Wire types for the backend `POST /search` endpoint.

use bizfind_core::{Business, SearchOutcome, SearchRequest};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// request
// ---------------------------------------------------------------------------

/// JSON body of `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchRequestBody<'a> {
    pub query: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub radius_meters: u64,
    pub min_reviews: u64,
}

impl<'a> From<&'a SearchRequest> for SearchRequestBody<'a> {
    fn from(request: &'a SearchRequest) -> Self {
        Self {
            query: request.query(),
            lat: request.latitude(),
            lng: request.longitude(),
            radius_meters: request.radius_meters(),
            min_reviews: request.min_reviews(),
        }
    }
}

// ---------------------------------------------------------------------------
// responses
// ---------------------------------------------------------------------------

/// 2xx response body.
///
/// When the nearby search finds nothing the backend answers
/// `{"results": [], "message": "No results found"}` without counts, so both
/// counts default to zero.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Business>,
    #[serde(default)]
    pub total_found: u64,
    #[serde(default)]
    pub filtered_count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<SearchResponse> for SearchOutcome {
    fn from(response: SearchResponse) -> Self {
        Self {
            results: response.results,
            total_found: response.total_found,
            filtered_count: response.filtered_count,
            message: response.message,
        }
    }
}

/// Non-2xx response body: `{"error": "..."}`, message optional.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
