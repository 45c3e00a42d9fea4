use serde::{Deserialize, Serialize};

/// A business returned by the search backend.
///
/// Every field is optional: the backend fills what the places provider knows
/// and sends `null` or omits the rest. Entities are never edited client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Total number of user reviews.
    #[serde(default)]
    pub reviews: Option<f64>,
    /// Average star rating.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub place_id: Option<String>,
}

impl Business {
    /// Convenience constructor for a business known only by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// The resolved result of a successful search round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<Business>,
    /// Places the backend saw before filtering.
    pub total_found: u64,
    /// Places that passed the backend's review and website filters.
    pub filtered_count: u64,
    /// Free-form note the backend attaches to some empty responses.
    pub message: Option<String>,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Renders a number the way it appears in JSON: `4` rather than `4.0`.
pub(crate) fn format_number(value: f64) -> String {
    format!("{value}")
}
