//! Search request construction and validation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::radius::{to_meters, DistanceUnit};

/// Default slider position for the search radius.
pub const DEFAULT_RADIUS: f64 = 5.0;

/// A place confirmed through the location picker.
///
/// Only ever built from a confirmed suggestion, never from free-typed text,
/// so either every field is set or there is no selection at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: String,
    pub formatted_address: String,
}

/// Raw, unvalidated form inputs as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInputs {
    pub query: String,
    pub min_reviews: String,
    pub radius: f64,
    pub unit: DistanceUnit,
}

impl Default for SearchInputs {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_reviews: String::new(),
            radius: DEFAULT_RADIUS,
            unit: DistanceUnit::default(),
        }
    }
}

/// A validated search, built fresh for each attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    query: String,
    latitude: f64,
    longitude: f64,
    radius_meters: u64,
    min_reviews: u64,
}

impl SearchRequest {
    /// Validates `inputs` against the current selection.
    ///
    /// Preconditions are checked in order and the first failure wins: a
    /// confirmed location, then a non-empty trimmed query. Neither the
    /// minimum-reviews text nor the radius can fail validation.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingLocation`] when `location` is `None`.
    /// - [`ValidationError::MissingQuery`] when the trimmed query is empty.
    pub fn build(
        location: Option<&LocationSelection>,
        inputs: &SearchInputs,
    ) -> Result<Self, ValidationError> {
        let location = location.ok_or(ValidationError::MissingLocation)?;
        let query = inputs.query.trim();
        if query.is_empty() {
            return Err(ValidationError::MissingQuery);
        }

        Ok(Self {
            query: query.to_owned(),
            latitude: location.latitude,
            longitude: location.longitude,
            radius_meters: to_meters(inputs.radius, inputs.unit),
            min_reviews: parse_min_reviews(&inputs.min_reviews),
        })
    }

    /// Builds a request from already-canonical values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingQuery`] when the trimmed query is empty.
    pub fn from_parts(
        query: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: u64,
        min_reviews: u64,
    ) -> Result<Self, ValidationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::MissingQuery);
        }
        Ok(Self {
            query: query.to_owned(),
            latitude,
            longitude,
            radius_meters,
            min_reviews,
        })
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn radius_meters(&self) -> u64 {
        self.radius_meters
    }

    #[must_use]
    pub fn min_reviews(&self) -> u64 {
        self.min_reviews
    }
}

/// Whether the search trigger should be enabled for these inputs.
#[must_use]
pub fn inputs_valid(location: Option<&LocationSelection>, query: &str) -> bool {
    location.is_some() && !query.trim().is_empty()
}

/// Reads the minimum-reviews filter from raw text.
///
/// Leading digits are taken as the value (`"12 reviews"` is 12, `"3.7"` is
/// 3). Anything without leading digits, including negative numbers and the
/// empty string, is 0. A value too large for `u64` is also 0.
#[must_use]
pub fn parse_min_reviews(raw: &str) -> u64 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downtown() -> LocationSelection {
        LocationSelection {
            latitude: 40.0,
            longitude: -74.0,
            place_id: "ChIJ-downtown".to_owned(),
            formatted_address: "1 Main St, Springfield".to_owned(),
        }
    }

    fn inputs(query: &str, min_reviews: &str) -> SearchInputs {
        SearchInputs {
            query: query.to_owned(),
            min_reviews: min_reviews.to_owned(),
            radius: 1.0,
            unit: DistanceUnit::Miles,
        }
    }

    #[test]
    fn builds_request_from_valid_inputs() {
        let location = downtown();
        let req = SearchRequest::build(Some(&location), &inputs("  cafe ", "10")).unwrap();
        assert_eq!(req.query(), "cafe");
        assert!((req.latitude() - 40.0).abs() < f64::EPSILON);
        assert!((req.longitude() + 74.0).abs() < f64::EPSILON);
        assert_eq!(req.radius_meters(), 1609);
        assert_eq!(req.min_reviews(), 10);
    }

    #[test]
    fn missing_location_wins_over_missing_query() {
        let err = SearchRequest::build(None, &inputs("   ", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingLocation);
    }

    #[test]
    fn blank_query_is_rejected() {
        let location = downtown();
        let err = SearchRequest::build(Some(&location), &inputs(" \t ", "5")).unwrap_err();
        assert_eq!(err, ValidationError::MissingQuery);
    }

    #[test]
    fn kilometers_radius_is_converted() {
        let location = downtown();
        let mut raw = inputs("plumber", "");
        raw.radius = 25.0;
        raw.unit = DistanceUnit::Kilometers;
        let req = SearchRequest::build(Some(&location), &raw).unwrap();
        assert_eq!(req.radius_meters(), 25_000);
    }

    #[test]
    fn min_reviews_defaults_to_zero() {
        assert_eq!(parse_min_reviews(""), 0);
        assert_eq!(parse_min_reviews("   "), 0);
        assert_eq!(parse_min_reviews("abc"), 0);
        assert_eq!(parse_min_reviews("-4"), 0);
        assert_eq!(parse_min_reviews("0"), 0);
    }

    #[test]
    fn min_reviews_takes_leading_digits() {
        assert_eq!(parse_min_reviews("25"), 25);
        assert_eq!(parse_min_reviews(" 12 reviews"), 12);
        assert_eq!(parse_min_reviews("3.7"), 3);
        assert_eq!(parse_min_reviews("+8"), 8);
    }

    #[test]
    fn min_reviews_overflow_is_zero() {
        assert_eq!(parse_min_reviews("99999999999999999999999"), 0);
    }

    #[test]
    fn inputs_valid_requires_location_and_query() {
        let location = downtown();
        assert!(inputs_valid(Some(&location), "cafe"));
        assert!(!inputs_valid(None, "cafe"));
        assert!(!inputs_valid(Some(&location), "  "));
    }

    #[test]
    fn from_parts_trims_query() {
        let req = SearchRequest::from_parts(" bakery ", 1.0, 2.0, 500, 3).unwrap();
        assert_eq!(req.query(), "bakery");
        assert_eq!(req.radius_meters(), 500);
        assert_eq!(
            SearchRequest::from_parts("", 1.0, 2.0, 500, 3).unwrap_err(),
            ValidationError::MissingQuery
        );
    }
}
