//! Search lifecycle: input state, the single-flight state machine, and the
//! result store it feeds.
//!
//! A front end renders from [`SearchController::state`],
//! [`SearchController::trigger_enabled`], and [`SearchController::status`]
//! instead of tracking its own flags.

use std::fmt::Display;
use std::future::Future;

use crate::business::SearchOutcome;
use crate::radius::DistanceUnit;
use crate::request::{inputs_valid, LocationSelection, SearchInputs, SearchRequest};
use crate::status::Status;
use crate::store::ResultStore;

const SEARCHING_MESSAGE: &str = "Searching for businesses...";
const ALREADY_SEARCHING_MESSAGE: &str = "A search is already in progress";

/// Anything that can answer a [`SearchRequest`] with a [`SearchOutcome`].
pub trait SearchBackend {
    type Error: Display;

    /// Performs exactly one search round trip.
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchOutcome, Self::Error>>;
}

/// Where the search lifecycle currently stands.
///
/// `Succeeded` and `Failed` are resting states: like `Idle`, they accept a
/// new search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching,
    Succeeded {
        total_found: u64,
        filtered_count: u64,
    },
    Failed {
        message: String,
    },
}

impl SearchState {
    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching)
    }
}

/// Drives searches from user input and owns the current result set.
#[derive(Debug)]
pub struct SearchController {
    location: Option<LocationSelection>,
    inputs: SearchInputs,
    store: ResultStore,
    state: SearchState,
    status: Option<Status>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            location: None,
            inputs: SearchInputs::default(),
            store: ResultStore::new(),
            state: SearchState::Idle,
            status: None,
        }
    }

    /// Records a selection confirmed by the location picker.
    pub fn confirm_location(&mut self, selection: LocationSelection) {
        tracing::debug!(
            place_id = %selection.place_id,
            address = %selection.formatted_address,
            "location confirmed"
        );
        self.location = Some(selection);
    }

    /// Handles free-text edits of the address field.
    ///
    /// Any edit that moves the text away from the confirmed address drops the
    /// selection; the user must pick a suggestion again.
    pub fn edit_address(&mut self, text: &str) {
        let unchanged = self
            .location
            .as_ref()
            .is_some_and(|loc| loc.formatted_address == text);
        if !unchanged && self.location.take().is_some() {
            tracing::debug!("address edited; location selection cleared");
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.inputs.query = query.into();
    }

    pub fn set_min_reviews(&mut self, min_reviews: impl Into<String>) {
        self.inputs.min_reviews = min_reviews.into();
    }

    pub fn set_radius(&mut self, radius: f64, unit: DistanceUnit) {
        self.inputs.radius = radius;
        self.inputs.unit = unit;
    }

    #[must_use]
    pub fn location(&self) -> Option<&LocationSelection> {
        self.location.as_ref()
    }

    #[must_use]
    pub fn inputs(&self) -> &SearchInputs {
        &self.inputs
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The latest user-visible status, if anything has happened yet.
    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Whether a new search may be started right now.
    #[must_use]
    pub fn trigger_enabled(&self) -> bool {
        !self.state.is_searching() && inputs_valid(self.location.as_ref(), &self.inputs.query)
    }

    #[must_use]
    pub fn export_enabled(&self) -> bool {
        !self.state.is_searching() && self.store.is_exportable()
    }

    /// Validates the inputs and enters `Searching`.
    ///
    /// The stored results are cleared on entry so stale results never sit
    /// next to an in-flight search.
    ///
    /// # Errors
    ///
    /// Returns an error-level [`Status`] without changing state when a search
    /// is already in flight or the inputs fail validation.
    pub fn begin_search(&mut self) -> Result<SearchRequest, Status> {
        if self.state.is_searching() {
            tracing::warn!("search trigger activated while a search is in flight");
            return Err(Status::error(ALREADY_SEARCHING_MESSAGE));
        }

        let request = match SearchRequest::build(self.location.as_ref(), &self.inputs) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "search inputs rejected");
                return Err(self.set_status(Status::error(err.to_string())));
            }
        };

        tracing::info!(
            query = %request.query(),
            lat = request.latitude(),
            lng = request.longitude(),
            radius_meters = request.radius_meters(),
            min_reviews = request.min_reviews(),
            "starting search"
        );
        self.store.clear();
        self.state = SearchState::Searching;
        self.set_status(Status::info(SEARCHING_MESSAGE));
        Ok(request)
    }

    /// Applies the outcome of the in-flight search and leaves `Searching`.
    ///
    /// Successful outcomes always replace the stored results, even if the
    /// inputs changed while the request was in flight.
    pub fn finish_search<E: Display>(&mut self, result: Result<SearchOutcome, E>) -> Status {
        if !self.state.is_searching() {
            tracing::warn!("search outcome applied without a search in flight");
        }

        let status = match result {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(err) => {
                let message = err.to_string();
                tracing::error!(error = %message, "search failed");
                self.state = SearchState::Failed {
                    message: message.clone(),
                };
                Status::error(message)
            }
        };
        self.set_status(status)
    }

    /// Runs one full search: validate, dispatch once, apply the outcome.
    pub async fn run_search<B: SearchBackend>(&mut self, backend: &B) -> Status {
        let request = match self.begin_search() {
            Ok(request) => request,
            Err(status) => return status,
        };
        let result = backend.search(&request).await;
        self.finish_search(result)
    }

    fn apply_outcome(&mut self, outcome: SearchOutcome) -> Status {
        let SearchOutcome {
            results,
            total_found,
            filtered_count,
            message,
        } = outcome;

        self.state = SearchState::Succeeded {
            total_found,
            filtered_count,
        };

        if results.is_empty() {
            self.store.clear();
            tracing::info!(total_found, "search returned no matches");
            let message = message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| {
                format!("No businesses matched your filters ({total_found} found in total)")
            });
            return Status::warning(message);
        }

        tracing::info!(
            total_found,
            filtered_count,
            received = results.len(),
            "search succeeded"
        );
        self.store.replace(results);
        Status::success(format!(
            "Found {filtered_count} matching {} out of {total_found} total",
            if filtered_count == 1 {
                "business"
            } else {
                "businesses"
            }
        ))
    }

    fn set_status(&mut self, status: Status) -> Status {
        self.status = Some(status.clone());
        status
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
