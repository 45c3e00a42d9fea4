pub mod client;
pub mod error;
pub mod types;

pub use client::{SearchClient, GENERIC_FAILURE_MESSAGE};
pub use error::SearchError;
pub use types::{ErrorBody, SearchRequestBody, SearchResponse};
