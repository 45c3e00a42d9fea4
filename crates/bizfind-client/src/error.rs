use thiserror::Error;

/// Errors returned by the search backend client.
///
/// `Display` is the user-facing message: the controller puts it straight
/// into the error status.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The backend answered with a non-2xx status. `message` is the body's
    /// `error` field, or a generic failure message when it has none.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// No response was obtained (connect failure, DNS, transport timeout).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that does not match the response contract.
    #[error("Unexpected response from search service ({context}): {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
