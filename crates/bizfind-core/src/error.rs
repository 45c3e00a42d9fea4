use thiserror::Error;

/// A search precondition that was not met. The search is never dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No confirmed location selection is present.
    #[error("Please select a location from the suggestions")]
    MissingLocation,

    /// The trimmed business query is empty.
    #[error("Please enter a business type to search for")]
    MissingQuery,
}

/// Errors raised while exporting results.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was attempted with an empty result set.
    #[error("No results to export")]
    Empty,

    /// The file-save collaborator could not persist the document.
    #[error("could not save {file_name}: {source}")]
    Delivery {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distance unit \"{0}\" (expected miles or kilometers)")]
pub struct UnknownUnitError(pub String);
