//! Search-orchestration and export pipeline for the business finder.
//!
//! Everything here is network-free: the HTTP transport lives in
//! `bizfind-client` and plugs in through [`SearchBackend`].

pub mod app_config;
pub mod business;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod radius;
pub mod request;
pub mod status;
pub mod store;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use business::{Business, SearchOutcome};
pub use config::{load_app_config, load_app_config_from_env};
pub use controller::{SearchBackend, SearchController, SearchState};
pub use error::{ConfigError, ExportError, UnknownUnitError, ValidationError};
pub use export::{
    export_results, to_csv, write_export, FileSink, CSV_COLUMNS, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
pub use radius::{to_meters, DistanceUnit};
pub use request::{
    inputs_valid, parse_min_reviews, LocationSelection, SearchInputs, SearchRequest,
};
pub use status::{Status, StatusLevel};
pub use store::ResultStore;
pub use view::{display_rows, DisplayRow, DISPLAY_COLUMNS, PLACEHOLDER};
