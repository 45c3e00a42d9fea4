//! The `search` command: one search round trip, a results table, and the
//! CSV export.

use std::path::PathBuf;

use clap::Args;

use bizfind_client::SearchClient;
use bizfind_core::{
    export_results, AppConfig, DistanceUnit, LocationSelection, SearchController, Status,
    StatusLevel,
};

use crate::render::render_table;
use crate::sink::DirectorySink;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Latitude of the search center
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude of the search center
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
    /// Place identifier reported by the location picker
    #[arg(long)]
    pub place_id: Option<String>,
    /// Display address of the selected place
    #[arg(long)]
    pub address: Option<String>,
    /// Business type or name to search for, e.g. "cafe"
    #[arg(long, short)]
    pub query: String,
    /// Minimum number of reviews; anything non-numeric means no minimum
    #[arg(long, default_value = "")]
    pub min_reviews: String,
    /// Search radius
    #[arg(long, default_value_t = bizfind_core::request::DEFAULT_RADIUS)]
    pub radius: f64,
    /// `miles` or `kilometers`
    #[arg(long, default_value = "miles")]
    pub unit: DistanceUnit,
    /// Directory to write results.csv into (defaults to `BIZFIND_EXPORT_DIR`)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Print results without writing a CSV file
    #[arg(long)]
    pub no_export: bool,
}

impl SearchArgs {
    /// Coordinates passed on the command line count as a confirmed selection.
    pub(crate) fn location(&self) -> LocationSelection {
        LocationSelection {
            latitude: self.lat,
            longitude: self.lng,
            place_id: self
                .place_id
                .clone()
                .unwrap_or_else(|| format!("{},{}", self.lat, self.lng)),
            formatted_address: self
                .address
                .clone()
                .unwrap_or_else(|| format!("{}, {}", self.lat, self.lng)),
        }
    }
}

/// Runs one search and exports the results.
///
/// # Errors
///
/// Returns an error if the search client cannot be built, the search ends in
/// an error status, or the export fails. Zero matches and a refused export
/// are reported as warnings, not errors.
pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let client = SearchClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build search client: {e}"))?;

    let mut controller = SearchController::new();
    controller.confirm_location(args.location());
    controller.set_query(args.query.as_str());
    controller.set_min_reviews(args.min_reviews.as_str());
    controller.set_radius(args.radius, args.unit);

    let request = match controller.begin_search() {
        Ok(request) => request,
        Err(status) => anyhow::bail!("{}", status.message),
    };
    if let Some(status) = controller.status() {
        print_status(status);
    }

    let result = client.search(&request).await;
    let status = controller.finish_search(result);
    if status.is_error() {
        anyhow::bail!("{}", status.message);
    }
    print_status(&status);

    if controller.store().is_exportable() {
        println!();
        print!("{}", render_table(controller.store().results()));
    }

    if args.no_export {
        return Ok(());
    }

    let dir = args.output.unwrap_or_else(|| config.export_dir.clone());
    let mut sink = DirectorySink::new(dir);
    let export_status = export_results(controller.store(), &mut sink);
    if export_status.is_error() {
        anyhow::bail!("{}", export_status.message);
    }
    print_status(&export_status);
    if let Some(path) = sink.last_written() {
        println!("{}", path.display());
    }

    Ok(())
}

fn print_status(status: &Status) {
    match status.level {
        StatusLevel::Error | StatusLevel::Warning => eprintln!("{status}"),
        StatusLevel::Info | StatusLevel::Success => println!("{status}"),
    }
}
