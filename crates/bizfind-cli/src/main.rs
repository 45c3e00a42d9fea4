mod render;
mod search;
mod sink;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bizfind_core::{to_meters, DistanceUnit};

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "bizfind")]
#[command(about = "Find local businesses and export them as CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for businesses around a location and export the matches
    Search(SearchArgs),
    /// Convert a search radius to meters
    Radius {
        /// Distance in the given unit
        value: f64,
        /// `miles` or `kilometers`
        #[arg(long, default_value = "miles")]
        unit: DistanceUnit,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = bizfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // Logs go to stderr so the results table can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => search::run_search(&config, args).await?,
        Some(Commands::Radius { value, unit }) => {
            println!("{value} {unit} = {} meters", to_meters(value, unit));
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
