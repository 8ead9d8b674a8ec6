// crates/route-cli/src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for route-estimator
#[derive(Debug, Parser)]
#[command(
    name = "route-estimator",
    version,
    about = "Resolve two cities and estimate travel times by hyperloop, air, rail and car"
)]
pub struct CliArgs {
    /// Gazetteer source (.csv, .json or .bin, optionally .gz). Defaults to the bundled cities.csv
    #[arg(short = 'g', long = "gazetteer", env = "ROUTE_GAZETTEER", global = true)]
    pub gazetteer: Option<PathBuf>,

    /// Mode table CSV (`mode,speed`, five rows). Defaults to the bundled modes.csv
    #[arg(short = 'm', long = "modes", env = "ROUTE_MODES", global = true)]
    pub modes: Option<PathBuf>,

    /// Parse --gazetteer directly instead of going through the binary snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the gazetteer
    Stats,

    /// Show the closest city name for a query
    Suggest {
        /// Free-text city name
        query: String,
    },

    /// Estimate travel times between two cities
    Estimate {
        /// Origin city name (case-insensitive)
        origin: String,

        /// Destination city name (case-insensitive)
        destination: String,

        /// Also draw a bar chart of the ranked times
        #[arg(long)]
        chart: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities, confirming suggestions for misspelt names
    Interactive,

    /// Write RE_Calculations.csv for a batch of city pairs
    Export {
        /// Existing target directory
        #[arg(short = 'd', long = "dir")]
        dir: PathBuf,

        /// Overwrite an existing RE_Calculations.csv
        #[arg(long)]
        force: bool,

        /// CSV with `origin,destination` columns instead of the preset pairs
        #[arg(long)]
        pairs: Option<PathBuf>,
    },
}
