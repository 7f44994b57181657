use clap::{Args, Parser, Subcommand};

/// CLI arguments for geofence-cli
#[derive(Debug, Parser)]
#[command(
    name = "geofence",
    version,
    about = "CLI for loading region boundaries and checking map points against them"
)]
pub struct CliArgs {
    /// Path to a JSON config file (sources, exclusions, fallback bounds, ...)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Boundary source (URL or file path). Repeat to list fallbacks in order.
    /// Replaces the configured sources.
    #[arg(short = 's', long = "source", global = true)]
    pub sources: Vec<String>,

    /// Feature name to exclude. Repeat for several. Replaces the configured list.
    #[arg(short = 'x', long = "exclude", global = true)]
    pub exclude: Vec<String>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the boundary dataset and summarize it
    Load,

    /// Report whether a point is inside the allowed region
    Check {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Simulate a map click at a point
    Click {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Search a place name or a coordinate pair and select it if allowed
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Place name to geocode
    #[arg(conflicts_with_all = ["lat", "lon"], required_unless_present_all = ["lat", "lon"])]
    pub query: Option<String>,

    /// Latitude (coordinate mode)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<String>,

    /// Longitude (coordinate mode)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<String>,
}
