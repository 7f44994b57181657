//! geofence — Command-line interface for geofence-core
//!
//! Loads the boundary dataset for the allowed region and runs the same
//! admission logic a map view would: exact polygon checks once the dataset
//! is loaded, the approximate rectangle when every source failed.
//!
//! Usage examples
//! --------------
//!
//! - Summarize the loaded region
//!   $ geofence load
//!
//! - Check a point (latitude, longitude)
//!   $ geofence check 39.5 -98.35
//!
//! - Simulate a click (prints the recenter command when admitted)
//!   $ geofence click 61.2 -149.9
//!
//! - Search by name or by coordinates
//!   $ geofence search "Wichita"
//!   $ geofence search --lat 37.69 --lon -97.34
//!
//! Data source
//! -----------
//!
//! By default the contiguous-US state boundaries are fetched from the
//! configured mirrors. Use `--source <url-or-path>` (repeatable) to point at
//! other data and `--exclude <name>` to change which areas are off limits.
mod args;

use crate::args::{CliArgs, Commands, SearchArgs};
use clap::Parser;
use geofence_core::geometry::{find_containing, point_in_approx_bounds};
use geofence_core::prelude::*;
use std::cell::RefCell;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Map view that prints the commands it receives.
#[derive(Debug, Default)]
struct ConsoleView {
    zoom: u8,
}

impl MapView for ConsoleView {
    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8, animate: bool) {
        self.zoom = zoom;
        println!("  -> set_view({center}, zoom={zoom}, animate={animate})");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&args)?;
    let loader = RegionDataLoader::from_config(&config);
    let session = RefCell::new(MapSession::new(&config, ConsoleView::default()));

    info!(sources = config.sources.len(), "loading boundaries");
    let state = MapSession::load_with(&session, &loader).await;

    match args.command {
        Commands::Load => {
            let session = session.borrow();
            println!("Load state: {state}");
            match session.gate().regions() {
                Some(regions) => {
                    println!("Features: {}", regions.len());
                    if let Some(bounds) = regions.bounds() {
                        println!("Bounds: {bounds}");
                    }
                    for name in regions.names() {
                        println!("- {name}");
                    }
                }
                None => println!("Fallback bounds: {}", config.fallback_bounds),
            }
        }

        Commands::Check { lat, lon } => {
            let session = session.borrow();
            let p = GeoPoint::new(lat, lon);
            let admissible = session.gate().is_admissible(p);
            println!("Point: {p}");
            println!("Load state: {state}");
            println!("Admissible: {admissible}");
            if let Some(feature) = session.gate().regions().and_then(|r| find_containing(p, r)) {
                println!("Region: {}", feature.name);
            }
            println!(
                "Inside approximate bounds: {}",
                point_in_approx_bounds(p, &config.fallback_bounds)
            );
        }

        Commands::Click { lat, lon } => {
            let p = GeoPoint::new(lat, lon);
            if session.borrow_mut().handle_pointer(PointerEvent::Click(p)) {
                println!("Selected: {p}");
            } else {
                println!("Ignored: {p} is outside the allowed region");
            }
        }

        Commands::Search(search_args) => {
            let query = search_query(search_args);
            let search = LocationSearch::new(HttpGeocoder::new(config.geocoder_url.clone()));
            match MapSession::search(&session, &search, &query).await {
                SearchOutcome::Selected(p) => println!("Selected: {p}"),
                outcome => {
                    if let Some(message) = outcome.message() {
                        eprintln!("{message}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_config(args: &CliArgs) -> anyhow::Result<GeofenceConfig> {
    let mut config = match &args.config {
        Some(path) => GeofenceConfig::from_path(path)?,
        None => GeofenceConfig::default(),
    };
    if !args.sources.is_empty() {
        config.sources = args.sources.clone();
    }
    if !args.exclude.is_empty() {
        config.excluded_names = args.exclude.clone();
    }
    config.validate()?;
    Ok(config)
}

fn search_query(args: SearchArgs) -> SearchQuery {
    match (args.query, args.lat, args.lon) {
        (Some(name), _, _) => SearchQuery::Name(name),
        (None, lat, lon) => SearchQuery::Coordinates {
            lat: lat.unwrap_or_default(),
            lon: lon.unwrap_or_default(),
        },
    }
}
