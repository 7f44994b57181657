//! geofence-cli
//! ============
//!
//! Command-line interface for the `geofence-core` map interaction engine.
//!
//! This crate primarily provides a binary (`geofence`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! geofence load
//! geofence check 39.5 -98.35
//! geofence click 61.2 -149.9
//! geofence search "Topeka, KS"
//! geofence search --lat 39.05 --lon -95.68
//! geofence --source data/us-states.geojson.gz --exclude Alaska check 39.5 -98.35
//! ```
//!
//! For programmatic access use the [`geofence-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
