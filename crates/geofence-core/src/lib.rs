// crates/geofence-core/src/lib.rs

//! geofence-core
//! =============
//!
//! Geofenced map interaction: load the boundary of an allowed region, test
//! points against it, and gate hover, click and search admission through
//! that test. Until exact boundaries are available, an approximate
//! rectangle stands in.
//!
//! ```no_run
//! use geofence_core::prelude::*;
//! use std::cell::RefCell;
//!
//! # async fn run() {
//! let config = GeofenceConfig::default();
//! let loader = RegionDataLoader::from_config(&config);
//! let session = RefCell::new(MapSession::new(&config, NullView::default()));
//!
//! // Pointer callbacks may borrow `session` while this is pending.
//! MapSession::load_with(&session, &loader).await;
//!
//! let mut session = session.borrow_mut();
//! if session.on_click(GeoPoint::new(39.5, -98.35)) {
//!     println!("selected {:?}", session.selection());
//! }
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod gate;
pub mod geometry; // Every membership test lives here
pub mod loader;
pub mod model;
pub mod search;
pub mod selection;
pub mod session;

// Re-exports
pub use crate::config::{GeofenceConfig, MarkerIconConfig};
pub use crate::error::{GeofenceError, Result};
pub use crate::gate::{InteractionGate, LoadToken, SearchAdmission};
pub use crate::loader::{BoundaryFetch, LoadedRegion, RegionDataLoader, SourceFetcher};
pub use crate::model::{AllowedRegionSet, BoundaryFeature, Bounds, GeoPoint, LoadState, RegionGeometry};
pub use crate::session::{MapSession, PointerEvent, SearchOutcome};

pub mod prelude {
    pub use crate::config::{GeofenceConfig, MarkerIconConfig};
    pub use crate::error::{GeofenceError, Result};
    pub use crate::geometry::{point_in_approx_bounds, point_in_region_set};
    pub use crate::loader::{BoundaryFetch, RegionDataLoader, SourceFetcher};
    pub use crate::model::{AllowedRegionSet, Bounds, GeoPoint, LoadState};
    #[cfg(feature = "http")]
    pub use crate::search::HttpGeocoder;
    pub use crate::search::{Geocoder, LocationSearch, SearchFailure, SearchQuery};
    pub use crate::selection::{Cursor, MapView, NullView};
    pub use crate::session::{MapSession, PointerEvent, SearchOutcome};
}
