// crates/geofence-core/src/loader/mod.rs

//! # Region Data Loader
//!
//! Fetches the boundary dataset from an ordered list of candidate sources.
//! The first source that yields a usable `FeatureCollection` wins; a failing
//! source is logged and skipped, never raised to the caller on its own.

use crate::config::GeofenceConfig;
use crate::error::{GeofenceError, Result};
use crate::model::convert;
use crate::model::AllowedRegionSet;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub mod common_io;
mod fetch;

pub use fetch::{BoundaryFetch, SourceFetcher};

#[cfg(feature = "http")]
pub(crate) use fetch::http_client;

/// A successfully loaded region together with the source that served it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRegion {
    pub source: String,
    pub regions: AllowedRegionSet,
}

pub struct RegionDataLoader<F = SourceFetcher> {
    sources: Vec<String>,
    excluded: HashSet<String>,
    fetcher: F,
}

impl RegionDataLoader<SourceFetcher> {
    pub fn from_config(config: &GeofenceConfig) -> Self {
        Self::new(config.sources.clone(), config.excluded_set(), SourceFetcher)
    }
}

impl<F: BoundaryFetch> RegionDataLoader<F> {
    pub fn new(sources: Vec<String>, excluded: HashSet<String>, fetcher: F) -> Self {
        Self {
            sources,
            excluded,
            fetcher,
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Tries every source in priority order.
    ///
    /// Fails with [`GeofenceError::AllSourcesFailed`] once the list is
    /// exhausted, or [`GeofenceError::NoSources`] if it was empty.
    pub async fn load(&self) -> Result<LoadedRegion> {
        if self.sources.is_empty() {
            warn!("no boundary sources configured");
            return Err(GeofenceError::NoSources);
        }

        for source in &self.sources {
            debug!(%source, "fetching boundary data");
            match self.load_source(source).await {
                Ok(regions) => {
                    info!(%source, features = regions.len(), "boundary data loaded");
                    return Ok(LoadedRegion {
                        source: source.clone(),
                        regions,
                    });
                }
                Err(e) => warn!(%source, error = %e, "boundary source failed, trying next"),
            }
        }

        warn!(
            attempts = self.sources.len(),
            "all boundary sources failed, staying on approximate bounds"
        );
        Err(GeofenceError::AllSourcesFailed {
            attempts: self.sources.len(),
        })
    }

    async fn load_source(&self, source: &str) -> Result<AllowedRegionSet> {
        let bytes = self.fetcher.fetch(source).await?;
        let raw = convert::parse_collection(&bytes)?;
        let regions = convert::from_raw(raw, &self.excluded);
        if regions.is_empty() {
            return Err(GeofenceError::NoUsableFeatures(source.to_string()));
        }
        Ok(regions)
    }
}
