// crates/geofence-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading boundary data or resolving a search.
///
/// None of these escape the engine's public state machine: the loader turns
/// them into [`crate::LoadState::Failed`] and location search turns them into
/// a [`crate::search::SearchFailure`]. They are still exposed so callers that
/// drive the pieces directly can inspect what went wrong.
#[derive(Debug, Error)]
pub enum GeofenceError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    #[error("no boundary sources configured")]
    NoSources,

    #[error("no usable features in {0}")]
    NoUsableFeatures(String),

    #[error("all {attempts} boundary sources failed")]
    AllSourcesFailed { attempts: usize },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("no results for {0:?}")]
    NoResults(String),

    #[error("geocoder returned an unusable first result: {0}")]
    MalformedCandidate(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeofenceError>;
