// crates/geofence-core/src/config.rs
use crate::error::{GeofenceError, Result};
use crate::model::Bounds;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// -----------------------------------------------------------------------------
// DEFAULTS
// -----------------------------------------------------------------------------

/// Contiguous US state boundaries, primary copy and mirror.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/PublicaMundi/MappingAPI/master/data/geojson/us-states.json",
    "https://cdn.jsdelivr.net/gh/PublicaMundi/MappingAPI@master/data/geojson/us-states.json",
];

/// Areas present in the dataset that are not selectable.
pub const DEFAULT_EXCLUDED: &[&str] = &["Alaska", "Hawaii", "Puerto Rico"];

/// Rectangle around the contiguous US, used until exact boundaries load.
pub const DEFAULT_FALLBACK_BOUNDS: Bounds = Bounds {
    lat_min: 24.396308,
    lat_max: 49.384358,
    lon_min: -124.848974,
    lon_max: -66.885444,
};

pub const DEFAULT_MIN_SELECT_ZOOM: u8 = 10;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Everything the engine needs to know about the allowed region.
///
/// Can be read from a JSON file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeofenceConfig {
    /// Candidate boundary sources in priority order. `http(s)://` URLs or
    /// local paths (`.gz` allowed with the `compact` feature).
    pub sources: Vec<String>,
    /// Feature names never admitted, matched exactly.
    pub excluded_names: Vec<String>,
    pub fallback_bounds: Bounds,
    /// Zoom the map moves to (at least) when a point is selected.
    pub min_select_zoom: u8,
    pub geocoder_url: String,
    pub marker: MarkerIconConfig,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            excluded_names: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            fallback_bounds: DEFAULT_FALLBACK_BOUNDS,
            min_select_zoom: DEFAULT_MIN_SELECT_ZOOM,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            marker: MarkerIconConfig::default(),
        }
    }
}

impl GeofenceConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeofenceError::Config(format!("cannot open {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(GeofenceError::NoSources);
        }
        let b = &self.fallback_bounds;
        let finite = [b.lat_min, b.lat_max, b.lon_min, b.lon_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || b.lat_min > b.lat_max || b.lon_min > b.lon_max {
            return Err(GeofenceError::Config(format!(
                "fallback bounds are not a valid rectangle: {b}"
            )));
        }
        Ok(())
    }

    pub fn excluded_set(&self) -> HashSet<String> {
        self.excluded_names.iter().cloned().collect()
    }
}

/// Marker appearance, handed to each map session at construction.
///
/// Scoped to the session that owns it; nothing global is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIconConfig {
    pub icon_url: String,
    pub icon_retina_url: Option<String>,
    pub shadow_url: Option<String>,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            icon_url: "marker-icon.png".to_string(),
            icon_retina_url: Some("marker-icon-2x.png".to_string()),
            shadow_url: Some("marker-shadow.png".to_string()),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
        }
    }
}
