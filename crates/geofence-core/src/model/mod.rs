// crates/geofence-core/src/model/mod.rs

//! # Domain Model
//!
//! Plain owned types for the allowed region. Positions follow GeoJSON order
//! (`[longitude, latitude]`) so rings can be tested without reshuffling.

pub mod convert;
pub mod raw;

use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair in degrees.
pub type Position = [f64; 2];

/// An implicitly closed ring. The last vertex need not repeat the first.
pub type Ring = Vec<Position>;

/// A point picked on the map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether the point lies in the usual lat/lon ranges.
    ///
    /// Informative only: membership tests never reject out-of-range input,
    /// they simply evaluate it.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    #[inline]
    pub fn position(&self) -> Position {
        [self.lon, self.lat]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Geometry of a boundary feature.
///
/// A polygon is a list of rings: `rings[0]` is the outer ring, the rest are
/// holes.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl RegionGeometry {
    fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            RegionGeometry::Polygon(rings) => Box::new(rings.iter().flatten()),
            RegionGeometry::MultiPolygon(polys) => Box::new(polys.iter().flatten().flatten()),
        }
    }
}

/// A named polygonal area.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub name: String,
    pub geometry: RegionGeometry,
}

/// Axis-aligned lat/lon rectangle, inclusive on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Bounds {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    fn extend(&mut self, [lon, lat]: Position) {
        self.lat_min = self.lat_min.min(lat);
        self.lat_max = self.lat_max.max(lat);
        self.lon_min = self.lon_min.min(lon);
        self.lon_max = self.lon_max.max(lon);
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat [{}, {}] lon [{}, {}]",
            self.lat_min, self.lat_max, self.lon_min, self.lon_max
        )
    }
}

/// The filtered features used for exact membership testing.
///
/// Built once per load attempt and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowedRegionSet {
    features: Vec<BoundaryFeature>,
}

impl AllowedRegionSet {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }

    /// Bounding box enclosing every vertex of every feature, or `None` for an
    /// empty set.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.features.iter().flat_map(|f| f.geometry.positions());
        let [lon, lat] = *positions.next()?;
        let mut bounds = Bounds::new(lat, lat, lon, lon);
        for p in positions {
            bounds.extend(*p);
        }
        Some(bounds)
    }
}

/// Which membership strategy is authoritative right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    pub fn is_ready(self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::Failed => "failed",
        };
        f.write_str(s)
    }
}
