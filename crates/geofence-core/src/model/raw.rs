// crates/geofence-core/src/model/raw.rs

//! Raw GeoJSON shapes as they come off the wire.
//!
//! Only the container is strict. `properties` and `geometry` stay as
//! [`serde_json::Value`] so a single odd feature cannot fail the whole
//! collection; [`super::convert`] decides per feature what survives.

use serde::Deserialize;
use serde_json::Value;

/// A GeoJSON `FeatureCollection`.
///
/// Entries of `features` are kept untyped so one non-object entry is skipped
/// instead of rejecting the collection.
#[derive(Debug, Deserialize)]
pub struct FeatureCollectionRaw {
    pub r#type: String,
    pub features: Vec<Value>,
}

/// One entry of `features`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeatureRaw {
    pub properties: Value,
    pub geometry: Value,
}

/// Coordinates for the two geometry kinds we test against.
///
/// Positions are read as plain number lists so trailing altitude values do
/// not break parsing.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeometryRaw {
    Polygon(Vec<Vec<Vec<f64>>>),
    MultiPolygon(Vec<Vec<Vec<Vec<f64>>>>),
}
