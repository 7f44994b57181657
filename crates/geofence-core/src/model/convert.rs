// crates/geofence-core/src/model/convert.rs
use super::raw::{FeatureCollectionRaw, FeatureRaw, GeometryRaw};
use super::{AllowedRegionSet, BoundaryFeature, Position, RegionGeometry, Ring};
use crate::error::{GeofenceError, Result};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Parses a payload and checks it is a `FeatureCollection`.
pub fn parse_collection(bytes: &[u8]) -> Result<FeatureCollectionRaw> {
    let raw: FeatureCollectionRaw =
        serde_json::from_slice(bytes).map_err(|_| GeofenceError::NotFeatureCollection)?;
    if raw.r#type != "FeatureCollection" {
        return Err(GeofenceError::NotFeatureCollection);
    }
    Ok(raw)
}

/// **Standard Converter:** Raw -> AllowedRegionSet.
///
/// Keeps a feature only if it has a non-empty `name` that is not in
/// `excluded` and a usable `Polygon`/`MultiPolygon` geometry. Everything else
/// is dropped without failing the collection.
pub fn from_raw(raw: FeatureCollectionRaw, excluded: &HashSet<String>) -> AllowedRegionSet {
    let total = raw.features.len();
    let features: Vec<BoundaryFeature> = raw
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let feature = feature_from_value(value, excluded);
            if feature.is_none() {
                debug!(index, "skipping boundary feature");
            }
            feature
        })
        .collect();
    debug!(kept = features.len(), total, "filtered boundary features");
    AllowedRegionSet::new(features)
}

fn feature_from_value(value: Value, excluded: &HashSet<String>) -> Option<BoundaryFeature> {
    let raw: FeatureRaw = serde_json::from_value(value).ok()?;

    let name = raw.properties.get("name")?.as_str()?.trim();
    if name.is_empty() || excluded.contains(name) {
        return None;
    }

    let geometry = match serde_json::from_value::<GeometryRaw>(raw.geometry).ok()? {
        GeometryRaw::Polygon(rings) => RegionGeometry::Polygon(polygon(rings)?),
        GeometryRaw::MultiPolygon(polys) => RegionGeometry::MultiPolygon(
            polys.into_iter().map(polygon).collect::<Option<Vec<_>>>()?,
        ),
    };

    Some(BoundaryFeature {
        name: name.to_owned(),
        geometry,
    })
}

fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Option<Vec<Ring>> {
    if rings.is_empty() {
        return None;
    }
    rings
        .into_iter()
        .map(|ring| ring.into_iter().map(position).collect::<Option<Ring>>())
        .collect()
}

fn position(coords: Vec<f64>) -> Option<Position> {
    match coords.as_slice() {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some([*lon, *lat]),
        _ => None,
    }
}
