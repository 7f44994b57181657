// crates/geofence-core/src/geometry.rs

//! # Membership Tests
//!
//! Planar ray casting on raw longitude/latitude degrees. No reprojection or
//! geodesic correction; good enough for a single country-scale region.
//!
//! Every admission decision in the crate goes through these functions.

use crate::model::{AllowedRegionSet, BoundaryFeature, Bounds, GeoPoint, Position, RegionGeometry};

/// Tolerance for the collinearity check in [`point_on_segment`].
pub const COLLINEAR_EPSILON: f64 = 1e-10;

/// `true` if `p` lies on the closed segment `a`–`b`.
///
/// A zero-length segment (e.g. an explicitly repeated closing vertex) only
/// contains its own endpoint.
pub fn point_on_segment(p: Position, a: Position, b: Position) -> bool {
    let (ax, ay) = (b[0] - a[0], b[1] - a[1]);
    let (px, py) = (p[0] - a[0], p[1] - a[1]);
    let len_sq = ax * ax + ay * ay;
    if len_sq == 0.0 {
        return px == 0.0 && py == 0.0;
    }
    let cross = px * ay - py * ax;
    if cross.abs() > COLLINEAR_EPSILON {
        return false;
    }
    let dot = px * ax + py * ay;
    (0.0..=len_sq).contains(&dot)
}

/// Even-odd crossing test over an implicitly closed ring, boundary-inclusive.
pub fn point_in_ring(p: GeoPoint, ring: &[Position]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }
    let pos = p.position();
    let [x, y] = pos;
    let mut inside = false;
    // Edge (j -> i) with j trailing i, starting at the wrap-around edge.
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[j], ring[i]);
        if point_on_segment(pos, a, b) {
            return true;
        }
        let [xi, yi] = b;
        let [xj, yj] = a;
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// `rings[0]` is the outer ring, the rest are holes.
///
/// A point on a hole's boundary counts as inside the hole and is excluded.
pub fn point_in_polygon(p: GeoPoint, rings: &[Vec<Position>]) -> bool {
    match rings.split_first() {
        Some((outer, holes)) => {
            point_in_ring(p, outer) && !holes.iter().any(|hole| point_in_ring(p, hole))
        }
        None => false,
    }
}

pub fn point_in_feature_geometry(p: GeoPoint, geometry: &RegionGeometry) -> bool {
    match geometry {
        RegionGeometry::Polygon(rings) => point_in_polygon(p, rings),
        RegionGeometry::MultiPolygon(polys) => polys.iter().any(|rings| point_in_polygon(p, rings)),
    }
}

/// `true` if any feature of the set contains `p`. Empty sets contain nothing.
pub fn point_in_region_set(p: GeoPoint, region_set: &AllowedRegionSet) -> bool {
    find_containing(p, region_set).is_some()
}

/// First feature of the set whose geometry contains `p`.
pub fn find_containing(p: GeoPoint, region_set: &AllowedRegionSet) -> Option<&BoundaryFeature> {
    region_set
        .features()
        .iter()
        .find(|f| point_in_feature_geometry(p, &f.geometry))
}

/// Rectangular fallback used while exact boundaries are unavailable.
pub fn point_in_approx_bounds(p: GeoPoint, bounds: &Bounds) -> bool {
    (bounds.lat_min..=bounds.lat_max).contains(&p.lat)
        && (bounds.lon_min..=bounds.lon_max).contains(&p.lon)
}
