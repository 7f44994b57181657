//! Basic usage example for geofence-rs
//!
//! Runs offline: the boundary "source" is an in-memory square with a hole,
//! so the fallback rectangle, exact test and hole exclusion are all visible.
//!
//! cargo run --example basic_usage

use geofence_core::prelude::*;
use std::cell::RefCell;

const SQUARE_WITH_HOLE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"name": "Square"},
     "geometry": {"type": "Polygon", "coordinates": [
        [[0, 0], [4, 0], [4, 4], [0, 4]],
        [[1, 1], [3, 1], [3, 3], [1, 3]]
     ]}},
    {"type": "Feature", "properties": {"name": "Off Limits"},
     "geometry": {"type": "Polygon", "coordinates": [[[5, 5], [6, 5], [6, 6], [5, 6]]]}}
  ]
}"#;

struct InMemory;

impl BoundaryFetch for InMemory {
    async fn fetch(&self, _source: &str) -> Result<Vec<u8>> {
        Ok(SQUARE_WITH_HOLE.as_bytes().to_vec())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== geofence-rs Basic Usage ===\n");

    let config = GeofenceConfig {
        sources: vec!["memory://square".into()],
        excluded_names: vec!["Off Limits".into()],
        fallback_bounds: Bounds::new(0.0, 7.0, 0.0, 7.0),
        ..GeofenceConfig::default()
    };
    config.validate()?;

    let loader = RegionDataLoader::new(config.sources.clone(), config.excluded_set(), InMemory);
    let session = RefCell::new(MapSession::new(&config, NullView::default()));

    let probes = [
        ("inside, outside hole", GeoPoint::new(0.5, 0.5)),
        ("inside hole", GeoPoint::new(2.0, 2.0)),
        ("excluded feature", GeoPoint::new(5.5, 5.5)),
    ];

    println!("--- While loading (approximate bounds) ---");
    for (label, p) in probes {
        println!("  {label:<22} {p}: {}", session.borrow().gate().is_admissible(p));
    }

    let state = MapSession::load_with(&session, &loader).await;
    let mut session = session.into_inner();
    println!("\n--- After load ({state}) ---");
    for (label, p) in probes {
        println!("  {label:<22} {p}: {}", session.gate().is_admissible(p));
    }

    println!("\n--- Clicking ---");
    for (label, p) in probes {
        let selected = session.handle_pointer(PointerEvent::Click(p));
        println!("  {label:<22} selected={selected} current={:?}", session.selection());
    }

    Ok(())
}
