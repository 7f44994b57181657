#![allow(dead_code)]

use geofence_core::error::{GeofenceError, Result};
use geofence_core::loader::BoundaryFetch;
use geofence_core::search::{GeocodeCandidate, Geocoder};
use geofence_core::GeoPoint;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

pub const US_MINI: &str = include_str!("../fixtures/us-mini.geojson");

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Canned response for a fake source.
#[derive(Clone)]
pub enum Canned {
    Body(Vec<u8>),
    Status(u16),
}

/// In-memory boundary sources that record every fetch.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, Canned>,
    pub attempts: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, source: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(source.to_string(), Canned::Body(body.into()));
        self
    }

    pub fn with_status(mut self, source: &str, status: u16) -> Self {
        self.responses
            .insert(source.to_string(), Canned::Status(status));
        self
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }
}

impl BoundaryFetch for FakeFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        self.attempts.borrow_mut().push(source.to_string());
        match self.responses.get(source) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(GeofenceError::HttpStatus {
                url: source.to_string(),
                status: *status,
            }),
            None => Err(GeofenceError::HttpStatus {
                url: source.to_string(),
                status: 404,
            }),
        }
    }
}

/// Geocoder with a fixed answer.
pub enum FakeGeocoder {
    Hits(Vec<GeoPoint>),
    Down,
}

impl Geocoder for FakeGeocoder {
    async fn lookup(&self, _query: &str) -> Result<Vec<GeocodeCandidate>> {
        match self {
            FakeGeocoder::Hits(points) => Ok(points
                .iter()
                .map(|p| GeocodeCandidate {
                    point: *p,
                    display_name: None,
                })
                .collect()),
            FakeGeocoder::Down => Err(GeofenceError::HttpStatus {
                url: "geocoder".into(),
                status: 503,
            }),
        }
    }
}

/// Wraps a fake so each call yields to the runtime a few times first.
pub struct Slow<T> {
    inner: T,
    yields: usize,
}

impl<T> Slow<T> {
    pub fn new(inner: T, yields: usize) -> Self {
        Self { inner, yields }
    }

    async fn pause(&self) {
        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }
    }
}

impl<T: BoundaryFetch> BoundaryFetch for Slow<T> {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        self.pause().await;
        self.inner.fetch(source).await
    }
}

impl<T: Geocoder> Geocoder for Slow<T> {
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodeCandidate>> {
        self.pause().await;
        self.inner.lookup(query).await
    }
}

pub fn excluded(names: &[&str]) -> std::collections::HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
