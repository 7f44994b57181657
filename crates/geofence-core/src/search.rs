// crates/geofence-core/src/search.rs

//! # Location Search
//!
//! Turns user input into a candidate point, either from typed coordinates or
//! from the first hit of a geocoding lookup. Admission is not decided here;
//! the session runs the candidate through the gate.

use crate::error::{GeofenceError, Result};
use crate::model::GeoPoint;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// What the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Coordinates { lat: String, lon: String },
    Name(String),
}

/// A failed search, carrying the transient message to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("Enter valid numeric latitude and longitude.")]
    InvalidCoordinates,
    #[error("Enter a place name.")]
    EmptyQuery,
    #[error("No results found for that location.")]
    NoResults,
    #[error("Search failed. Please try again.")]
    Lookup,
}

impl From<GeofenceError> for SearchFailure {
    fn from(e: GeofenceError) -> Self {
        match e {
            GeofenceError::InvalidCoordinate(_) => SearchFailure::InvalidCoordinates,
            GeofenceError::NoResults(q) if q.is_empty() => SearchFailure::EmptyQuery,
            GeofenceError::NoResults(_) => SearchFailure::NoResults,
            other => {
                warn!(error = %other, "location lookup failed");
                SearchFailure::Lookup
            }
        }
    }
}

/// One geocoding hit.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub point: GeoPoint,
    pub display_name: Option<String>,
}

/// External place-name lookup.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodeCandidate>>;
}

// Geocoders commonly send coordinates as strings ("39.50").
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::String(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRaw {
    lat: NumberOrString,
    lon: NumberOrString,
    #[serde(default)]
    display_name: Option<String>,
}

/// Parses a geocoder response body: a JSON array of `{lat, lon, ...}`.
///
/// Only element 0 is read. An empty array is `Ok(None)`; a first entry
/// without usable coordinates is an error, whatever follows it.
pub fn parse_first_candidate(bytes: &[u8]) -> Result<Option<GeocodeCandidate>> {
    let entries: Vec<Value> = serde_json::from_slice(bytes)?;
    let Some(first) = entries.into_iter().next() else {
        return Ok(None);
    };
    let raw: CandidateRaw = serde_json::from_value(first)
        .map_err(|e| GeofenceError::MalformedCandidate(e.to_string()))?;
    let lat = raw.lat.as_f64();
    let lon = raw.lon.as_f64();
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Some(GeocodeCandidate {
            point: GeoPoint::new(lat, lon),
            display_name: raw.display_name,
        })),
        _ => Err(GeofenceError::MalformedCandidate(format!(
            "lat {:?} lon {:?}",
            raw.lat, raw.lon
        ))),
    }
}

/// Nominatim-style HTTP geocoder (`GET <url>?q=...&format=json&limit=1`).
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    url: String,
}

#[cfg(feature = "http")]
impl HttpGeocoder {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "http")]
impl Geocoder for HttpGeocoder {
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodeCandidate>> {
        let response = crate::loader::http_client()
            .get(&self.url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeofenceError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(parse_first_candidate(&response.bytes().await?)?
            .into_iter()
            .collect())
    }
}

/// Parses two text fields as latitude and longitude.
pub fn parse_coordinates(lat: &str, lon: &str) -> Result<GeoPoint> {
    let parse = |field: &str, text: &str| {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GeofenceError::InvalidCoordinate(format!("{field} {text:?}")))
    };
    Ok(GeoPoint::new(parse("latitude", lat)?, parse("longitude", lon)?))
}

pub struct LocationSearch<G> {
    geocoder: G,
}

impl<G: Geocoder> LocationSearch<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Resolves a query to a candidate point.
    pub async fn resolve(&self, query: &SearchQuery) -> std::result::Result<GeoPoint, SearchFailure> {
        match query {
            SearchQuery::Coordinates { lat, lon } => Ok(parse_coordinates(lat, lon)?),
            SearchQuery::Name(name) => Ok(self.lookup_first(name.trim()).await?),
        }
    }

    async fn lookup_first(&self, name: &str) -> Result<GeoPoint> {
        if name.is_empty() {
            return Err(GeofenceError::NoResults(String::new()));
        }
        let candidates = self.geocoder.lookup(name).await?;
        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeofenceError::NoResults(name.to_string()))?;
        debug!(query = name, point = %first.point, place = ?first.display_name, "geocoded");
        Ok(first.point)
    }
}
