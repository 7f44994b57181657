// crates/geofence-core/src/loader/fetch.rs
use super::common_io;
use crate::error::Result;
use std::path::Path;

#[cfg(feature = "http")]
use crate::error::GeofenceError;
#[cfg(feature = "http")]
use once_cell::sync::Lazy;

/// Where boundary bytes come from.
///
/// Implementations only move bytes; parsing and filtering stay in
/// [`super::RegionDataLoader`] so every source gets identical treatment.
#[allow(async_fn_in_trait)]
pub trait BoundaryFetch {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>>;
}

#[cfg(feature = "http")]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("geofence/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});

/// Process-wide HTTP client shared by the boundary fetcher and the geocoder.
#[cfg(feature = "http")]
pub(crate) fn http_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// Default fetcher: `http(s)://` via reqwest, anything else from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFetcher;

impl BoundaryFetch for SourceFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        if common_io::is_remote(source) {
            return fetch_remote(source).await;
        }
        common_io::read_local(Path::new(source))
    }
}

#[cfg(feature = "http")]
async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = http_client().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeofenceError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(not(feature = "http"))]
async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    Err(crate::error::GeofenceError::Config(format!(
        "built without the 'http' feature, cannot fetch {url}"
    )))
}
