// crates/geofence-core/src/loader/common_io.rs
use crate::error::{GeofenceError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Whether a source string names an HTTP(S) resource rather than a file.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Reads a local boundary file, gunzipping `*.gz` when `compact` is enabled.
pub fn read_local(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| {
        GeofenceError::Io(std::io::Error::new(
            e.kind(),
            format!("boundary file not found at {}: {}", path.display(), e),
        ))
    })?;
    let mut reader = open_stream(BufReader::new(file), path);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn open_stream<R: Read + 'static>(reader: R, path: &Path) -> Box<dyn Read> {
    #[cfg(feature = "compact")]
    {
        if path.extension().is_some_and(|ext| ext == "gz") {
            return Box::new(GzDecoder::new(reader));
        }
    }

    #[cfg(not(feature = "compact"))]
    let _ = path;

    Box::new(reader)
}
