// crates/countrynames-core/src/loader/common_io.rs
use crate::error::{NamesError, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a dataset file, buffers it, and wraps it in a Gzip decoder when the
/// file ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            NamesError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => NamesError::io(path, e),
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(NamesError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Parses a whole dataset file into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    serde_json::from_reader(reader).map_err(|e| NamesError::json(path, e))
}
