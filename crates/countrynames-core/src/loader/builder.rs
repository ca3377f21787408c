// crates/countrynames-core/src/loader/builder.rs
#![cfg(feature = "builder")]

//! Refreshes the bundled reference datasets from their upstream sources.
//!
//! The primary dataset is converted from the upstream `mledoze/countries`
//! layout into the flat `countries.json` layout the providers read; the
//! display-name list is already in the right shape and is only validated.

use super::{
    COUNTRIES_FILENAME, COUNTRIES_SOURCE_URL, DISPLAY_NAMES_FILENAME, DISPLAY_NAMES_SOURCE_URL,
};
use crate::error::{NamesError, Result};
use crate::raw::{CountriesRaw, CountryInfoRaw, DisplayNamesRaw, IsoRaw};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    fn file_name(self, base: &str) -> String {
        match self {
            CompressionMode::Gzip => format!("{base}.gz"),
            CompressionMode::None => base.to_string(),
        }
    }
}

/// Where to download from. Defaults to the public upstream URLs.
#[derive(Debug, Clone)]
pub struct FetchSources {
    pub countries_url: String,
    pub display_names_url: String,
}

impl Default for FetchSources {
    fn default() -> Self {
        FetchSources {
            countries_url: COUNTRIES_SOURCE_URL.to_string(),
            display_names_url: DISPLAY_NAMES_SOURCE_URL.to_string(),
        }
    }
}

/// Files written by [`fetch_datasets`].
#[derive(Debug, Clone)]
pub struct FetchSummary {
    pub countries_path: PathBuf,
    pub countries: usize,
    pub display_names_path: PathBuf,
    pub display_names: usize,
}

// -----------------------------------------------------------------------------
// UPSTREAM SHAPE (mledoze/countries)
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UpstreamName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
    /// Keyed by ISO 639-3 language code, in source order.
    #[serde(default)]
    pub native: IndexMap<String, UpstreamNativeName>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamNativeName {
    #[serde(default)]
    pub official: Option<String>,
    pub common: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamCountry {
    pub name: UpstreamName,
    pub cca2: String,
    pub cca3: String,
    #[serde(rename = "altSpellings", default)]
    pub alt_spellings: Vec<String>,
}

/// Upstream entry → bundled entry.
///
/// The first native name becomes `nativeName`; the official English name is
/// appended to the alternate spellings when it is not already there.
pub fn convert_upstream(upstream: Vec<UpstreamCountry>) -> CountriesRaw {
    upstream
        .into_iter()
        .map(|c| {
            let native_name = c.name.native.values().next().map(|n| n.common.clone());

            let mut alt_spellings = c.alt_spellings;
            if let Some(official) = c.name.official {
                if official != c.name.common && !alt_spellings.contains(&official) {
                    alt_spellings.push(official);
                }
            }

            CountryInfoRaw {
                iso: IsoRaw {
                    alpha2: c.cca2,
                    alpha3: c.cca3,
                },
                name: c.name.common,
                native_name,
                alt_spellings,
            }
        })
        .collect()
}

// -----------------------------------------------------------------------------
// FETCH
// -----------------------------------------------------------------------------

/// Download both datasets and write them into `out_dir`.
pub fn fetch_datasets(
    out_dir: &Path,
    sources: &FetchSources,
    compression: CompressionMode,
) -> Result<FetchSummary> {
    fs::create_dir_all(out_dir).map_err(|e| NamesError::io(out_dir, e))?;

    info!("Downloading {}", sources.countries_url);
    let upstream: Vec<UpstreamCountry> = download_json(&sources.countries_url)?;
    let countries = convert_upstream(upstream);
    if countries.is_empty() {
        return Err(NamesError::InvalidData(format!(
            "{} returned no countries",
            sources.countries_url
        )));
    }

    info!("Downloading {}", sources.display_names_url);
    let display_names: DisplayNamesRaw = download_json(&sources.display_names_url)?;

    let countries_path = out_dir.join(compression.file_name(COUNTRIES_FILENAME));
    write_generic(&countries_path, &countries, compression)?;
    let display_names_path = out_dir.join(compression.file_name(DISPLAY_NAMES_FILENAME));
    write_generic(&display_names_path, &display_names, compression)?;

    info!(
        "Wrote {} countries to {} and {} display names to {}",
        countries.len(),
        countries_path.display(),
        display_names.len(),
        display_names_path.display()
    );

    Ok(FetchSummary {
        countries_path,
        countries: countries.len(),
        display_names_path,
        display_names: display_names.len(),
    })
}

fn download_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("countrynames/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    serde_json::from_slice(&bytes).map_err(|e| NamesError::json(url, e))
}

// -----------------------------------------------------------------------------
// GENERIC WRITER
// -----------------------------------------------------------------------------

/// Writes any serializable dataset as pretty JSON, optionally gzipped.
fn write_generic<T: Serialize>(path: &Path, data: &T, compression: CompressionMode) -> Result<()> {
    let file = File::create(path).map_err(|e| NamesError::io(path, e))?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(NamesError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    serde_json::to_writer_pretty(&mut encoder, data).map_err(|e| NamesError::json(path, e))?;
    encoder.flush().map_err(|e| NamesError::io(path, e))?;
    Ok(())
}
