// crates/countrynames-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) for the bundled reference
//! datasets, and, behind the `builder` feature, refreshing them from upstream.

use std::path::PathBuf;

mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

pub use common_io::{open_stream, read_json};

/// Bundled primary dataset (country info, ISO codes and alternate spellings).
pub const COUNTRIES_FILENAME: &str = "countries.json";
/// Bundled secondary dataset (one display name per alpha2 code).
pub const DISPLAY_NAMES_FILENAME: &str = "display-names.json";

pub const COUNTRIES_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/mledoze/countries/master/countries.json";
pub const DISPLAY_NAMES_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/fannarsh/country-list/master/data.json";

/// Directory holding the datasets shipped with this crate.
///
/// Resolved relative to the crate root (`CARGO_MANIFEST_DIR`), so this works
/// when running from the workspace and when the crate is used as a dependency
/// (as long as the `data/` directory is shipped alongside).
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_countries_path() -> PathBuf {
    default_data_dir().join(COUNTRIES_FILENAME)
}

pub fn default_display_names_path() -> PathBuf {
    default_data_dir().join(DISPLAY_NAMES_FILENAME)
}
