// crates/countrynames-core/src/raw.rs
//! Raw dataset shapes as they come from JSON.
//!
//! NOTE: These types mirror external datasets and may be subject to those
//! datasets' licenses. They are converted into [`crate::model`] types before
//! anything else sees them.
use serde::{Deserialize, Serialize};

/// ISO block of a bundled country entry:
/// `{ "alpha2": "AD", "alpha3": "AND" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsoRaw {
    pub alpha2: String,
    pub alpha3: String,
}

/// One entry of the bundled `countries.json`.
///
/// ```json
/// {
///   "ISO": { "alpha2": "AD", "alpha3": "AND" },
///   "name": "Andorra",
///   "nativeName": "Andorra",
///   "altSpellings": ["AD", "Principality of Andorra", "Principat d'Andorra"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryInfoRaw {
    #[serde(rename = "ISO")]
    pub iso: IsoRaw,
    pub name: String,
    #[serde(rename = "nativeName", default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
    #[serde(rename = "altSpellings", default)]
    pub alt_spellings: Vec<String>,
}

pub type CountriesRaw = Vec<CountryInfoRaw>;

/// One entry of the bundled `display-names.json`: `{ "code": "AD", "name": "Andorra" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayNameRaw {
    pub code: String,
    pub name: String,
}

pub type DisplayNamesRaw = Vec<DisplayNameRaw>;
