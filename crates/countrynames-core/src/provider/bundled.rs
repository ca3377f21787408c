// crates/countrynames-core/src/provider/bundled.rs
use super::is_code;
use crate::error::Result;
use crate::loader::{self, read_json};
use crate::model::CountryInfo;
use crate::raw::{CountriesRaw, DisplayNamesRaw};
use crate::traits::{CountryInfoProvider, DisplayNameProvider};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

// Single in-process cache so the bundled files are only parsed once.
static COUNTRIES_CACHE: OnceCell<BundledCountries> = OnceCell::new();
static DISPLAY_NAMES_CACHE: OnceCell<BundledDisplayNames> = OnceCell::new();

/// Country info keyed by upper-case alpha2.
#[derive(Debug, Clone, Default)]
pub struct BundledCountries {
    by_alpha2: HashMap<String, CountryInfo>,
}

impl BundledCountries {
    /// The dataset shipped in this crate's `data/` directory.
    pub fn bundled() -> Result<&'static Self> {
        COUNTRIES_CACHE.get_or_try_init(|| Self::load_from_path(loader::default_countries_path()))
    }

    /// Load a `countries.json` (or `.json.gz`) file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw: CountriesRaw = read_json(path)?;
        let db = Self::from_raw(raw);
        debug!("Loaded {} countries from {}", db.len(), path.display());
        Ok(db)
    }

    /// Build from raw entries. Entries with malformed codes are skipped, and
    /// for a repeated alpha2 the first entry wins.
    pub fn from_raw(raw: CountriesRaw) -> Self {
        let mut by_alpha2 = HashMap::with_capacity(raw.len());

        for entry in raw {
            let info = CountryInfo::from(entry);
            if !is_code(&info.iso.alpha2, 2) || !is_code(&info.iso.alpha3, 3) {
                warn!(
                    "Skipping {:?}: bad ISO codes {:?}/{:?}",
                    info.name, info.iso.alpha2, info.iso.alpha3
                );
                continue;
            }
            let key = info.iso.alpha2.to_ascii_uppercase();
            if by_alpha2.contains_key(&key) {
                warn!("Duplicate country entry for {key}, keeping the first");
                continue;
            }
            by_alpha2.insert(key, info);
        }

        BundledCountries { by_alpha2 }
    }

    pub fn len(&self) -> usize {
        self.by_alpha2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alpha2.is_empty()
    }
}

impl CountryInfoProvider for BundledCountries {
    fn info(&self, code: &str) -> Option<CountryInfo> {
        if !is_code(code, 2) {
            return None;
        }
        self.by_alpha2.get(&code.to_ascii_uppercase()).cloned()
    }
}

/// Display names keyed by upper-case alpha2.
#[derive(Debug, Clone, Default)]
pub struct BundledDisplayNames {
    names: HashMap<String, String>,
}

impl BundledDisplayNames {
    pub fn bundled() -> Result<&'static Self> {
        DISPLAY_NAMES_CACHE
            .get_or_try_init(|| Self::load_from_path(loader::default_display_names_path()))
    }

    /// Load a `display-names.json` (or `.json.gz`) file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw: DisplayNamesRaw = read_json(path)?;
        let db = Self::from_raw(raw);
        debug!("Loaded {} display names from {}", db.len(), path.display());
        Ok(db)
    }

    pub fn from_raw(raw: DisplayNamesRaw) -> Self {
        let mut names = HashMap::with_capacity(raw.len());
        for entry in raw {
            names
                .entry(entry.code.to_ascii_uppercase())
                .or_insert(entry.name);
        }
        BundledDisplayNames { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl DisplayNameProvider for BundledDisplayNames {
    fn display_name(&self, alpha2: &str) -> Option<&str> {
        self.names
            .get(&alpha2.to_ascii_uppercase())
            .map(String::as_str)
    }
}
