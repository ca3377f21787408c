// crates/countrynames-core/src/model.rs
use crate::raw::CountryInfoRaw;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166-1 codes of a country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoCodes {
    pub alpha2: String,
    pub alpha3: String,
}

/// Reference data for one country, as answered by a
/// [`CountryInfoProvider`](crate::traits::CountryInfoProvider).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub iso: IsoCodes,
    /// Official (English) name.
    pub name: String,
    /// Name in the country's own language, when known.
    pub native_name: Option<String>,
    pub alt_spellings: Vec<String>,
}

impl From<CountryInfoRaw> for CountryInfo {
    fn from(raw: CountryInfoRaw) -> Self {
        CountryInfo {
            iso: IsoCodes {
                alpha2: raw.iso.alpha2,
                alpha3: raw.iso.alpha3,
            },
            name: raw.name,
            native_name: raw.native_name,
            alt_spellings: raw.alt_spellings,
        }
    }
}

/// The persisted per-country record, `data/country/<ALPHA2>.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub alpha2: String,
    pub alpha3: String,
    #[serde(default)]
    pub names: Vec<String>,
}

impl CountryRecord {
    /// A record with no names yet.
    pub fn empty(alpha2: impl Into<String>, alpha3: impl Into<String>) -> Self {
        CountryRecord {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            names: Vec::new(),
        }
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// All discovered alpha2 codes, in discovery order (`data/iso-alpha-2.json`).
pub type Alpha2Index = Vec<String>;

/// alpha3 → alpha2, in discovery order (`data/iso-alpha-3.json`).
pub type Alpha3Index = IndexMap<String, String>;

/// Outcome of [`NameRegistry::claim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim<'a> {
    /// First time the name is seen; it now belongs to the claimant.
    Granted,
    /// The claimant already owns the name.
    AlreadyOwned,
    /// Another country got there first.
    Taken { owner: &'a str },
}

/// Name → owning alpha2 for the lifetime of one seed run. First writer wins.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    owners: IndexMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to attribute `name` to `alpha2`.
    pub fn claim(&mut self, name: &str, alpha2: &str) -> Claim<'_> {
        match self.owners.entry(name.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(alpha2.to_owned());
                Claim::Granted
            }
            Entry::Occupied(slot) => {
                let owner: &str = slot.into_mut();
                if owner == alpha2 {
                    Claim::AlreadyOwned
                } else {
                    Claim::Taken { owner }
                }
            }
        }
    }

    pub fn owner(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    /// Number of distinct names claimed so far.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// A name dropped from a country because an earlier country claimed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub name: String,
    /// The country that lost the name.
    pub alpha2: String,
    /// The country that keeps it.
    pub owner: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CLASH! \"{}\" [{}] has been seen for {}",
            self.name, self.alpha2, self.owner
        )
    }
}
