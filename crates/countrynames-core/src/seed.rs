// crates/countrynames-core/src/seed.rs

//! # Seeder
//!
//! One linear pass over every two-letter code `AA..ZZ`:
//!
//! 1. ask the primary provider whether the code is a country (skip if not),
//! 2. load the stored record for it (or start empty),
//! 3. merge stored names, both codes, the display name, the official and
//!    native names and all alternate spellings into an ordered set,
//! 4. keep each name only if no earlier country claimed it,
//! 5. write the record back.
//!
//! The alpha2 and alpha3 indexes are written once all candidates are done.

use crate::common::NameStats;
use crate::error::Result;
use crate::loader;
use crate::model::{Alpha2Index, Alpha3Index, Claim, Collision, CountryInfo, NameRegistry};
use crate::provider::{BundledCountries, BundledDisplayNames};
use crate::store::{RecordStore, StorageLayout};
use crate::traits::{CountryInfoProvider, DisplayNameProvider};
use indexmap::IndexSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Every two-letter upper-case code, `AA`, `AB`, … `ZZ`.
pub fn candidate_codes() -> impl Iterator<Item = String> {
    ('A'..='Z').flat_map(|first| ('A'..='Z').map(move |second| format!("{first}{second}")))
}

/// Resolved inputs and output location of a seed run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Root of the generated dataset.
    pub data_dir: PathBuf,
    /// Primary dataset (`countries.json`).
    pub countries: PathBuf,
    /// Secondary dataset (`display-names.json`).
    pub display_names: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            data_dir: StorageLayout::default().root().to_path_buf(),
            countries: loader::default_countries_path(),
            display_names: loader::default_display_names_path(),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub stats: NameStats,
    /// Dropped names, in the order they were found.
    pub collisions: Vec<Collision>,
    pub alpha2_index: Alpha2Index,
    pub alpha3_index: Alpha3Index,
}

impl SeedReport {
    /// Number of countries discovered.
    pub fn countries(&self) -> usize {
        self.stats.countries
    }

    /// Number of distinct names attributed to a country.
    pub fn names(&self) -> usize {
        self.stats.names
    }
}

/// Merges reference data into the stored dataset.
pub struct Seeder<P, D> {
    countries: P,
    display_names: D,
    store: RecordStore,
}

impl<P: CountryInfoProvider, D: DisplayNameProvider> Seeder<P, D> {
    pub fn new(countries: P, display_names: D, store: RecordStore) -> Self {
        Seeder {
            countries,
            display_names,
            store,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Run the whole batch. Any error other than a missing record aborts it;
    /// records written before the error stay on disk.
    pub fn run(&self) -> Result<SeedReport> {
        self.run_with(|_| {})
    }

    /// Like [`Seeder::run`], calling `on_collision` for each dropped name as
    /// soon as it is found, so callers see them even if the run aborts later.
    pub fn run_with<F>(&self, mut on_collision: F) -> Result<SeedReport>
    where
        F: FnMut(&Collision),
    {
        let mut registry = NameRegistry::new();
        let mut alpha2_index = Alpha2Index::new();
        let mut alpha3_index = Alpha3Index::new();
        let mut collisions = Vec::new();

        for code in candidate_codes() {
            let Some(info) = self.countries.info(&code) else {
                debug!("{code}: not a country");
                continue;
            };

            let alpha2 = info.iso.alpha2.clone();
            let alpha3 = info.iso.alpha3.clone();
            alpha2_index.push(alpha2.clone());
            alpha3_index.insert(alpha3.clone(), alpha2.clone());

            let mut record = self.store.load_record(&alpha2, &alpha3)?;
            let previous = std::mem::take(&mut record.names);

            for name in self.collect_names(previous, info) {
                if name.is_empty() {
                    continue;
                }
                match registry.claim(&name, &alpha2) {
                    Claim::Granted | Claim::AlreadyOwned => record.names.push(name),
                    Claim::Taken { owner } => {
                        let collision = Collision {
                            owner: owner.to_owned(),
                            alpha2: alpha2.clone(),
                            name,
                        };
                        debug!("{collision}");
                        on_collision(&collision);
                        collisions.push(collision);
                    }
                }
            }

            self.store.save_record(&alpha2, &record)?;
        }

        self.store.save_alpha2_index(&alpha2_index)?;
        self.store.save_alpha3_index(&alpha3_index)?;
        info!(
            "Wrote {} and {}",
            self.store.layout().alpha2_index_path().display(),
            self.store.layout().alpha3_index_path().display()
        );

        let stats = NameStats {
            countries: alpha2_index.len(),
            names: registry.len(),
        };
        info!(
            "Seeded {} countries, {} names, {} collisions",
            stats.countries,
            stats.names,
            collisions.len()
        );

        Ok(SeedReport {
            stats,
            collisions,
            alpha2_index,
            alpha3_index,
        })
    }

    /// Ordered, de-duplicated candidate names for one country.
    fn collect_names(&self, previous: Vec<String>, info: CountryInfo) -> IndexSet<String> {
        let mut names: IndexSet<String> = previous.into_iter().collect();

        names.insert(info.iso.alpha2.clone());
        names.insert(info.iso.alpha3);
        if let Some(display) = self.display_names.display_name(&info.iso.alpha2) {
            names.insert(display.to_owned());
        }
        names.insert(info.name);
        if let Some(native) = info.native_name {
            names.insert(native);
        }
        names.extend(info.alt_spellings);

        names
    }
}

/// Seed with the datasets and output directory named in `config`.
///
/// The bundled datasets are parsed once per process; any other path is read
/// on every call.
pub fn seed(config: &SeedConfig) -> Result<SeedReport> {
    seed_with(config, |_| {})
}

/// [`seed`], reporting each collision through `on_collision` as it happens.
pub fn seed_with<F>(config: &SeedConfig, on_collision: F) -> Result<SeedReport>
where
    F: FnMut(&Collision),
{
    let loaded_countries;
    let countries = if config.countries == loader::default_countries_path() {
        BundledCountries::bundled()?
    } else {
        loaded_countries = BundledCountries::load_from_path(&config.countries)?;
        &loaded_countries
    };

    let loaded_display_names;
    let display_names = if config.display_names == loader::default_display_names_path() {
        BundledDisplayNames::bundled()?
    } else {
        loaded_display_names = BundledDisplayNames::load_from_path(&config.display_names)?;
        &loaded_display_names
    };

    let store = RecordStore::new(StorageLayout::new(&config.data_dir));

    Seeder::new(countries, display_names, store).run_with(on_collision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_all_pairs_in_order() {
        let codes: Vec<String> = candidate_codes().collect();
        assert_eq!(codes.len(), 676);
        assert_eq!(codes[0], "AA");
        assert_eq!(codes[1], "AB");
        assert_eq!(codes[26], "BA");
        assert_eq!(codes[675], "ZZ");
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }
}
