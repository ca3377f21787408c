// crates/countrynames-core/src/lib.rs

//! # countrynames-core
//!
//! Builds a static lookup dataset that maps ISO 3166-1 country codes to every
//! known spelling of the country's name, and reads it back.
//!
//! ```no_run
//! use countrynames_core::{seed, SeedConfig};
//!
//! let report = seed(&SeedConfig::default())?;
//! for clash in &report.collisions {
//!     println!("{clash}");
//! }
//! println!("{} countries, {} names", report.countries(), report.names());
//! # Ok::<(), countrynames_core::NamesError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod provider;
pub mod search;
pub mod seed;
pub mod store;
pub mod text;
pub mod traits;
// Shared raw input (used by providers and the builder)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::NameStats;
pub use crate::error::{NamesError, Result};
pub use crate::model::{
    Alpha2Index, Alpha3Index, Claim, Collision, CountryInfo, CountryRecord, IsoCodes,
    NameRegistry,
};
pub use crate::provider::{BundledCountries, BundledDisplayNames};
pub use crate::search::NameIndex;
pub use crate::seed::{candidate_codes, seed, seed_with, SeedConfig, SeedReport, Seeder};
pub use crate::store::{RecordStore, StorageLayout};
pub use crate::traits::{CountryInfoProvider, DisplayNameProvider, NameMatch};
