// crates/countrynames-core/src/provider/mod.rs

//! Reference data providers backed by the bundled datasets.
//!
//! Any other source can be plugged into the seeder by implementing
//! [`CountryInfoProvider`](crate::traits::CountryInfoProvider) and
//! [`DisplayNameProvider`](crate::traits::DisplayNameProvider).

mod bundled;

pub use bundled::{BundledCountries, BundledDisplayNames};

/// `true` for exactly `len` ASCII letters.
pub(crate) fn is_code(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_alphabetic())
}
