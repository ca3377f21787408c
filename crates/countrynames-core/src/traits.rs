// crates/countrynames-core/src/traits.rs
use crate::model::{CountryInfo, CountryRecord};
use crate::text::fold_key;

/// Primary reference source: country info for a two-letter guess.
///
/// Implementations answer `None` when `code` is not a known ISO 3166-1
/// alpha-2 code. The seeder probes every `AA..ZZ` combination, so a miss is
/// the common case and must be cheap.
///
/// # Examples
/// ```rust
/// use countrynames_core::model::{CountryInfo, IsoCodes};
/// use countrynames_core::traits::CountryInfoProvider;
///
/// struct OnlyAndorra;
/// impl CountryInfoProvider for OnlyAndorra {
///     fn info(&self, code: &str) -> Option<CountryInfo> {
///         (code == "AD").then(|| CountryInfo {
///             iso: IsoCodes { alpha2: "AD".into(), alpha3: "AND".into() },
///             name: "Andorra".into(),
///             native_name: None,
///             alt_spellings: vec![],
///         })
///     }
/// }
///
/// assert!(OnlyAndorra.info("AD").is_some());
/// assert!(OnlyAndorra.info("AE").is_none());
/// ```
pub trait CountryInfoProvider {
    fn info(&self, code: &str) -> Option<CountryInfo>;
}

/// Secondary reference source: a human-readable display name per alpha2.
pub trait DisplayNameProvider {
    fn display_name(&self, alpha2: &str) -> Option<&str>;
}

impl<P: CountryInfoProvider + ?Sized> CountryInfoProvider for &P {
    fn info(&self, code: &str) -> Option<CountryInfo> {
        (**self).info(code)
    }
}

impl<P: DisplayNameProvider + ?Sized> DisplayNameProvider for &P {
    fn display_name(&self, alpha2: &str) -> Option<&str> {
        (**self).display_name(alpha2)
    }
}

/// Name-based matching helpers for types that carry a list of spellings.
///
/// Matching is Unicode-aware, accent-insensitive and case-insensitive, based
/// on [`fold_key`].
///
/// # Examples
/// ```rust
/// use countrynames_core::traits::NameMatch;
///
/// struct Place(Vec<String>);
/// impl NameMatch for Place {
///     fn spellings(&self) -> &[String] { &self.0 }
/// }
///
/// let ci = Place(vec!["Côte d'Ivoire".into(), "Ivory Coast".into()]);
/// assert!(ci.is_named("cote d'ivoire"));
/// assert!(ci.is_named("IVORY COAST"));
/// assert!(!ci.is_named("Ivory"));
/// ```
pub trait NameMatch {
    fn spellings(&self) -> &[String];

    /// Exact match against any spelling.
    #[inline]
    fn has_spelling(&self, q: &str) -> bool {
        self.spellings().iter().any(|s| s == q)
    }

    /// Folded equality against any spelling.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        let q = fold_key(q);
        self.spellings().iter().any(|s| fold_key(s) == q)
    }
}

impl NameMatch for CountryRecord {
    fn spellings(&self) -> &[String] {
        &self.names
    }
}
