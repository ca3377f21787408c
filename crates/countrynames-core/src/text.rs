// crates/countrynames-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
/// 3\) Collapse runs of whitespace and trim
///
/// # Examples
///
/// ```rust
/// use countrynames_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland  Islands"), "aland islands");
/// assert_eq!(fold_key("Türkiye"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use countrynames_core::text::equals_folded;
///
/// assert!(equals_folded("Curaçao", "curacao"));
/// assert!(!equals_folded("Niger", "Nigeria"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
