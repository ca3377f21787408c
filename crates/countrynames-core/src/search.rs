// crates/countrynames-core/src/search.rs
use crate::model::CountryRecord;
use crate::text::fold_key;
use crate::traits::NameMatch;
use std::collections::HashMap;

/// Name → country lookup over generated records.
///
/// Exact spellings are tried first; otherwise the query is compared on its
/// folded form (see [`fold_key`]). When two countries share a folded
/// spelling the one that comes first in `records` wins.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    records: Vec<CountryRecord>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl NameIndex {
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            for name in record.spellings() {
                exact.entry(name.clone()).or_insert(idx);
                folded.entry(fold_key(name)).or_insert(idx);
            }
        }

        NameIndex {
            records,
            exact,
            folded,
        }
    }

    /// The record owning `query`, if any.
    pub fn resolve(&self, query: &str) -> Option<&CountryRecord> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.exact
            .get(query)
            .or_else(|| self.folded.get(&fold_key(query)))
            .map(|&idx| &self.records[idx])
    }

    /// Find a record by its alpha2 or alpha3 code, case-insensitive.
    pub fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        self.records.iter().find(|r| {
            r.alpha2.eq_ignore_ascii_case(code) || r.alpha3.eq_ignore_ascii_case(code)
        })
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
