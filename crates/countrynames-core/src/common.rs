use serde::{Deserialize, Serialize};

/// Simple aggregate statistics over a dataset.
///
/// Returned by [`RecordStore::stats`](crate::store::RecordStore::stats) for
/// what is on disk, and carried by [`SeedReport`](crate::seed::SeedReport)
/// for what a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameStats {
    pub countries: usize,
    pub names: usize,
}
