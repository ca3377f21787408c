// crates/countrynames-core/src/store.rs

//! # Record Store
//!
//! On-disk layout of the generated dataset:
//!
//! ```text
//! <root>/country/<ALPHA2>.json   { "alpha2", "alpha3", "names": [...] }
//! <root>/iso-alpha-2.json        [ "AD", "AE", ... ]
//! <root>/iso-alpha-3.json        { "AND": "AD", "ARE": "AE", ... }
//! ```
//!
//! Everything is written pretty-printed with a two-space indent.

use crate::common::NameStats;
use crate::error::{NamesError, Result};
use crate::model::{Alpha2Index, Alpha3Index, CountryRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const COUNTRY_DIR: &str = "country";
pub const ALPHA2_INDEX_FILENAME: &str = "iso-alpha-2.json";
pub const ALPHA3_INDEX_FILENAME: &str = "iso-alpha-3.json";
pub const DEFAULT_ROOT: &str = "data";

/// Where the generated files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StorageLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn country_dir(&self) -> PathBuf {
        self.root.join(COUNTRY_DIR)
    }

    pub fn record_path(&self, alpha2: &str) -> PathBuf {
        self.country_dir().join(format!("{alpha2}.json"))
    }

    pub fn alpha2_index_path(&self) -> PathBuf {
        self.root.join(ALPHA2_INDEX_FILENAME)
    }

    pub fn alpha3_index_path(&self) -> PathBuf {
        self.root.join(ALPHA3_INDEX_FILENAME)
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        StorageLayout::new(DEFAULT_ROOT)
    }
}

/// Reads and writes country records and the two index files.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    layout: StorageLayout,
}

impl RecordStore {
    pub fn new(layout: StorageLayout) -> Self {
        RecordStore { layout }
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Load the stored record for `alpha2`.
    ///
    /// A missing file (or a path that is not a regular file) yields an empty
    /// record built from `alpha2`/`alpha3`. Any other I/O error and any JSON
    /// error is returned.
    pub fn load_record(&self, alpha2: &str, alpha3: &str) -> Result<CountryRecord> {
        let path = self.layout.record_path(alpha2);

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Ok(CountryRecord::empty(alpha2, alpha3)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(CountryRecord::empty(alpha2, alpha3));
            }
            Err(e) => return Err(NamesError::io(&path, e)),
        }

        let record: CountryRecord = read_json_file(&path)?;
        debug!("Loaded {} ({} names)", path.display(), record.names.len());
        Ok(record)
    }

    /// Write `record` to the file for `alpha2`.
    ///
    /// The file is keyed by the caller's code, not by `record.alpha2`, so a
    /// hand-edited record keeps its place.
    pub fn save_record(&self, alpha2: &str, record: &CountryRecord) -> Result<()> {
        let dir = self.layout.country_dir();
        fs::create_dir_all(&dir).map_err(|e| NamesError::io(&dir, e))?;
        write_pretty(&self.layout.record_path(alpha2), record)
    }

    pub fn save_alpha2_index(&self, index: &Alpha2Index) -> Result<()> {
        self.ensure_root()?;
        write_pretty(&self.layout.alpha2_index_path(), index)
    }

    pub fn save_alpha3_index(&self, index: &Alpha3Index) -> Result<()> {
        self.ensure_root()?;
        write_pretty(&self.layout.alpha3_index_path(), index)
    }

    pub fn load_alpha2_index(&self) -> Result<Alpha2Index> {
        read_json_file(&self.layout.alpha2_index_path())
    }

    pub fn load_alpha3_index(&self) -> Result<Alpha3Index> {
        read_json_file(&self.layout.alpha3_index_path())
    }

    /// Every stored record, ordered by alpha2.
    pub fn load_all(&self) -> Result<Vec<CountryRecord>> {
        let dir = self.layout.country_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(NamesError::NotFound(format!(
                    "No records at {} (run the seed first)",
                    dir.display()
                )));
            }
            Err(e) => return Err(NamesError::io(&dir, e)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| NamesError::io(&dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|p| read_json_file::<CountryRecord>(p))
            .collect()
    }

    /// Counts over the records currently on disk.
    pub fn stats(&self) -> Result<NameStats> {
        let records = self.load_all()?;
        Ok(NameStats {
            countries: records.len(),
            names: records.iter().map(|r| r.names.len()).sum(),
        })
    }

    fn ensure_root(&self) -> Result<()> {
        let root = self.layout.root();
        fs::create_dir_all(root).map_err(|e| NamesError::io(root, e))
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| NamesError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| NamesError::json(path, e))
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| NamesError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| NamesError::json(path, e))?;
    writer.flush().map_err(|e| NamesError::io(path, e))?;
    Ok(())
}
