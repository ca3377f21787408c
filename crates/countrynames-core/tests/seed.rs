use countrynames_core::{
    seed, CountryInfo, CountryInfoProvider, CountryRecord, DisplayNameProvider, IsoCodes,
    NameIndex, NamesError, RecordStore, SeedConfig, Seeder, StorageLayout,
};
use std::collections::{HashMap, HashSet};
use std::fs;
use tempfile::TempDir;

#[derive(Default)]
struct MapCountries(HashMap<String, CountryInfo>);

impl MapCountries {
    fn with(
        mut self,
        alpha2: &str,
        alpha3: &str,
        name: &str,
        native: Option<&str>,
        alts: &[&str],
    ) -> Self {
        self.0.insert(
            alpha2.to_string(),
            CountryInfo {
                iso: IsoCodes {
                    alpha2: alpha2.into(),
                    alpha3: alpha3.into(),
                },
                name: name.into(),
                native_name: native.map(str::to_string),
                alt_spellings: alts.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }

    /// Answer `code` with the entry already stored under `alpha2`.
    fn alias(mut self, code: &str, alpha2: &str) -> Self {
        let info = self.0[alpha2].clone();
        self.0.insert(code.to_string(), info);
        self
    }
}

impl CountryInfoProvider for MapCountries {
    fn info(&self, code: &str) -> Option<CountryInfo> {
        self.0.get(code).cloned()
    }
}

#[derive(Default)]
struct MapDisplayNames(HashMap<String, String>);

impl MapDisplayNames {
    fn with(mut self, alpha2: &str, name: &str) -> Self {
        self.0.insert(alpha2.into(), name.into());
        self
    }
}

impl DisplayNameProvider for MapDisplayNames {
    fn display_name(&self, alpha2: &str) -> Option<&str> {
        self.0.get(alpha2).map(String::as_str)
    }
}

fn store_in(dir: &TempDir) -> RecordStore {
    RecordStore::new(StorageLayout::new(dir.path()))
}

fn united_states() -> MapCountries {
    MapCountries::default().with(
        "US",
        "USA",
        "United States",
        Some("United States"),
        &["USA", "U.S.", "United States of America"],
    )
}

#[test]
fn united_states_record() {
    let dir = TempDir::new().unwrap();
    let seeder = Seeder::new(united_states(), MapDisplayNames::default(), store_in(&dir));

    let report = seeder.run().unwrap();
    assert_eq!(report.countries(), 1);
    assert!(report.collisions.is_empty());

    let record = seeder.store().load_record("US", "USA").unwrap();
    assert_eq!(record.alpha2, "US");
    assert_eq!(record.alpha3, "USA");
    assert_eq!(
        record.names,
        vec!["US", "USA", "United States", "U.S.", "United States of America"]
    );
    assert_eq!(report.names(), 5);
}

#[test]
fn display_name_comes_after_codes() {
    let dir = TempDir::new().unwrap();
    let display = MapDisplayNames::default().with("US", "United States of America");
    let seeder = Seeder::new(united_states(), display, store_in(&dir));
    seeder.run().unwrap();

    let record = seeder.store().load_record("US", "USA").unwrap();
    assert_eq!(
        record.names,
        vec!["US", "USA", "United States of America", "United States", "U.S."]
    );
}

#[test]
fn earlier_code_wins_a_clash() {
    let dir = TempDir::new().unwrap();
    let countries = MapCountries::default()
        .with("CG", "COG", "Republic of the Congo", None, &["Congo", "Congo-Brazzaville"])
        .with("CD", "COD", "DR Congo", None, &["Congo", "Congo-Kinshasa", "DRC"]);
    let seeder = Seeder::new(countries, MapDisplayNames::default(), store_in(&dir));

    let report = seeder.run().unwrap();

    assert_eq!(report.collisions.len(), 1);
    let clash = &report.collisions[0];
    assert_eq!(clash.name, "Congo");
    assert_eq!(clash.alpha2, "CG");
    assert_eq!(clash.owner, "CD");
    assert_eq!(clash.to_string(), r#"CLASH! "Congo" [CG] has been seen for CD"#);

    let cd = seeder.store().load_record("CD", "COD").unwrap();
    let cg = seeder.store().load_record("CG", "COG").unwrap();
    assert!(cd.names.contains(&"Congo".to_string()));
    assert!(!cg.names.contains(&"Congo".to_string()));
    assert!(cg.names.contains(&"Congo-Brazzaville".to_string()));
}

#[test]
fn rerun_keeps_stored_names_first() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .save_record(
            "US",
            &CountryRecord {
                alpha2: "US".into(),
                alpha3: "USA".into(),
                names: vec!["America".into(), "US".into()],
            },
        )
        .unwrap();

    let seeder = Seeder::new(united_states(), MapDisplayNames::default(), store);
    seeder.run().unwrap();
    let first = seeder.store().load_record("US", "USA").unwrap();
    assert_eq!(first.names[0], "America");
    assert_eq!(first.names[1], "US");

    // A second pass over its own output changes nothing.
    seeder.run().unwrap();
    let second = seeder.store().load_record("US", "USA").unwrap();
    assert_eq!(first, second);
}

#[test]
fn stored_name_is_lost_to_an_earlier_country() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .save_record(
            "NE",
            &CountryRecord {
                alpha2: "NE".into(),
                alpha3: "NER".into(),
                names: vec!["Niger".into(), "Nigeria".into()],
            },
        )
        .unwrap();

    let countries = MapCountries::default()
        .with("NE", "NER", "Niger", None, &[])
        .with("NG", "NGA", "Nigeria", None, &[]);
    let seeder = Seeder::new(countries, MapDisplayNames::default(), store);
    let report = seeder.run().unwrap();

    // NE comes first, so its stale "Nigeria" wins and NG reports the clash.
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].alpha2, "NG");
    assert_eq!(report.collisions[0].owner, "NE");
}

#[test]
fn empty_names_are_skipped() {
    let dir = TempDir::new().unwrap();
    let countries =
        MapCountries::default().with("AQ", "ATA", "Antarctica", Some(""), &["", "AQ"]);
    let seeder = Seeder::new(countries, MapDisplayNames::default(), store_in(&dir));
    seeder.run().unwrap();

    let record = seeder.store().load_record("AQ", "ATA").unwrap();
    assert_eq!(record.names, vec!["AQ", "ATA", "Antarctica"]);
}

#[test]
fn malformed_record_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.layout().country_dir()).unwrap();
    fs::write(store.layout().record_path("US"), "{ not json").unwrap();

    let seeder = Seeder::new(united_states(), MapDisplayNames::default(), store);
    let err = seeder.run().unwrap_err();
    assert!(matches!(err, NamesError::Json { .. }), "got {err:?}");
    assert!(!seeder.store().layout().alpha2_index_path().exists());
}

#[test]
fn same_country_reclaiming_its_names_is_not_a_clash() {
    let dir = TempDir::new().unwrap();
    let countries = MapCountries::default()
        .with("GB", "GBR", "United Kingdom", None, &["Great Britain"])
        .alias("UK", "GB");
    let seeder = Seeder::new(countries, MapDisplayNames::default(), store_in(&dir));

    let report = seeder.run().unwrap();

    assert!(report.collisions.is_empty(), "got {:?}", report.collisions);
    assert_eq!(report.alpha2_index, vec!["GB", "GB"]);
    assert_eq!(report.names(), 4);
    let record = seeder.store().load_record("GB", "GBR").unwrap();
    assert_eq!(
        record.names,
        vec!["GB", "GBR", "United Kingdom", "Great Britain"]
    );
}

#[test]
fn unreadable_record_location_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    // A plain file where the record directory should be.
    fs::write(store.layout().country_dir(), "not a directory").unwrap();

    let seeder = Seeder::new(united_states(), MapDisplayNames::default(), store);
    let err = seeder.run().unwrap_err();
    assert!(matches!(err, NamesError::Io { .. }), "got {err:?}");
    assert!(!seeder.store().layout().alpha2_index_path().exists());
    assert!(!seeder.store().layout().alpha3_index_path().exists());
}

#[test]
fn collisions_are_reported_before_an_abort() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.layout().country_dir()).unwrap();
    fs::write(store.layout().record_path("US"), "{ not json").unwrap();

    let countries = united_states()
        .with("CG", "COG", "Republic of the Congo", None, &["Congo"])
        .with("CD", "COD", "DR Congo", None, &["Congo"]);
    let seeder = Seeder::new(countries, MapDisplayNames::default(), store);

    let mut seen = Vec::new();
    let err = seeder
        .run_with(|clash| seen.push(clash.to_string()))
        .unwrap_err();

    assert!(matches!(err, NamesError::Json { .. }), "got {err:?}");
    assert_eq!(seen, vec![r#"CLASH! "Congo" [CG] has been seen for CD"#]);
}

#[test]
fn files_are_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let seeder = Seeder::new(united_states(), MapDisplayNames::default(), store_in(&dir));
    seeder.run().unwrap();

    let layout = seeder.store().layout();
    let record = fs::read_to_string(layout.record_path("US")).unwrap();
    assert!(record.starts_with(
        "{\n  \"alpha2\": \"US\",\n  \"alpha3\": \"USA\",\n  \"names\": [\n    \"US\","
    ));

    let alpha2 = fs::read_to_string(layout.alpha2_index_path()).unwrap();
    assert_eq!(alpha2, "[\n  \"US\"\n]");
    let alpha3 = fs::read_to_string(layout.alpha3_index_path()).unwrap();
    assert_eq!(alpha3, "{\n  \"USA\": \"US\"\n}");
}

// -----------------------------------------------------------------------------
// Bundled datasets
// -----------------------------------------------------------------------------

fn seed_bundled(dir: &TempDir) -> countrynames_core::SeedReport {
    let config = SeedConfig {
        data_dir: dir.path().to_path_buf(),
        ..SeedConfig::default()
    };
    seed(&config).unwrap()
}

#[test]
fn bundled_names_are_unique_across_countries() {
    let dir = TempDir::new().unwrap();
    let report = seed_bundled(&dir);
    let store = store_in(&dir);
    let records = store.load_all().unwrap();

    assert_eq!(records.len(), report.countries());
    assert!(report.countries() > 240);

    let mut all = HashSet::new();
    for record in &records {
        let own: HashSet<&String> = record.names.iter().collect();
        assert_eq!(own.len(), record.names.len(), "duplicate in {}", record.alpha2);
        for name in &record.names {
            assert!(all.insert(name.clone()), "{name:?} appears twice");
        }
    }
    assert_eq!(all.len(), report.names());
}

#[test]
fn bundled_indexes_match_records() {
    let dir = TempDir::new().unwrap();
    let report = seed_bundled(&dir);
    let store = store_in(&dir);

    let alpha2 = store.load_alpha2_index().unwrap();
    let alpha3 = store.load_alpha3_index().unwrap();
    assert_eq!(alpha2, report.alpha2_index);
    assert_eq!(alpha2.len(), report.countries());
    assert_eq!(alpha3.len(), alpha2.len());

    let mut sorted = alpha2.clone();
    sorted.sort();
    assert_eq!(sorted, alpha2, "alpha2 index follows AA..ZZ order");

    for (a3, a2) in &alpha3 {
        let record = store.load_record(a2, a3).unwrap();
        assert_eq!(&record.alpha3, a3);
    }
    assert_eq!(alpha3.get("USA").map(String::as_str), Some("US"));
    assert_eq!(alpha3.get("DEU").map(String::as_str), Some("DE"));
}

#[test]
fn fresh_runs_write_identical_indexes() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    seed_bundled(&first);
    seed_bundled(&second);

    let a = store_in(&first);
    let b = store_in(&second);
    assert_eq!(
        fs::read(a.layout().alpha2_index_path()).unwrap(),
        fs::read(b.layout().alpha2_index_path()).unwrap()
    );
    assert_eq!(
        fs::read(a.layout().alpha3_index_path()).unwrap(),
        fs::read(b.layout().alpha3_index_path()).unwrap()
    );
}

#[test]
fn rerun_over_bundled_output_is_a_superset() {
    let dir = TempDir::new().unwrap();
    seed_bundled(&dir);
    let store = store_in(&dir);
    let before = store.load_all().unwrap();

    seed_bundled(&dir);
    let after = store.load_all().unwrap();

    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.alpha2, new.alpha2);
        for name in &old.names {
            assert!(new.names.contains(name), "{} lost {name:?}", new.alpha2);
        }
    }
}

#[test]
fn lookup_over_bundled_output() {
    let dir = TempDir::new().unwrap();
    seed_bundled(&dir);
    let index = NameIndex::from_records(store_in(&dir).load_all().unwrap());

    assert_eq!(index.resolve("Deutschland").unwrap().alpha2, "DE");
    assert_eq!(index.resolve("cote d'ivoire").unwrap().alpha2, "CI");
    assert_eq!(index.resolve("Nippon").unwrap().alpha3, "JPN");
    assert_eq!(index.resolve("United States of America").unwrap().alpha2, "US");
    assert!(index.resolve("Atlantis").is_none());
}

// -----------------------------------------------------------------------------
// Custom dataset files
// -----------------------------------------------------------------------------

const TINY_COUNTRIES: &str = r#"[
  { "ISO": { "alpha2": "MC", "alpha3": "MCO" }, "name": "Monaco", "nativeName": "Monaco",
    "altSpellings": ["MC", "Principality of Monaco", "Principauté de Monaco"] },
  { "ISO": { "alpha2": "LI", "alpha3": "LIE" }, "name": "Liechtenstein",
    "altSpellings": ["LI", "Principality of Liechtenstein"] }
]"#;

const TINY_DISPLAY_NAMES: &str = r#"[ { "code": "LI", "name": "Liechtenstein" } ]"#;

#[test]
fn seeds_from_custom_dataset_paths() {
    let inputs = TempDir::new().unwrap();
    let countries = inputs.path().join("countries.json");
    let display_names = inputs.path().join("display-names.json");
    fs::write(&countries, TINY_COUNTRIES).unwrap();
    fs::write(&display_names, TINY_DISPLAY_NAMES).unwrap();

    let out = TempDir::new().unwrap();
    let report = seed(&SeedConfig {
        data_dir: out.path().to_path_buf(),
        countries,
        display_names,
    })
    .unwrap();

    assert_eq!(report.alpha2_index, vec!["LI", "MC"]);
    assert_eq!(report.names(), 9);

    let mc = store_in(&out).load_record("MC", "MCO").unwrap();
    assert_eq!(
        mc.names,
        vec!["MC", "MCO", "Monaco", "Principality of Monaco", "Principauté de Monaco"]
    );
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzipped_datasets() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let inputs = TempDir::new().unwrap();
    let countries = inputs.path().join("countries.json.gz");
    let mut gz = GzEncoder::new(fs::File::create(&countries).unwrap(), Compression::default());
    gz.write_all(TINY_COUNTRIES.as_bytes()).unwrap();
    gz.finish().unwrap();
    let display_names = inputs.path().join("display-names.json");
    fs::write(&display_names, TINY_DISPLAY_NAMES).unwrap();

    let out = TempDir::new().unwrap();
    let report = seed(&SeedConfig {
        data_dir: out.path().to_path_buf(),
        countries,
        display_names,
    })
    .unwrap();
    assert_eq!(report.countries(), 2);
}

#[test]
fn missing_dataset_is_not_found() {
    let out = TempDir::new().unwrap();
    let err = seed(&SeedConfig {
        data_dir: out.path().to_path_buf(),
        countries: out.path().join("nope.json"),
        ..SeedConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, NamesError::NotFound(_)));
}

#[test]
fn unopenable_dataset_is_an_io_error() {
    let out = TempDir::new().unwrap();
    let not_a_dir = out.path().join("plain");
    fs::write(&not_a_dir, "x").unwrap();

    let err = seed(&SeedConfig {
        data_dir: out.path().join("data"),
        countries: not_a_dir.join("countries.json"),
        ..SeedConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, NamesError::Io { .. }), "got {err:?}");
}
