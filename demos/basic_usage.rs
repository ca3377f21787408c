//! Basic usage example for countrynames-rs
//!
//! Seeds a scratch directory from the bundled datasets and looks a few
//! spellings up in the result.

use countrynames_rs::{seed, NameIndex, RecordStore, SeedConfig, StorageLayout};

fn main() -> countrynames_rs::Result<()> {
    let data_dir = std::env::temp_dir().join("countrynames-demo");
    let config = SeedConfig {
        data_dir: data_dir.clone(),
        ..SeedConfig::default()
    };

    println!("=== Seeding {} ===", data_dir.display());
    let report = seed(&config)?;
    for clash in &report.collisions {
        println!("{clash}");
    }
    println!("Countries: {}", report.countries());
    println!("Names: {}", report.names());
    println!();

    let store = RecordStore::new(StorageLayout::new(&data_dir));
    let index = NameIndex::from_records(store.load_all()?);

    println!("=== Lookups ===");
    for query in ["Deutschland", "cote d'ivoire", "Nippon", "UK", "Atlantis"] {
        match index.resolve(query) {
            Some(record) => println!("  {query:<15} -> {} ({})", record.alpha2, record.alpha3),
            None => println!("  {query:<15} -> not found"),
        }
    }

    Ok(())
}
