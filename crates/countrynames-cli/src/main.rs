//! countrynames — command-line front end for countrynames-core
//!
//! Builds the name-spelling dataset and queries it.
//!
//! Usage examples
//! --------------
//!
//! - Seed `./data` from the bundled reference datasets (the default command)
//!   $ countrynames
//!   $ countrynames seed --data-dir /srv/names
//!
//! - Resolve a spelling to its country
//!   $ countrynames lookup "Deutschland"
//!   $ countrynames lookup "cote d'ivoire"
//!
//! - Show what is on disk
//!   $ countrynames stats
//!
//! - Refresh the bundled datasets from upstream (feature `builder`)
//!   $ countrynames fetch
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=countrynames_core=debug` to see every skipped code).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use countrynames_core::loader;
use countrynames_core::{seed_with, NameIndex, RecordStore, SeedConfig, StorageLayout};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let store = RecordStore::new(StorageLayout::new(&args.data_dir));

    match args.command.unwrap_or(Commands::Seed) {
        Commands::Seed => {
            let config = SeedConfig {
                data_dir: args.data_dir,
                countries: args
                    .countries
                    .unwrap_or_else(loader::default_countries_path),
                display_names: args
                    .display_names
                    .unwrap_or_else(loader::default_display_names_path),
            };
            let report = seed_with(&config, |clash| println!("{clash}"))?;

            println!("Seed complete...");
            println!("* Countries: {};", report.countries());
            println!("* Names: {}", report.names());
        }

        Commands::Lookup { name } => {
            let index = NameIndex::from_records(store.load_all()?);
            match index.resolve(&name).or_else(|| index.find_by_code(&name)) {
                Some(record) => println!("{name} -> {} ({})", record.alpha2, record.alpha3),
                None => bail!("No country found for: {name}"),
            }
        }

        Commands::Stats => {
            let stats = store.stats()?;
            println!("Dataset statistics ({}):", args.data_dir.display());
            println!("  Countries: {}", stats.countries);
            println!("  Names: {}", stats.names);
        }

        #[cfg(feature = "builder")]
        Commands::Fetch { out, gzip } => {
            use countrynames_core::loader::builder::{fetch_datasets, CompressionMode, FetchSources};

            let out_dir = out.unwrap_or_else(loader::default_data_dir);
            let compression = if gzip {
                CompressionMode::Gzip
            } else {
                CompressionMode::None
            };
            let summary = fetch_datasets(&out_dir, &FetchSources::default(), compression)?;
            println!(
                "Fetched {} countries -> {}",
                summary.countries,
                summary.countries_path.display()
            );
            println!(
                "Fetched {} display names -> {}",
                summary.display_names,
                summary.display_names_path.display()
            );
        }
    }

    Ok(())
}
