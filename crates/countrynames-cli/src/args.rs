use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrynames
#[derive(Debug, Parser)]
#[command(
    name = "countrynames",
    version,
    about = "Build and query the country name-spelling dataset"
)]
pub struct CliArgs {
    /// Root directory of the generated dataset
    #[arg(
        short = 'd',
        long = "data-dir",
        env = "COUNTRYNAMES_DATA_DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Primary reference dataset (default: the bundled countries.json)
    #[arg(long = "countries", env = "COUNTRYNAMES_COUNTRIES", global = true)]
    pub countries: Option<PathBuf>,

    /// Secondary display-name dataset (default: the bundled display-names.json)
    #[arg(long = "display-names", env = "COUNTRYNAMES_DISPLAY_NAMES", global = true)]
    pub display_names: Option<PathBuf>,

    /// Defaults to `seed` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge the reference datasets into the per-country records
    Seed,

    /// Resolve a name spelling (or code) to its country
    Lookup {
        /// Any stored spelling, e.g. "Deutschland" or "cote d'ivoire"
        name: String,
    },

    /// Show a summary of the records currently on disk
    Stats,

    /// Download the upstream datasets and rewrite the bundled ones
    #[cfg(feature = "builder")]
    Fetch {
        /// Output directory (default: the bundled data directory)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,

        /// Write gzip-compressed `.json.gz` files
        #[arg(long = "gzip")]
        gzip: bool,
    },
}
