//! countrynames-cli
//! ================
//!
//! Command-line interface for the `countrynames-core` dataset builder.
//!
//! This crate primarily provides a binary (`countrynames`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install countrynames-cli
//! countrynames                 # seed ./data
//! countrynames lookup Nippon   # -> JP (JPN)
//! countrynames stats
//! ```
//!
//! For programmatic access use the `countrynames-core` crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
