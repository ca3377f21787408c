//! countrynames-rs
//! ===============
//!
//! Convenience facade over [`countrynames_core`] so the demos in `demos/`
//! can be run from the workspace root (`cargo run --example basic_usage`).
pub use countrynames_core::*;
