//! ISO dataset fetcher
//!
//! Downloads the ISO 639-3 language table and the ISO 3166 country dataset
//! into local files for the `iso-assets` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
