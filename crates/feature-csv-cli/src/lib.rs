//! Command line front end for `feature-csv`.
//!
//! The `featurecsv` binary runs in one of two modes:
//!
//! - `featurecsv <FEATURE> [OUTPUT]` converts a Gherkin feature file into a
//!   test-case CSV (or JSON with `--format json`).
//! - `featurecsv --reformat <INPUT> <OUTPUT>` rewrites an exported CSV into
//!   semicolon-delimited rows with one step per row.
//!
//! # Configuration
//!
//! - `FEATURE_CSV_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error)
//! - `FEATURE_CSV_FORMAT`: default output format (csv, json)
//!
//! Command line flags override the environment.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;
