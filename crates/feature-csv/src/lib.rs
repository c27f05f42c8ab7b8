//! Convert Gherkin feature documents into test-case records for import into a
//! test-management system.
//!
//! # Overview
//!
//! A `.feature` document is parsed with the `gherkin` crate into a small
//! [`model`]. Each scenario then becomes one [`TestCaseRecord`]: steps are
//! numbered across the whole scenario, `Then` steps form the expected result,
//! and tags drive the labels and priority. Scenario outlines expand to one
//! record per examples row with `<placeholder>` substitution.
//!
//! The [`export`] module writes the records as fully quoted CSV (or JSON), and
//! [`reformat`] turns such an export into a semicolon-delimited,
//! one-step-per-row layout.
//!
//! # Example
//!
//! ```
//! use feature_csv::{convert_feature_text, export};
//!
//! let records = convert_feature_text(concat!(
//!     "Feature: Login\n",
//!     "  @high\n",
//!     "  Scenario: Valid credentials\n",
//!     "    Given a user\n",
//!     "    When they log in\n",
//!     "    Then they see the dashboard\n",
//! ))?;
//! let mut csv = String::new();
//! export::write_csv(&mut csv, &records).expect("writing to a String cannot fail");
//! assert!(csv.contains("\"Login - Valid credentials\""));
//! # Ok::<(), feature_csv::ConvertError>(())
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod outline;
pub mod parser;
pub mod pipeline;
pub mod priority;
pub mod record;
pub mod reformat;
pub mod transform;

pub use error::{ConvertError, ReformatError};
pub use pipeline::{convert_document, convert_feature, convert_feature_file, convert_feature_text};
pub use record::{Priority, Status, TestCaseRecord};
