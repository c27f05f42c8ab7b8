//! Feature-to-records pipeline.
//!
//! Walks the feature's scenarios in document order, routing outlines through
//! the expander and plain scenarios straight to the transformer. The result is
//! a flat, deterministic sequence of records.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::ConvertError;
use crate::model::{Document, Feature};
use crate::outline::expand_outline;
use crate::parser::parse_document;
use crate::record::TestCaseRecord;
use crate::transform::transform_scenario;

/// Convert a parsed document into test-case records.
///
/// An empty vector is returned when the feature has no scenarios or only
/// outlines without example rows; callers decide whether that is an error.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyDocument`] when the document has no feature.
pub fn convert_document(document: &Document) -> Result<Vec<TestCaseRecord>, ConvertError> {
    let feature = document
        .feature
        .as_ref()
        .ok_or(ConvertError::EmptyDocument)?;
    Ok(convert_feature(feature))
}

/// Convert every scenario of a feature, outlines expanded in place.
#[must_use]
pub fn convert_feature(feature: &Feature) -> Vec<TestCaseRecord> {
    let mut records = Vec::new();
    for scenario in &feature.scenarios {
        if scenario.is_outline() {
            let expanded = expand_outline(feature, scenario);
            debug!(scenario = %scenario.name, rows = expanded.len(), "expanded scenario outline");
            records.extend(expanded);
        } else {
            debug!(scenario = %scenario.name, "converted scenario");
            records.push(transform_scenario(feature, scenario, None));
        }
    }
    info!(feature = %feature.name, test_cases = records.len(), "converted feature");
    records
}

/// Parse Gherkin text and convert it into test-case records.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for invalid Gherkin and
/// [`ConvertError::EmptyDocument`] when no feature is declared.
///
/// # Examples
///
/// ```
/// use feature_csv::convert_feature_text;
///
/// let records = convert_feature_text(
///     "Feature: Login\n  @high\n  Scenario: ok\n    Given a user\n    Then it works\n",
/// )?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].expected_result, "2. it works");
/// # Ok::<(), feature_csv::ConvertError>(())
/// ```
pub fn convert_feature_text(text: &str) -> Result<Vec<TestCaseRecord>, ConvertError> {
    convert_document(&parse_document(text)?)
}

/// Read a `.feature` file and convert it into test-case records.
///
/// # Errors
///
/// Returns [`ConvertError::FeatureNotFound`] when the path does not exist,
/// [`ConvertError::Io`] for other read failures, and the errors of
/// [`convert_feature_text`] otherwise.
pub fn convert_feature_file(path: &Path) -> Result<Vec<TestCaseRecord>, ConvertError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConvertError::FeatureNotFound(path.to_path_buf())
        } else {
            ConvertError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read feature file");
    convert_feature_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Examples, Scenario, Step, StepKeyword};

    fn plain(name: &str) -> Scenario {
        Scenario {
            name: name.into(),
            steps: vec![Step::new(StepKeyword::Given, "x")],
            ..Scenario::default()
        }
    }

    fn outline(name: &str, rows: &[&str]) -> Scenario {
        Scenario {
            name: name.into(),
            steps: vec![Step::new(StepKeyword::Given, "<v>")],
            examples: vec![Examples {
                header: Some(vec!["v".into()]),
                rows: rows.iter().map(|v| vec![(*v).to_string()]).collect(),
            }],
            ..Scenario::default()
        }
    }

    #[test]
    fn missing_feature_is_an_empty_document() {
        let result = convert_document(&Document::default());
        assert!(matches!(result, Err(ConvertError::EmptyDocument)));
    }

    #[test]
    fn feature_without_scenarios_yields_no_records() {
        let document = Document {
            feature: Some(Feature {
                name: "Empty".into(),
                ..Feature::default()
            }),
        };
        let records = convert_document(&document).unwrap_or_else(|err| panic!("{err}"));
        assert!(records.is_empty());
    }

    #[test]
    fn interleaves_scenarios_and_outline_rows_in_document_order() {
        let feature = Feature {
            name: "F".into(),
            description: None,
            scenarios: vec![
                plain("first"),
                outline("second", &["a", "b"]),
                outline("empty", &[]),
                plain("third"),
            ],
        };
        let names: Vec<_> = convert_feature(&feature)
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(
            names,
            [
                "F - first",
                "F - second (<v>=a)",
                "F - second (<v>=b)",
                "F - third"
            ]
        );
    }

    #[test]
    fn converting_twice_is_identical() {
        let document = Document {
            feature: Some(Feature {
                name: "F".into(),
                description: None,
                scenarios: vec![plain("one"), outline("two", &["a"])],
            }),
        };
        let first = convert_document(&document).unwrap_or_else(|err| panic!("{err}"));
        let second = convert_document(&document).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let path = Path::new("definitely/not/here.feature");
        let result = convert_feature_file(path);
        assert!(matches!(result, Err(ConvertError::FeatureNotFound(p)) if p == path));
    }
}
