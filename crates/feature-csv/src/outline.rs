//! Scenario outline expansion.

use tracing::{debug, warn};

use crate::model::{Feature, Scenario};
use crate::record::TestCaseRecord;
use crate::transform::{ParameterMap, transform_scenario};

/// Expand a scenario outline into one record per examples row.
///
/// Examples blocks are processed in source order and rows in table order.
/// Blocks without a header row, or whose header has no columns, are skipped.
/// Rows shorter than the header pair only the leading columns, leaving the
/// remaining placeholders unresolved.
///
/// # Examples
///
/// ```
/// use feature_csv::model::{Examples, Feature, Scenario, Step, StepKeyword};
/// use feature_csv::outline::expand_outline;
///
/// let feature = Feature { name: "Values".into(), ..Feature::default() };
/// let outline = Scenario {
///     name: "check".into(),
///     steps: vec![Step::new(StepKeyword::When, "value is <A>")],
///     examples: vec![Examples {
///         header: Some(vec!["A".into()]),
///         rows: vec![vec!["x".into()], vec!["y".into()]],
///     }],
///     ..Scenario::default()
/// };
/// let records = expand_outline(&feature, &outline);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].steps, "1. When value is y");
/// ```
#[must_use]
pub fn expand_outline(feature: &Feature, scenario: &Scenario) -> Vec<TestCaseRecord> {
    let mut records = Vec::new();
    for (index, examples) in scenario.examples.iter().enumerate() {
        let Some(headers) = examples.header.as_ref() else {
            debug!(scenario = %scenario.name, index, "skipping examples block without header");
            continue;
        };
        if headers.is_empty() {
            warn!(scenario = %scenario.name, index, "skipping examples block with no columns");
            continue;
        }
        for row in &examples.rows {
            if row.len() < headers.len() {
                warn!(
                    scenario = %scenario.name,
                    expected = headers.len(),
                    found = row.len(),
                    "examples row is shorter than its header; trailing placeholders stay unresolved"
                );
            }
            let parameters = ParameterMap::from_row(headers, row);
            records.push(transform_scenario(feature, scenario, Some(&parameters)));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Examples, Step, StepArgument, StepKeyword, Tag};
    use crate::record::Priority;
    use rstest::{fixture, rstest};

    fn examples(header: &[&str], rows: &[&[&str]]) -> Examples {
        Examples {
            header: Some(header.iter().map(ToString::to_string).collect()),
            rows: rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    #[fixture]
    fn feature() -> Feature {
        Feature {
            name: "Values".into(),
            ..Feature::default()
        }
    }

    #[fixture]
    fn outline() -> Scenario {
        Scenario {
            name: "check".into(),
            steps: vec![Step::new(StepKeyword::When, "value is <A>")],
            ..Scenario::default()
        }
    }

    #[rstest]
    fn expands_each_row_in_order(feature: Feature, mut outline: Scenario) {
        outline.examples = vec![examples(&["A", "B"], &[&["x", "1"], &["y", "2"]])];

        let records = expand_outline(&feature, &outline);

        let steps: Vec<_> = records.iter().map(|r| r.steps.as_str()).collect();
        assert_eq!(steps, ["1. When value is x", "1. When value is y"]);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Values - check (<A>=x, <B>=1)",
                "Values - check (<A>=y, <B>=2)"
            ]
        );
    }

    #[rstest]
    fn concatenates_blocks_in_source_order(feature: Feature, mut outline: Scenario) {
        outline.examples = vec![
            examples(&["A"], &[&["first"]]),
            Examples::default(),
            examples(&["A"], &[&["second"], &["third"]]),
        ];

        let records = expand_outline(&feature, &outline);

        let steps: Vec<_> = records.iter().map(|r| r.steps.as_str()).collect();
        assert_eq!(
            steps,
            [
                "1. When value is first",
                "1. When value is second",
                "1. When value is third"
            ]
        );
    }

    #[rstest]
    fn zero_rows_yield_no_records(feature: Feature, mut outline: Scenario) {
        outline.examples = vec![examples(&["A"], &[])];
        assert!(expand_outline(&feature, &outline).is_empty());
    }

    #[rstest]
    fn short_rows_leave_trailing_placeholders_unresolved(feature: Feature, mut outline: Scenario) {
        outline.steps = vec![Step::new(StepKeyword::Then, "<A> and <B>")];
        outline.examples = vec![examples(&["A", "B"], &[&["x"]])];

        let records = expand_outline(&feature, &outline);

        let [record] = records.as_slice() else {
            panic!("expected a single record, got {}", records.len());
        };
        assert_eq!(record.steps, "1. Then x and <B>");
        assert_eq!(record.expected_result, "1. x and <B>");
        assert_eq!(record.name, "Values - check (<A>=x)");
    }

    #[rstest]
    fn long_rows_ignore_surplus_values(feature: Feature, mut outline: Scenario) {
        outline.examples = vec![examples(&["A"], &[&["x", "extra"]])];
        let records = expand_outline(&feature, &outline);
        assert_eq!(
            records.first().map(|r| r.name.as_str()),
            Some("Values - check (<A>=x)")
        );
    }

    #[rstest]
    fn each_row_keeps_scenario_priority_and_arguments(feature: Feature, mut outline: Scenario) {
        outline.tags = vec![Tag::new("@critical"), Tag::new("@api")];
        outline.steps = vec![
            Step::new(StepKeyword::Given, "payload <A>")
                .with_argument(StepArgument::DocString("<A> stays literal".into())),
        ];
        outline.examples = vec![examples(&["A"], &[&["1"], &["2"]])];

        let records = expand_outline(&feature, &outline);

        assert_eq!(records.len(), 2);
        for (record, value) in records.iter().zip(["1", "2"]) {
            assert_eq!(record.priority, Priority::High);
            assert_eq!(record.labels, "critical, api");
            assert_eq!(
                record.steps,
                format!("1. Given payload {value}\n   <A> stays literal")
            );
        }
    }
}
