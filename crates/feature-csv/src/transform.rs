//! Rendering of a single scenario into a [`TestCaseRecord`].
//!
//! Plain scenarios and expanded outline rows share this transformer; the only
//! difference is whether a [`ParameterMap`] is supplied.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Feature, Scenario, Step, StepArgument, StepKeyword, Tag};
use crate::priority::determine_priority;
use crate::record::{FALLBACK_EXPECTED_RESULT, Status, TestCaseRecord};

/// Matches `<placeholder>` tokens left in step text after substitution.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^>\s][^>]*)>").unwrap_or_else(|_| unreachable!()));

/// Indentation applied to doc string and data table continuation lines.
const CONTINUATION_INDENT: &str = "   ";

/// Ordered placeholder substitutions for one examples row.
///
/// Keys are stored in their placeholder form (`<Header>`) and applied in
/// insertion order, which follows the examples header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: Vec<(String, String)>,
}

impl ParameterMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair headers with row values positionally.
    ///
    /// Pairing stops at the shorter of the two sequences: missing trailing
    /// values leave their placeholders unresolved and surplus values are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use feature_csv::transform::ParameterMap;
    ///
    /// let headers = ["A".to_string(), "B".to_string()];
    /// let row = ["x".to_string()];
    /// let map = ParameterMap::from_row(&headers, &row);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.apply("<A> and <B>"), "x and <B>");
    /// ```
    #[must_use]
    pub fn from_row(headers: &[String], values: &[String]) -> Self {
        let mut map = Self::new();
        for (header, value) in headers.iter().zip(values) {
            map.insert(header, value.clone());
        }
        map
    }

    /// Add a substitution for `header`, stored under `<header>`.
    ///
    /// A repeated header replaces the earlier value but keeps its position.
    pub fn insert(&mut self, header: &str, value: String) {
        let key = format!("<{header}>");
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Number of substitutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no substitutions are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(placeholder, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every occurrence of each placeholder in `text`.
    ///
    /// Replacement is plain substring replacement applied once per key in
    /// order, so a value containing another placeholder may be rewritten by a
    /// later key and overlapping placeholder names are not disambiguated.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (key, value)| acc.replace(key, value))
    }

    /// Render as `<A>=x, <B>=1` for use in record names.
    #[must_use]
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Convert one scenario into a test-case record.
///
/// `parameters` is `None` for plain scenarios. An empty map behaves the same
/// as `None` for step text but still marks the name as an outline instance.
///
/// # Examples
///
/// ```
/// use feature_csv::model::{Feature, Scenario, Step, StepKeyword, Tag};
/// use feature_csv::transform::transform_scenario;
///
/// let feature = Feature { name: "Login".into(), ..Feature::default() };
/// let scenario = Scenario {
///     name: "Valid credentials".into(),
///     steps: vec![
///         Step::new(StepKeyword::Given, "a user"),
///         Step::new(StepKeyword::Then, "they see the dashboard"),
///     ],
///     tags: vec![Tag::new("@high")],
///     ..Scenario::default()
/// };
/// let record = transform_scenario(&feature, &scenario, None);
/// assert_eq!(record.name, "Login - Valid credentials");
/// assert_eq!(record.expected_result, "2. they see the dashboard");
/// ```
#[must_use]
pub fn transform_scenario(
    feature: &Feature,
    scenario: &Scenario,
    parameters: Option<&ParameterMap>,
) -> TestCaseRecord {
    let mut steps = String::new();
    let mut expected = String::new();

    for (number, step) in (1_usize..).zip(&scenario.steps) {
        let text = resolve_text(step, parameters);
        push_line(&mut steps, &format!("{number}. {} {text}", step.keyword));
        render_argument(&mut steps, &step.argument);

        if step.keyword == StepKeyword::Then {
            push_line(&mut expected, &format!("{number}. {text}"));
            if let StepArgument::DocString(content) = &step.argument {
                push_continuation(&mut expected, content);
            }
        }
    }

    let expected_result = if expected.is_empty() {
        FALLBACK_EXPECTED_RESULT.to_string()
    } else {
        expected.trim_end().to_string()
    };

    TestCaseRecord {
        name: record_name(feature, scenario, parameters),
        description: scenario
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        steps: steps.trim_end().to_string(),
        expected_result,
        priority: determine_priority(&scenario.tags),
        status: Status::Draft,
        labels: scenario
            .tags
            .iter()
            .map(Tag::label)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn resolve_text(step: &Step, parameters: Option<&ParameterMap>) -> String {
    let Some(map) = parameters.filter(|map| !map.is_empty()) else {
        return step.text.clone();
    };
    let resolved = map.apply(&step.text);
    for unresolved in PLACEHOLDER_RE.find_iter(&resolved) {
        debug!(
            step = %step.text,
            placeholder = unresolved.as_str(),
            "placeholder has no matching examples column"
        );
    }
    resolved
}

fn record_name(feature: &Feature, scenario: &Scenario, parameters: Option<&ParameterMap>) -> String {
    let mut name = format!("{} - {}", feature.name, scenario.name);
    if let Some(map) = parameters {
        let _ = write!(name, " ({})", map.describe());
    }
    name
}

fn render_argument(buffer: &mut String, argument: &StepArgument) {
    match argument {
        StepArgument::None => {}
        StepArgument::DocString(content) => push_continuation(buffer, content),
        StepArgument::DataTable(rows) => {
            for row in rows {
                push_continuation(buffer, &format!("| {} |", row.join(" | ")));
            }
        }
    }
}

fn push_continuation(buffer: &mut String, content: &str) {
    push_line(buffer, &format!("{CONTINUATION_INDENT}{content}"));
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}
