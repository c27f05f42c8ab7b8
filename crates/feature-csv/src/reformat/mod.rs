//! Reformatting of exported test-case CSV into a semicolon-delimited,
//! one-step-per-row layout.
//!
//! The input is the comma-delimited export (`Name, Description, Steps,
//! Expected Result, Priority, ...`). Each record becomes one row carrying the
//! priority, name, description, and first step, followed by one row per
//! remaining step with the leading columns left empty.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::error::ReformatError;

mod reader;

pub use reader::read_csv;

/// Header row of the reformatted output.
pub const REFORMATTED_HEADER: &str = "Priority;Name;Description;Steps;Expected Result";

/// Minimum number of fields a record needs to be reformatted.
const MIN_FIELDS: usize = 4;

/// Matches a numbered step line such as `2. When they log in`.
static NUMBERED_STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").unwrap_or_else(|_| unreachable!()));

/// Output of [`reformat_csv`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reformatted {
    /// Output lines, header first.
    pub lines: Vec<String>,
    /// One-based record numbers skipped for having too few fields.
    pub skipped: Vec<usize>,
}

impl Reformatted {
    /// Number of rows excluding the header.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Join the lines with `\n`, including a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Split a numbered steps field into individual step texts.
///
/// Blank lines are dropped, a leading `N.` is stripped, and any other line is
/// kept trimmed as a step of its own.
///
/// # Examples
///
/// ```
/// use feature_csv::reformat::parse_steps;
///
/// let steps = parse_steps("1. Given a user\n   | a | b |\n2. When they log in\n");
/// assert_eq!(steps, ["Given a user", "| a | b |", "When they log in"]);
/// ```
#[must_use]
pub fn parse_steps(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            NUMBERED_STEP_RE
                .captures(line)
                .and_then(|captures| captures.get(2))
                .map_or(line, |step| step.as_str())
                .trim()
                .to_string()
        })
        .collect()
}

/// Reformat exported CSV text.
///
/// The first record is treated as the header and dropped. Records with fewer
/// than four fields are skipped and reported in [`Reformatted::skipped`].
///
/// # Examples
///
/// ```
/// use feature_csv::reformat::reformat_csv;
///
/// let input = "\"Name\",\"Description\",\"Steps\",\"Expected Result\",\"Priority\"\r\n\
///              \"Login - ok\",\"\",\"1. Given a user\n2. Then done\",\"2. done\",\"High\"\r\n";
/// let output = reformat_csv(input);
/// assert_eq!(
///     output.lines,
///     [
///         "Priority;Name;Description;Steps;Expected Result",
///         "High;Login - ok;;Given a user;",
///         ";;;Then done;",
///     ]
/// );
/// ```
#[must_use]
pub fn reformat_csv(text: &str) -> Reformatted {
    let mut output = Reformatted {
        lines: vec![REFORMATTED_HEADER.to_string()],
        skipped: Vec::new(),
    };

    for (number, record) in read_csv(text).iter().enumerate().skip(1) {
        let [name, description, steps, _expected, rest @ ..] = record.as_slice() else {
            warn!(
                record = number,
                fields = record.len(),
                "skipping record with insufficient fields ({} < {MIN_FIELDS})",
                record.len()
            );
            output.skipped.push(number);
            continue;
        };
        let name = name.trim();
        let description = description.trim();
        let priority = rest.first().map_or("", |p| p.trim());
        let steps = parse_steps(steps.trim());

        let mut steps = steps.iter();
        let Some(first) = steps.next() else {
            output
                .lines
                .push(format!("{priority};{name};{description};;"));
            continue;
        };
        output.lines.push(format!(
            "{priority};{name};{description};{};",
            escape_semicolons(first)
        ));
        for step in steps {
            output.lines.push(format!(";;;{};", escape_semicolons(step)));
        }
    }

    output
}

/// Read `input`, reformat it, and write the result to `output`.
///
/// # Errors
///
/// Returns [`ReformatError::InputNotFound`] when `input` does not exist and
/// [`ReformatError::Io`] when reading or writing fails.
pub fn reformat_file(input: &Path, output: &Path) -> Result<Reformatted, ReformatError> {
    if !input.exists() {
        return Err(ReformatError::InputNotFound(input.to_path_buf()));
    }
    let text = std::fs::read_to_string(input)?;
    let reformatted = reformat_csv(&text);
    std::fs::write(output, reformatted.to_text())?;
    info!(
        output = %output.display(),
        rows = reformatted.row_count(),
        skipped = reformatted.skipped.len(),
        "wrote reformatted CSV"
    );
    Ok(reformatted)
}

fn escape_semicolons(text: &str) -> String {
    text.replace(';', ",")
}
