//! Flattened test-case records ready for export.

use std::fmt;

use serde::Serialize;

/// Expected result used when a scenario has no `Then` step.
pub const FALLBACK_EXPECTED_RESULT: &str = "Verify all steps complete successfully";

/// Column headers written ahead of the records, in field order.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Description",
    "Steps",
    "Expected Result",
    "Priority",
    "Status",
    "Labels",
];

/// One concrete test case derived from a scenario or an outline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseRecord {
    /// `"{feature} - {scenario}"`, with outline parameters appended.
    #[serde(rename = "Name")]
    pub name: String,
    /// Scenario description or empty.
    #[serde(rename = "Description")]
    pub description: String,
    /// Numbered steps, one per line.
    #[serde(rename = "Steps")]
    pub steps: String,
    /// Numbered `Then` steps or [`FALLBACK_EXPECTED_RESULT`].
    #[serde(rename = "Expected Result")]
    pub expected_result: String,
    /// Priority inferred from the scenario's tags.
    #[serde(rename = "Priority")]
    pub priority: Priority,
    /// Workflow status; always [`Status::Draft`].
    #[serde(rename = "Status")]
    pub status: Status,
    /// Comma-joined tag names without markers.
    #[serde(rename = "Labels")]
    pub labels: String,
}

impl TestCaseRecord {
    /// Field values in [`COLUMNS`] order.
    ///
    /// # Examples
    ///
    /// ```
    /// use feature_csv::record::{Priority, Status, TestCaseRecord};
    ///
    /// let record = TestCaseRecord {
    ///     name: "Login - ok".into(),
    ///     description: String::new(),
    ///     steps: "1. Given a user".into(),
    ///     expected_result: "Verify all steps complete successfully".into(),
    ///     priority: Priority::Medium,
    ///     status: Status::Draft,
    ///     labels: String::new(),
    /// };
    /// assert_eq!(record.fields()[4], "Medium");
    /// ```
    #[must_use]
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.name,
            &self.description,
            &self.steps,
            &self.expected_result,
            self.priority.as_str(),
            self.status.as_str(),
            &self.labels,
        ]
    }
}

/// Test-case priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Priority {
    /// Tagged critical or high.
    High,
    /// No priority tag.
    #[default]
    Medium,
    /// Tagged low.
    Low,
}

impl Priority {
    /// Label written to the export.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status assigned to exported test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Status {
    /// Newly imported, not yet reviewed.
    #[default]
    Draft,
}

impl Status {
    /// Label written to the export.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
