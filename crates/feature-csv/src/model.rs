//! In-memory document model built from parsed Gherkin.
//!
//! The model keeps only the shapes the converter reads: a feature with its
//! scenarios, each scenario's steps, tags, and examples tables. It is built
//! once per input and never mutated afterwards.

use std::fmt;

/// Marker character that prefixes every tag in the source text.
pub const TAG_MARKER: char = '@';

/// A parsed document. `feature` is `None` when the input declared no feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level feature, if one was declared.
    pub feature: Option<Feature>,
}

/// Top-level feature containing scenarios in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    /// Feature name following the `Feature:` keyword.
    pub name: String,
    /// Free-form description below the feature line.
    pub description: Option<String>,
    /// Direct scenario children in document order.
    pub scenarios: Vec<Scenario>,
}

/// A scenario or scenario outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Free-form description below the scenario line.
    pub description: Option<String>,
    /// Steps in document order.
    pub steps: Vec<Step>,
    /// Tags in source order.
    pub tags: Vec<Tag>,
    /// Examples blocks in source order; empty for plain scenarios.
    pub examples: Vec<Examples>,
}

impl Scenario {
    /// Return `true` when at least one examples block is attached.
    #[must_use]
    pub fn is_outline(&self) -> bool {
        !self.examples.is_empty()
    }
}

/// A single step line with its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Keyword introducing the step.
    pub keyword: StepKeyword,
    /// Step text following the keyword.
    pub text: String,
    /// Doc string or data table attached to the step.
    pub argument: StepArgument,
}

impl Step {
    /// Build a step without an argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use feature_csv::model::{Step, StepArgument, StepKeyword};
    ///
    /// let step = Step::new(StepKeyword::Given, "a user");
    /// assert_eq!(step.argument, StepArgument::None);
    /// ```
    #[must_use]
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
            argument: StepArgument::None,
        }
    }

    /// Attach an argument to the step.
    #[must_use]
    pub fn with_argument(mut self, argument: StepArgument) -> Self {
        self.argument = argument;
        self
    }
}

/// Argument attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StepArgument {
    /// No argument.
    #[default]
    None,
    /// Multi-line doc string content.
    DocString(String),
    /// Data table rows, each an ordered list of cells.
    DataTable(Vec<Vec<String>>),
}

/// Keyword used to introduce a step.
///
/// The five English keywords are matched case-insensitively. Anything else,
/// such as `*` or a localised keyword, is kept as written and never counts as
/// an expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Preconditions.
    Given,
    /// Actions.
    When,
    /// Expected outcomes.
    Then,
    /// Continuation of the previous step.
    And,
    /// Contrasting continuation of the previous step.
    But,
    /// Any other keyword, trimmed.
    Other(String),
}

impl StepKeyword {
    const KNOWN: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the keyword as written in rendered output.
    ///
    /// # Examples
    ///
    /// ```
    /// use feature_csv::model::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Then.as_str(), "Then");
    /// assert_eq!(StepKeyword::from_source(" * ").as_str(), "*");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Other(keyword) => keyword,
        }
    }

    /// Classify keyword text as it appears in the source.
    #[must_use]
    pub fn from_source(keyword: &str) -> Self {
        let trimmed = keyword.trim();
        Self::KNOWN
            .into_iter()
            .find(|known| trimmed.eq_ignore_ascii_case(known.as_str()))
            .unwrap_or_else(|| Self::Other(trimmed.to_string()))
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scenario tag, always stored with its leading `@` marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Build a tag, adding the `@` marker when the input lacks it.
    ///
    /// # Examples
    ///
    /// ```
    /// use feature_csv::model::Tag;
    ///
    /// assert_eq!(Tag::new("smoke").name(), "@smoke");
    /// assert_eq!(Tag::new("@smoke").name(), "@smoke");
    /// ```
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let trimmed = name.as_ref().trim();
        if trimmed.starts_with(TAG_MARKER) {
            Self(trimmed.to_string())
        } else {
            Self(format!("{TAG_MARKER}{trimmed}"))
        }
    }

    /// Tag name including the marker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Tag name with leading markers stripped, as used for labels.
    #[must_use]
    pub fn label(&self) -> &str {
        self.0.trim_start_matches(TAG_MARKER)
    }
}

/// Examples table attached to a scenario outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Examples {
    /// Column names; `None` when the block carried no table.
    pub header: Option<Vec<String>>,
    /// Data rows in source order.
    pub rows: Vec<Vec<String>>,
}

impl From<&gherkin::Feature> for Feature {
    fn from(feature: &gherkin::Feature) -> Self {
        Self {
            name: feature.name.clone(),
            description: feature.description.clone(),
            scenarios: feature.scenarios.iter().map(Scenario::from).collect(),
        }
    }
}

impl From<&gherkin::Scenario> for Scenario {
    fn from(scenario: &gherkin::Scenario) -> Self {
        Self {
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            steps: scenario.steps.iter().map(Step::from).collect(),
            tags: scenario.tags.iter().map(Tag::new).collect(),
            examples: scenario.examples.iter().map(Examples::from).collect(),
        }
    }
}

impl From<&gherkin::Step> for Step {
    fn from(step: &gherkin::Step) -> Self {
        let argument = match (step.table.as_ref(), step.docstring.as_ref()) {
            (Some(table), _) => StepArgument::DataTable(table.rows.clone()),
            (None, Some(doc)) => StepArgument::DocString(doc.clone()),
            (None, None) => StepArgument::None,
        };
        Self {
            keyword: StepKeyword::from_source(&step.keyword),
            text: step.value.clone(),
            argument,
        }
    }
}

impl From<&gherkin::Examples> for Examples {
    fn from(examples: &gherkin::Examples) -> Self {
        let Some(table) = examples.table.as_ref() else {
            return Self::default();
        };
        let mut rows = table.rows.iter();
        let header = rows.next().cloned();
        Self {
            header,
            rows: rows.cloned().collect(),
        }
    }
}
