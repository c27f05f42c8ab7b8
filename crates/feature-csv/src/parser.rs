//! Gherkin parsing into the document model.
//!
//! Parsing is delegated to the `gherkin` crate, which recognises every feature
//! keyword of the document's language. Text holding nothing but blank lines,
//! comments, or tags yields an empty [`Document`] instead of a parse error so
//! callers can distinguish "nothing to convert" from "malformed input".

use gherkin::GherkinEnv;
use tracing::{debug, warn};

use crate::error::ConvertError;
use crate::model::{Document, Feature};

/// Parse Gherkin source text into a [`Document`].
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] when the text has content but is not valid
/// Gherkin.
///
/// # Examples
///
/// ```
/// use feature_csv::parser::parse_document;
///
/// let document = parse_document("Feature: Login\n  Scenario: ok\n    Given a user\n")?;
/// let feature = document.feature.expect("feature present");
/// assert_eq!(feature.name, "Login");
/// assert_eq!(feature.scenarios.len(), 1);
/// # Ok::<(), feature_csv::ConvertError>(())
/// ```
pub fn parse_document(text: &str) -> Result<Document, ConvertError> {
    if !has_content(text) {
        debug!("document holds only blank lines, comments, or tags");
        return Ok(Document::default());
    }

    let mut source = text.to_string();
    normalise_trailing_newline(&mut source);
    let parsed = gherkin::Feature::parse(source.as_str(), GherkinEnv::default())
        .map_err(|err| ConvertError::Parse(err.to_string()))?;

    for rule in &parsed.rules {
        warn!(
            rule = %rule.name,
            scenarios = rule.scenarios.len(),
            "skipping scenarios nested in a Rule block"
        );
    }
    if parsed.background.is_some() {
        debug!("background steps are not included in test cases");
    }

    Ok(Document {
        feature: Some(Feature::from(&parsed)),
    })
}

fn normalise_trailing_newline(text: &mut String) {
    if !text.ends_with('\n') {
        text.push('\n');
    }
}

/// Return `true` when any line is more than a blank, a `#` comment, or tags.
fn has_content(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .any(|line| !(line.is_empty() || line.starts_with('#') || line.starts_with('@')))
}
