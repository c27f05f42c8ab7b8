//! Tag-based priority inference.

use crate::model::Tag;
use crate::record::Priority;

const HIGH_MARKERS: [&str; 2] = ["critical", "high"];
const LOW_MARKERS: [&str; 1] = ["low"];

/// Infer a priority from a scenario's tags.
///
/// Matching is a case-insensitive substring test on each tag name, so
/// `@HighRisk` counts as high and `@slow` counts as low. The high check runs
/// first and wins when a tag set matches both.
///
/// # Examples
///
/// ```
/// use feature_csv::model::Tag;
/// use feature_csv::priority::determine_priority;
/// use feature_csv::record::Priority;
///
/// let tags = [Tag::new("@critical"), Tag::new("@low")];
/// assert_eq!(determine_priority(&tags), Priority::High);
/// assert_eq!(determine_priority(&[]), Priority::Medium);
/// ```
#[must_use]
pub fn determine_priority(tags: &[Tag]) -> Priority {
    let names: Vec<String> = tags.iter().map(|tag| tag.name().to_lowercase()).collect();
    let any_contains =
        |markers: &[&str]| names.iter().any(|name| markers.iter().any(|m| name.contains(m)));

    if any_contains(&HIGH_MARKERS) {
        Priority::High
    } else if any_contains(&LOW_MARKERS) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names.iter().map(Tag::new).collect()
    }

    #[rstest]
    #[case::critical(&["@critical"], Priority::High)]
    #[case::high(&["@high"], Priority::High)]
    #[case::low(&["@low"], Priority::Low)]
    #[case::none(&[], Priority::Medium)]
    #[case::unrelated(&["@smoke", "@regression"], Priority::Medium)]
    #[case::high_beats_low(&["@critical", "@low"], Priority::High)]
    #[case::low_then_high(&["@low", "@high"], Priority::High)]
    #[case::case_insensitive(&["@CRITICAL"], Priority::High)]
    #[case::substring_high(&["@highway"], Priority::High)]
    #[case::substring_low(&["@slow"], Priority::Low)]
    fn infers_priority_from_tags(#[case] names: &[&str], #[case] expected: Priority) {
        assert_eq!(determine_priority(&tags(names)), expected);
    }
}
