//! Writers for test-case records.
//!
//! The CSV writer produces a header row followed by one row per record. Every
//! field is quoted so multi-line steps survive import unchanged.

use std::fmt::{self, Write};

use crate::record::{COLUMNS, TestCaseRecord};

const DELIMITER: char = ',';
const QUOTE: char = '"';
const RECORD_TERMINATOR: &str = "\r\n";

/// Render records as fully quoted, comma-delimited CSV.
///
/// # Examples
/// ```
/// use feature_csv::export;
///
/// let mut output = String::new();
/// export::write_csv(&mut output, &[]).unwrap();
/// assert_eq!(
///     output,
///     "\"Name\",\"Description\",\"Steps\",\"Expected Result\",\"Priority\",\"Status\",\"Labels\"\r\n",
/// );
/// ```
///
/// # Errors
/// Returns an error if writing to the provided formatter fails.
pub fn write_csv<W: Write>(writer: &mut W, records: &[TestCaseRecord]) -> fmt::Result {
    write_row(writer, COLUMNS)?;
    for record in records {
        write_row(writer, record.fields())?;
    }
    Ok(())
}

/// Render records as a pretty-printed JSON array keyed by column name.
///
/// # Errors
/// Returns an error if serialisation fails.
pub fn write_json<W: std::io::Write>(
    writer: W,
    records: &[TestCaseRecord],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, records)
}

fn write_row<W: Write>(writer: &mut W, fields: [&str; 7]) -> fmt::Result {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            writer.write_char(DELIMITER)?;
        }
        write_quoted(writer, field)?;
    }
    writer.write_str(RECORD_TERMINATOR)
}

fn write_quoted<W: Write>(writer: &mut W, value: &str) -> fmt::Result {
    writer.write_char(QUOTE)?;
    for character in value.chars() {
        if character == QUOTE {
            writer.write_char(QUOTE)?;
        }
        writer.write_char(character)?;
    }
    writer.write_char(QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Priority, Status};

    fn record() -> TestCaseRecord {
        TestCaseRecord {
            name: "Login - \"quoted\" name".into(),
            description: String::new(),
            steps: "1. Given a, b\n2. Then ok".into(),
            expected_result: "2. ok".into(),
            priority: Priority::Low,
            status: Status::Draft,
            labels: "low, ui".into(),
        }
    }

    #[test]
    fn quotes_every_field_and_doubles_embedded_quotes() {
        let mut output = String::new();
        write_csv(&mut output, &[record()]).unwrap_or_else(|err| panic!("{err}"));
        let expected = concat!(
            "\"Name\",\"Description\",\"Steps\",\"Expected Result\",\"Priority\",\"Status\",\"Labels\"\r\n",
            "\"Login - \"\"quoted\"\" name\",\"\",\"1. Given a, b\n2. Then ok\",\"2. ok\",\"Low\",\"Draft\",\"low, ui\"\r\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn json_uses_column_names_as_keys() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &[record()]).unwrap_or_else(|err| panic!("{err}"));
        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).unwrap_or_else(|err| panic!("{err}"));
        let entry = parsed
            .as_array()
            .and_then(|array| array.first())
            .unwrap_or_else(|| panic!("missing entry"));
        assert_eq!(
            entry.get("Expected Result"),
            Some(&serde_json::Value::String("2. ok".into()))
        );
        assert_eq!(
            entry.get("Priority"),
            Some(&serde_json::Value::String("Low".into()))
        );
        assert_eq!(
            entry.get("Status"),
            Some(&serde_json::Value::String("Draft".into()))
        );
    }
}
