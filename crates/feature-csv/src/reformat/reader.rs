//! Minimal quoted-CSV reader for exported test-case files.

/// Split CSV text into records of unquoted fields.
///
/// A double quote toggles quoting and `""` inside a quoted field yields a
/// literal quote. Outside quotes a comma ends a field and `\r\n`, `\r`, or
/// `\n` ends a record, so quoted fields may span lines. A blank line yields a
/// record with one empty field. At end of input an empty final field is
/// dropped.
///
/// # Examples
///
/// ```
/// use feature_csv::reformat::read_csv;
///
/// let records = read_csv("a,\"b, \"\"c\"\"\"\r\n\"multi\nline\",d");
/// assert_eq!(
///     records,
///     vec![
///         vec!["a".to_string(), "b, \"c\"".to_string()],
///         vec!["multi\nline".to_string(), "d".to_string()],
///     ]
/// );
/// ```
#[must_use]
pub fn read_csv(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut chars = text.chars().peekable();

    while chars.peek().is_some() {
        let mut record = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut terminated = false;

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => record.push(std::mem::take(&mut field)),
                '\r' | '\n' if !in_quotes => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    record.push(std::mem::take(&mut field));
                    terminated = true;
                    break;
                }
                other => field.push(other),
            }
        }

        if !terminated && !field.is_empty() {
            record.push(field);
        }
        if !record.is_empty() {
            records.push(record);
        }
    }

    records
}
