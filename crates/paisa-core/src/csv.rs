//! # CSV Helpers
//!
//! Minimal CSV plumbing shared by the catalog importer and the report
//! exporter. Only the subset of RFC 4180 the two features need: comma
//! splitting that respects double-quoted fields, and field quoting with
//! embedded quotes doubled.

/// Splits one CSV record into fields.
///
/// Commas inside double-quoted fields do not split; a doubled quote inside a
/// quoted field is an escaped quote. Surrounding quotes are removed from the
/// returned fields.
///
/// ## Example
/// ```rust
/// use paisa_core::csv::split_record;
///
/// assert_eq!(split_record(r#""B1","Widget, small",12"#),
///            vec!["B1", "Widget, small", "12"]);
/// ```
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // escaped quote
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Quotes a field for CSV output, doubling embedded quote characters.
///
/// ## Example
/// ```rust
/// use paisa_core::csv::quote_field;
///
/// assert_eq!(quote_field("Plain"), r#""Plain""#);
/// assert_eq!(quote_field(r#"5" Nails"#), r#""5"" Nails""#);
/// ```
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_record() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split_record("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_record(r#""B1","Widget, small","₹12.50""#),
            vec!["B1", "Widget, small", "₹12.50"]
        );
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(split_record(r#""He said ""hi""",2"#), vec![r#"He said "hi""#, "2"]);
    }

    #[test]
    fn test_quote_field_doubles_embedded_quotes() {
        assert_eq!(quote_field("Pen"), "\"Pen\"");
        assert_eq!(quote_field("5\" Nails"), "\"5\"\" Nails\"");
    }
}
