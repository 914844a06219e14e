//! Field quoting and record splitting

use std::iter::Peekable;
use std::mem;
use std::str::Chars;

use crate::DELIMITER;

/// Quote a field if it contains the delimiter, a quote or a line break
///
/// ```
/// assert_eq!(system_csv::record::escape_field("plain"), "plain");
/// assert_eq!(system_csv::record::escape_field("a;b"), "\"a;b\"");
/// assert_eq!(system_csv::record::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_field(field: &str) -> String {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Join fields into one line, quoting where needed
pub fn join_fields<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Split text into records of fields
///
/// Quoted fields may contain delimiters, doubled quotes and line breaks. Both
/// `\n` and `\r\n` end a record. Empty lines produce no record.
pub fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut reader = RecordReader {
        chars: text.chars().peekable(),
    };
    let mut records = Vec::new();
    while let Some(record) = reader.next_record() {
        if let Some(record) = record {
            records.push(record);
        }
    }
    records
}

struct RecordReader<'a> {
    chars: Peekable<Chars<'a>>,
}

impl RecordReader<'_> {
    /// `None` at end of input, `Some(None)` for an empty line
    fn next_record(&mut self) -> Option<Option<Vec<String>>> {
        self.chars.peek()?;

        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut empty = true;

        while let Some(c) = self.chars.next() {
            if in_quotes {
                if c == '"' {
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
                continue;
            }

            match c {
                '"' if field.is_empty() => {
                    in_quotes = true;
                    empty = false;
                }
                '\r' if self.chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => break,
                c if c == DELIMITER => {
                    fields.push(mem::take(&mut field));
                    empty = false;
                }
                c => {
                    field.push(c);
                    empty = false;
                }
            }
        }

        if empty {
            return Some(None);
        }
        fields.push(field);
        Some(Some(fields))
    }
}
