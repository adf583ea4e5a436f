//! CSV → CourseGraph
//!
//! Input shape: one header line (always discarded), then `prereq,course[,...]`
//! rows. Rows that are blank or have fewer than two fields are skipped.
//!
//! Records end at `\r\n`, `\n`, a bare `\r`, U+0085, U+2028 or U+2029.
//! Bytes that are not UTF-8 are replaced, so one bad byte costs at most the
//! characters it stood for, never the rest of the file.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};

use super::registry::CourseGraph;

/// Split a row into `(prereq, course)`, or `None` if it is not an edge row.
///
/// Trailing empty fields do not count toward the two required fields,
/// so `A,` is skipped while `A, ` yields an empty course name.
pub fn parse_record(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    match fields.as_slice() {
        [prereq, course, ..] => Some((prereq.trim(), course.trim())),
        _ => None,
    }
}

fn is_record_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Split text into records; `\r\n` counts as one break.
pub fn split_records(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(is_record_break) {
            Some(i) => {
                let tail = &current[i..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = Some(&tail[width..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

impl CourseGraph {
    /// Build from raw records; the first record is a header and is dropped.
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        let mut accepted = 0usize;
        let mut skipped = 0usize;

        for record in records.into_iter().skip(1) {
            match parse_record(record.as_ref()) {
                Some((prereq, course)) => {
                    graph.add_edge(prereq, course);
                    accepted += 1;
                }
                None => skipped += 1,
            }
        }

        debug!(
            accepted,
            skipped,
            courses = graph.len(),
            "built course graph"
        );
        graph
    }

    /// Build from CSV text
    pub fn from_csv_str(text: &str) -> Self {
        Self::from_records(split_records(text))
    }

    /// Build from any reader. `path` is only used for error reporting.
    pub fn from_reader<R: Read>(mut reader: R, path: &Path) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| GraphError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            warn!(path = %path.display(), "input is not valid UTF-8, invalid bytes replaced");
        }
        Ok(Self::from_csv_str(&text))
    }

    /// Open and parse a CSV file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }
}
