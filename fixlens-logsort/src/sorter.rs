/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # Log Timestamp Sorter
//!
//! Reorders the lines of a log blob chronologically by their bracketed
//! timestamps:
//!
//! - **Total ordering**: Lines without a parseable stamp take the sentinel
//!   epoch instant, so they sort first ascending and last descending instead
//!   of failing the operation.
//! - **Stable**: Lines sharing an instant keep their original relative
//!   order. Logs commonly stamp many lines within one second.
//! - **Content-preserving**: Sorting reorders whole lines; stamp text is
//!   never stripped or rewritten.
//! - **Per-file**: Each file is sorted on its own. Files are never merged
//!   into one stream.

use crate::instant::LogInstant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Sort direction for log reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest lines first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Newest lines first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns the short wire name of this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort-order name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {input}")]
pub struct ParseSortOrderError {
    /// The rejected input text.
    pub input: String,
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") || s.eq_ignore_ascii_case("ascending") {
            Ok(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") || s.eq_ignore_ascii_case("descending") {
            Ok(Self::Descending)
        } else {
            Err(ParseSortOrderError {
                input: s.to_string(),
            })
        }
    }
}

/// One log line decorated with its extracted instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// The line text as received.
    pub raw: &'a str,
    /// The extracted instant, or the sentinel if none parsed.
    pub instant: LogInstant,
}

impl<'a> LogLine<'a> {
    /// Decorates a raw line with its extracted instant.
    ///
    /// # Arguments
    /// * `raw` - The line text
    #[must_use]
    pub fn decorate(raw: &'a str) -> Self {
        Self {
            raw,
            instant: LogInstant::scan(raw).unwrap_or(LogInstant::EPOCH),
        }
    }

    /// Returns true if the line carried a parseable stamp.
    #[must_use]
    pub fn has_stamp(&self) -> bool {
        !self.instant.is_sentinel()
    }
}

/// A file's reordered content paired with its original name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedFile {
    /// The original filename.
    pub name: String,
    /// The newline-joined reordered content.
    pub content: String,
}

/// Sorts a log blob's lines chronologically.
///
/// Lines are split on newline and empty lines dropped; the remainder is
/// stably sorted by extracted instant and re-joined with `\n`. Malformed or
/// missing stamps degrade to the sentinel instead of failing, so one bad
/// line never blocks the rest of the file.
///
/// # Arguments
/// * `blob` - The file content
/// * `order` - The sort direction
///
/// # Returns
/// The reordered content. An empty or all-blank blob yields an empty string.
#[must_use]
pub fn sort_lines(blob: &str, order: SortOrder) -> String {
    let mut lines: Vec<LogLine<'_>> = blob
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(LogLine::decorate)
        .collect();

    let missing = lines.iter().filter(|line| !line.has_stamp()).count();

    // Stable in both directions: descending reverses the comparator, not
    // the sorted output, so ties keep their original relative order.
    match order {
        SortOrder::Ascending => lines.sort_by(|x, y| x.instant.cmp(&y.instant)),
        SortOrder::Descending => lines.sort_by(|x, y| y.instant.cmp(&x.instant)),
    }

    debug!(
        total = lines.len(),
        missing,
        order = %order,
        "sorted log lines"
    );

    let mut out = String::with_capacity(blob.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.raw);
    }
    out
}

/// Sorts one named file's content.
///
/// # Arguments
/// * `name` - The original filename, carried through for display or download
/// * `content` - The file content
/// * `order` - The sort direction
#[must_use]
pub fn sort_file(name: impl Into<String>, content: &str, order: SortOrder) -> SortedFile {
    SortedFile {
        name: name.into(),
        content: sort_lines(content, order),
    }
}

/// Sorts a batch of files, each within itself.
///
/// # Arguments
/// * `files` - `(name, content)` pairs
/// * `order` - The sort direction applied to every file
///
/// # Returns
/// One [`SortedFile`] per input, in input order.
#[must_use]
pub fn sort_files<'a, I>(files: I, order: SortOrder) -> Vec<SortedFile>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    files
        .into_iter()
        .map(|(name, content)| sort_file(name, content, order))
        .collect()
}
