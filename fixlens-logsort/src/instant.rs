/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Bracketed timestamp extraction from log lines.
//!
//! Log lines carry a stamp of the form `[YYYYMMDD-HH:MM:SS]` or
//! `[YYYYMMDD-HH:MM:SS.mmm]` somewhere in the line. This module finds and
//! parses that stamp into a comparable instant. A line without a parseable
//! stamp maps to the sentinel [`LogInstant::EPOCH`], so ordering stays total
//! over arbitrary text.

use arrayvec::ArrayString;
use chrono::{DateTime, NaiveDateTime, Utc};
use memchr::{memchr, memchr_iter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stamp format with millisecond precision.
const STAMP_FORMAT_MILLIS: &str = "%Y%m%d-%H:%M:%S%.3f";

/// Stamp format with second precision.
const STAMP_FORMAT_SECONDS: &str = "%Y%m%d-%H:%M:%S";

/// Byte length of `YYYYMMDD-HH:MM:SS`.
const STAMP_SECONDS_LEN: usize = 17;

/// Byte length of `YYYYMMDD-HH:MM:SS.mmm`.
const STAMP_MILLIS_LEN: usize = 21;

/// A point in time extracted from a log line.
///
/// Wraps a UTC instant with total ordering. The sentinel value
/// [`LogInstant::EPOCH`] stands in for missing or malformed stamps and
/// compares earlier than any stamp a real log can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct LogInstant(DateTime<Utc>);

impl LogInstant {
    /// Sentinel instant for lines without a parseable stamp.
    pub const EPOCH: Self = Self(DateTime::UNIX_EPOCH);

    /// Returns true if this is the missing-stamp sentinel.
    #[inline]
    #[must_use]
    pub fn is_sentinel(self) -> bool {
        self == Self::EPOCH
    }

    /// Returns the wrapped UTC instant.
    #[inline]
    #[must_use]
    pub const fn datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Parses bracket-interior stamp text.
    ///
    /// Accepts `YYYYMMDD-HH:MM:SS` and `YYYYMMDD-HH:MM:SS.mmm`, with real
    /// calendar validation: month 13 or February 30 fail just like a
    /// structural mismatch does.
    ///
    /// # Arguments
    /// * `text` - The candidate stamp text, brackets excluded
    ///
    /// # Returns
    /// The parsed instant, or `None` if the text is not a valid stamp.
    #[must_use]
    pub fn parse_stamp(text: &str) -> Option<Self> {
        if !looks_like_stamp(text) {
            return None;
        }
        let parsed = NaiveDateTime::parse_from_str(text, STAMP_FORMAT_MILLIS)
            .or_else(|_| NaiveDateTime::parse_from_str(text, STAMP_FORMAT_SECONDS))
            .ok()?;
        Some(Self(parsed.and_utc()))
    }

    /// Scans a line for its first parseable bracketed stamp.
    ///
    /// Every `[` starts a candidate running to the next `]`; the first
    /// candidate that parses wins. A leading `[INFO]` block therefore does
    /// not hide a timestamp further into the line.
    ///
    /// # Arguments
    /// * `line` - The full log line
    ///
    /// # Returns
    /// The first parseable stamp, or `None` if the line has none.
    #[must_use]
    pub fn scan(line: &str) -> Option<Self> {
        let bytes = line.as_bytes();
        for open in memchr_iter(b'[', bytes) {
            let after_open = open + 1;
            let Some(close) = memchr(b']', &bytes[after_open..]) else {
                // No closing bracket remains anywhere in the line.
                return None;
            };
            if let Some(instant) = Self::parse_stamp(&line[after_open..after_open + close]) {
                return Some(instant);
            }
        }
        None
    }

    /// Formats the instant as `YYYYMMDD-HH:MM:SS.mmm`.
    #[must_use]
    pub fn format_millis(self) -> ArrayString<STAMP_MILLIS_LEN> {
        let mut buf = ArrayString::new();
        let _ = std::fmt::write(
            &mut buf,
            format_args!("{}", self.0.format(STAMP_FORMAT_MILLIS)),
        );
        buf
    }
}

impl Default for LogInstant {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl From<DateTime<Utc>> for LogInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for LogInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_millis())
    }
}

/// Structural check applied before calendar parsing.
///
/// A candidate is 17 bytes, or 21 bytes with a `.mmm` suffix, with the
/// separators at fixed offsets and ASCII digits everywhere else.
fn looks_like_stamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != STAMP_SECONDS_LEN && bytes.len() != STAMP_MILLIS_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        8 => b == b'-',
        11 | 14 => b == b':',
        17 => b == b'.',
        _ => b.is_ascii_digit(),
    })
}
