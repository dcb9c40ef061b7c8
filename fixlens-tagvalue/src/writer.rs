/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Line writer for pipe-delimited FIX text.
//!
//! This module provides a builder-style writer that assembles a message line
//! field by field, joining tokens with `|`. It is the round-trip counterpart
//! of the tokenizer: a line written from fields whose tags and values contain
//! no separator characters parses back to the same mapping.

use crate::tokenizer::PIPE;
use fixlens_core::field::FieldRef;
use fixlens_core::message::ParsedMessage;

/// Builder-style writer for one message line.
///
/// Fields are appended in call order; no validation is performed, matching
/// the tokenizer's no-validation policy. Values containing `|` or `=` are
/// written as-is and will tokenize differently on the way back in.
#[derive(Debug, Default)]
pub struct LineWriter {
    /// Accumulated line text.
    buf: String,
}

impl LineWriter {
    /// Creates a new empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Creates a new writer with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends a tag=value token.
    ///
    /// # Arguments
    /// * `tag` - The field tag text
    /// * `value` - The field value text
    #[inline]
    pub fn put_str(&mut self, tag: &str, value: &str) {
        if !self.buf.is_empty() {
            self.buf.push(PIPE as char);
        }
        self.buf.push_str(tag);
        self.buf.push('=');
        self.buf.push_str(value);
    }

    /// Appends a field.
    ///
    /// # Arguments
    /// * `field` - The field to append
    #[inline]
    pub fn put_field(&mut self, field: &FieldRef<'_>) {
        self.put_str(field.tag, field.value);
    }

    /// Appends every field of a parsed message in mapping order.
    ///
    /// # Arguments
    /// * `message` - The message whose fields to append
    pub fn put_message(&mut self, message: &ParsedMessage<'_>) {
        for field in message.iter() {
            self.put_field(field);
        }
    }

    /// Returns the assembled line.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }

    /// Returns the current line length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clears the writer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::parse_line;

    #[test]
    fn test_writer_basic() {
        let mut writer = LineWriter::new();
        writer.put_str("8", "FIX.4.4");
        writer.put_str("35", "D");
        assert_eq!(writer.finish(), "8=FIX.4.4|35=D");
    }

    #[test]
    fn test_writer_single_field_no_separator() {
        let mut writer = LineWriter::new();
        writer.put_str("35", "0");
        assert_eq!(writer.finish(), "35=0");
    }

    #[test]
    fn test_writer_empty_value() {
        let mut writer = LineWriter::new();
        writer.put_str("58", "");
        writer.put_str("35", "D");
        assert_eq!(writer.finish(), "58=|35=D");
    }

    #[test]
    fn test_writer_round_trip() {
        let mut writer = LineWriter::new();
        writer.put_str("35", "D");
        writer.put_str("55", "EURUSD");
        writer.put_str("44", "100.5");

        let line = writer.finish();
        let message = parse_line(&line);
        assert_eq!(message.get("35"), Some("D"));
        assert_eq!(message.get("55"), Some("EURUSD"));
        assert_eq!(message.get("44"), Some("100.5"));
        assert_eq!(message.to_wire(), line);
    }

    #[test]
    fn test_writer_put_message() {
        let message = parse_line("35=D|55=EURUSD");
        let mut writer = LineWriter::with_capacity(32);
        writer.put_message(&message);
        assert_eq!(writer.finish(), "35=D|55=EURUSD");
    }

    #[test]
    fn test_writer_clear() {
        let mut writer = LineWriter::new();
        writer.put_str("35", "D");
        assert!(!writer.is_empty());

        writer.clear();
        assert!(writer.is_empty());
        assert_eq!(writer.len(), 0);
    }
}
