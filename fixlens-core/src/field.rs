/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Field types for pipe-delimited FIX text.
//!
//! This module provides [`FieldRef`], a zero-copy reference to one tag=value
//! pair within a message line. Tags are kept as opaque text: numeric tags are
//! the convention on the wire, but nothing here imposes numeric validation.
//! Interpretation belongs to the dictionary layer, never to the tokenizer.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Zero-copy reference to a field within a message line.
///
/// This struct holds references into the original line, avoiding allocation
/// during tokenization. The value may be empty and may itself contain `=`
/// characters; only the first `=` of the source token separates tag from
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    /// The field tag, as it appeared in the wire text.
    pub tag: &'a str,
    /// The field value (everything after the first `=`).
    pub value: &'a str,
}

impl<'a> FieldRef<'a> {
    /// Creates a new field reference.
    ///
    /// # Arguments
    /// * `tag` - The field tag text
    /// * `value` - The field value text
    #[inline]
    #[must_use]
    pub const fn new(tag: &'a str, value: &'a str) -> Self {
        Self { tag, value }
    }

    /// Parses the value as the specified type.
    ///
    /// # Returns
    /// The parsed value, or `None` if the value does not parse. Malformed
    /// values are data here, not errors.
    #[must_use]
    pub fn parse<T: FromStr>(&self) -> Option<T> {
        self.value.parse().ok()
    }

    /// Returns the value as a u64.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.parse()
    }

    /// Returns the value as an i64.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.parse()
    }

    /// Returns the value as a Decimal (prices, quantities).
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.parse()
    }

    /// Returns the value as a bool (FIX uses 'Y'/'N').
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            "Y" => Some(true),
            "N" => Some(false),
            _ => None,
        }
    }

    /// Returns the value as a single ASCII character.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Some(c),
            _ => None,
        }
    }

    /// Returns the length of the value in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ref_display() {
        let field = FieldRef::new("35", "D");
        assert_eq!(field.to_string(), "35=D");
    }

    #[test]
    fn test_field_ref_empty_value() {
        let field = FieldRef::new("58", "");
        assert!(field.is_empty());
        assert_eq!(field.len(), 0);
        assert_eq!(field.to_string(), "58=");
    }

    #[test]
    fn test_field_ref_as_u64() {
        let field = FieldRef::new("34", "12345");
        assert_eq!(field.as_u64(), Some(12345));
        assert_eq!(FieldRef::new("34", "not-a-number").as_u64(), None);
    }

    #[test]
    fn test_field_ref_as_decimal() {
        let field = FieldRef::new("44", "100.5");
        assert_eq!(field.as_decimal(), Some(Decimal::new(1005, 1)));
    }

    #[test]
    fn test_field_ref_as_bool() {
        assert_eq!(FieldRef::new("141", "Y").as_bool(), Some(true));
        assert_eq!(FieldRef::new("141", "N").as_bool(), Some(false));
        assert_eq!(FieldRef::new("141", "yes").as_bool(), None);
    }

    #[test]
    fn test_field_ref_as_char() {
        assert_eq!(FieldRef::new("54", "1").as_char(), Some('1'));
        assert_eq!(FieldRef::new("54", "12").as_char(), None);
        assert_eq!(FieldRef::new("54", "").as_char(), None);
    }

    #[test]
    fn test_field_ref_opaque_tag() {
        // Tags are text; nothing requires them to be numeric.
        let field = FieldRef::new("CustomTag", "value");
        assert_eq!(field.tag, "CustomTag");
        assert_eq!(field.to_string(), "CustomTag=value");
    }

    #[test]
    fn test_field_ref_value_with_equals() {
        let field = FieldRef::new("58", "a=b=c");
        assert_eq!(field.value, "a=b=c");
        assert_eq!(field.to_string(), "58=a=b=c");
    }
}
