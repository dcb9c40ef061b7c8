/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Parsed message type for one line of FIX wire text.
//!
//! This module provides [`ParsedMessage`], an ordered tag→value mapping built
//! by the tokenizer and consumed by the diff engine. The mapping preserves
//! wire order, which the diff engine relies on when it iterates the tag union
//! of two messages.

use crate::field::FieldRef;
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for per-message field storage.
///
/// Typical dashboard inputs carry a header plus a handful of body fields;
/// anything larger spills to the heap.
const INLINE_FIELDS: usize = 16;

/// Ordered tag→value mapping for one message line.
///
/// Created fresh per parse call; borrows the input line; not mutated after
/// construction by its producers. Tags are unique: inserting a tag that is
/// already present replaces the earlier entry, and the surviving entry takes
/// the position of the later occurrence (first-appearance order is not
/// preserved across an overwrite).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Fields in mapping order.
    fields: SmallVec<[FieldRef<'a>; INLINE_FIELDS]>,
}

impl<'a> ParsedMessage<'a> {
    /// Creates an empty message.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    /// Inserts a field, overwriting any earlier entry with the same tag.
    ///
    /// On overwrite the earlier entry is removed and the new one appended,
    /// so the tag moves to the position of its later occurrence.
    ///
    /// # Arguments
    /// * `field` - The field to insert
    pub fn insert(&mut self, field: FieldRef<'a>) {
        if let Some(pos) = self.fields.iter().position(|f| f.tag == field.tag) {
            self.fields.remove(pos);
        }
        self.fields.push(field);
    }

    /// Gets a field by tag.
    ///
    /// # Arguments
    /// * `tag` - The field tag text
    ///
    /// # Returns
    /// The field with the given tag, or `None` if not present.
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&FieldRef<'a>> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Gets a field value by tag.
    ///
    /// # Arguments
    /// * `tag` - The field tag text
    ///
    /// # Returns
    /// The value of the field, or `None` if the tag is not present.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&'a str> {
        self.get_field(tag).map(|f| f.value)
    }

    /// Returns true if the tag is present.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.get_field(tag).is_some()
    }

    /// Returns an iterator over all fields in mapping order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FieldRef<'a>> {
        self.fields.iter()
    }

    /// Returns an iterator over all tags in mapping order.
    #[inline]
    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().map(|f| f.tag)
    }

    /// Returns the number of fields in the mapping.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the mapping has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-joins the mapping into pipe-delimited wire text.
    ///
    /// For fields whose tags and values contain neither `|` nor `=`, parsing
    /// the returned line reconstructs this exact mapping.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl<'a> FromIterator<FieldRef<'a>> for ParsedMessage<'a> {
    fn from_iter<I: IntoIterator<Item = FieldRef<'a>>>(iter: I) -> Self {
        let mut message = Self::new();
        for field in iter {
            message.insert(field);
        }
        message
    }
}

impl fmt::Display for ParsedMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
