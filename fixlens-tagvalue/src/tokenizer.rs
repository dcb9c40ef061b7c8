/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Zero-copy tokenizer for pipe-delimited FIX text.
//!
//! This module splits one line of wire-format text into tag=value fields
//! without allocating for field content. Malformed tokens (no `=` separator,
//! or an empty tag) are data, not errors: the tokenizer drops them and keeps
//! going, so any input, including empty or garbage-only text, tokenizes to a
//! (possibly empty) mapping.
//!
//! The separator is `|`, the human-readable stand-in for the protocol's SOH
//! delimiter; raw SOH bytes are accepted as equivalent so captures pasted
//! straight off the wire tokenize identically.

use fixlens_core::field::FieldRef;
use fixlens_core::message::ParsedMessage;
use memchr::{memchr, memchr2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Human-readable field separator used in dashboard text.
pub const PIPE: u8 = b'|';

/// SOH (Start of Header) delimiter used on the real FIX wire.
pub const SOH: u8 = 0x01;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Zero-copy tokenizer over one line of wire text.
///
/// The tokenizer walks the line separator by separator, yielding fields as
/// references into the original text. Tokens that do not form a field are
/// skipped silently; [`parse_line_with_diagnostics`] reports them instead.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    /// Input line.
    input: &'a str,
    /// Current position in the line.
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given line.
    ///
    /// # Arguments
    /// * `input` - The line of wire text to tokenize
    #[inline]
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Returns the next well-formed field, skipping malformed tokens.
    ///
    /// # Returns
    /// The next field, or `None` once the line is exhausted.
    #[inline]
    pub fn next_field(&mut self) -> Option<FieldRef<'a>> {
        while let Some(token) = self.next_token() {
            if let Some(field) = split_field(token) {
                return Some(field);
            }
        }
        None
    }

    /// Returns the next raw token between separators, which may be empty or
    /// malformed.
    fn next_token(&mut self) -> Option<&'a str> {
        if self.offset >= self.input.len() {
            return None;
        }

        let remaining = &self.input.as_bytes()[self.offset..];
        match memchr2(PIPE, SOH, remaining) {
            Some(pos) => {
                let token = &self.input[self.offset..self.offset + pos];
                self.offset += pos + 1;
                Some(token)
            }
            None => {
                let token = &self.input[self.offset..];
                self.offset = self.input.len();
                Some(token)
            }
        }
    }

    /// Returns the current offset in the line.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the remaining unscanned text.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Returns true if the line has been fully consumed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Resets the tokenizer to the beginning of the line.
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = FieldRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field()
    }
}

/// Splits one token on its first `=` into a field.
///
/// # Arguments
/// * `token` - The raw token text
///
/// # Returns
/// The field, or `None` if the token has no `=` or an empty tag. All `=`
/// characters after the first belong to the value.
#[inline]
fn split_field(token: &str) -> Option<FieldRef<'_>> {
    let eq = memchr(EQUALS, token.as_bytes())?;
    if eq == 0 {
        return None;
    }
    Some(FieldRef::new(&token[..eq], &token[eq + 1..]))
}

/// Tokenizes one line into an ordered tag→value mapping.
///
/// Tokens are processed left-to-right; a repeated tag overwrites the earlier
/// entry (last write wins). Malformed tokens are dropped silently. This never
/// fails: empty or garbage-only input yields an empty mapping.
///
/// # Arguments
/// * `line` - The line of wire text to tokenize
#[must_use]
pub fn parse_line(line: &str) -> ParsedMessage<'_> {
    let mut message = ParsedMessage::new();
    for field in Tokenizer::new(line) {
        message.insert(field);
    }
    message
}

/// Why a token was excluded from the parsed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The token contains no `=` separator.
    #[error("token has no '=' separator")]
    MissingEquals,

    /// The token starts with `=`, leaving an empty tag.
    #[error("token has an empty tag")]
    EmptyTag,
}

/// A token the tokenizer dropped, with the reason.
///
/// Produced only by [`parse_line_with_diagnostics`]; the plain parse drops
/// malformed tokens without reporting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedToken {
    /// The raw token text as it appeared between separators.
    pub text: String,
    /// Why the token was dropped.
    pub reason: SkipReason,
}

/// Tokenizes one line, also reporting every dropped token.
///
/// The returned mapping is identical to [`parse_line`]'s; the second element
/// lists the tokens that were excluded, for surfaces that highlight malformed
/// fragments. Empty tokens (consecutive or trailing separators) are neither
/// fields nor fragments and are not reported.
///
/// # Arguments
/// * `line` - The line of wire text to tokenize
#[must_use]
pub fn parse_line_with_diagnostics(line: &str) -> (ParsedMessage<'_>, Vec<SkippedToken>) {
    let mut message = ParsedMessage::new();
    let mut skipped = Vec::new();
    let mut tokenizer = Tokenizer::new(line);

    while let Some(token) = tokenizer.next_token() {
        if token.is_empty() {
            continue;
        }
        match split_field(token) {
            Some(field) => message.insert(field),
            None => {
                let reason = if memchr(EQUALS, token.as_bytes()).is_none() {
                    SkipReason::MissingEquals
                } else {
                    SkipReason::EmptyTag
                };
                skipped.push(SkippedToken {
                    text: token.to_string(),
                    reason,
                });
            }
        }
    }

    (message, skipped)
}
