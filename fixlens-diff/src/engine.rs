/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # Field-Level Diff Engine
//!
//! Compares two pipe-delimited lines field by field and classifies every tag
//! in their union:
//!
//! - **Union order**: tags from the left line in their mapping order, then
//!   tags only the right line carries, in right-line order.
//! - **Value change encoding**: a tag present on both sides with different
//!   values becomes a removal on the left and an addition on the right.
//! - **Tag-only mode**: value differences are suppressed, with both sides
//!   classified unchanged and each showing its own value, while presence
//!   differences still surface as additions and removals.
//! - **Positional set comparison**: multi-line blobs are compared line N to
//!   line N, with the shorter side padded by empty lines. Lines are never
//!   reordered or fuzzy-matched.

use crate::fragment::{DiffFragment, DiffKind};
use fixlens_core::ParsedMessage;
use fixlens_tagvalue::parse_line;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field-level diff engine for pipe-delimited lines.
///
/// The engine is a small configuration value; construction is free and a
/// single instance can serve any number of comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    /// When set, value differences are reported as unchanged.
    tag_only: bool,
}

impl DiffEngine {
    /// Creates an engine with value comparison enabled.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { tag_only: false }
    }

    /// Sets tag-only mode.
    ///
    /// # Arguments
    /// * `enabled` - When true, only tag presence is compared
    #[inline]
    #[must_use]
    pub const fn with_tag_only(mut self, enabled: bool) -> Self {
        self.tag_only = enabled;
        self
    }

    /// Returns true if the engine compares tag presence only.
    #[inline]
    #[must_use]
    pub const fn tag_only(&self) -> bool {
        self.tag_only
    }

    /// Diffs two raw lines.
    ///
    /// Each line is parsed with the permissive tokenizer before comparison,
    /// so malformed tokens never fail a diff; they are simply absent from it.
    ///
    /// # Arguments
    /// * `line_a` - The left-side line
    /// * `line_b` - The right-side line
    ///
    /// # Returns
    /// A pair of fragment sequences, one per side, in union order.
    #[must_use]
    pub fn diff_line(
        &self,
        line_a: &str,
        line_b: &str,
    ) -> (Vec<DiffFragment>, Vec<DiffFragment>) {
        let message_a = parse_line(line_a);
        let message_b = parse_line(line_b);
        self.diff_messages(&message_a, &message_b)
    }

    /// Diffs two parsed messages.
    ///
    /// Walks the left message in mapping order, classifying each tag against
    /// the right side, then appends right-only tags in right mapping order.
    ///
    /// # Arguments
    /// * `a` - The left-side message
    /// * `b` - The right-side message
    ///
    /// # Returns
    /// A pair of fragment sequences, one per side, in union order.
    #[must_use]
    pub fn diff_messages(
        &self,
        a: &ParsedMessage<'_>,
        b: &ParsedMessage<'_>,
    ) -> (Vec<DiffFragment>, Vec<DiffFragment>) {
        let mut fragments_a = Vec::with_capacity(a.len());
        let mut fragments_b = Vec::with_capacity(b.len());

        for field_a in a.iter() {
            match b.get(field_a.tag) {
                Some(value_b) if field_a.value == value_b || self.tag_only => {
                    // Shared tag, agreed or suppressed: each side keeps its
                    // own value text.
                    fragments_a.push(DiffFragment::new(field_a.tag, field_a.value, DiffKind::Same));
                    fragments_b.push(DiffFragment::new(field_a.tag, value_b, DiffKind::Same));
                }
                Some(value_b) => {
                    fragments_a.push(DiffFragment::new(
                        field_a.tag,
                        field_a.value,
                        DiffKind::Removed,
                    ));
                    fragments_b.push(DiffFragment::new(field_a.tag, value_b, DiffKind::Added));
                }
                None => {
                    fragments_a.push(DiffFragment::new(
                        field_a.tag,
                        field_a.value,
                        DiffKind::Removed,
                    ));
                }
            }
        }

        for field_b in b.iter() {
            if !a.contains(field_b.tag) {
                fragments_b.push(DiffFragment::new(
                    field_b.tag,
                    field_b.value,
                    DiffKind::Added,
                ));
            }
        }

        (fragments_a, fragments_b)
    }

    /// Compares two multi-line message sets positionally.
    ///
    /// Both blobs are split into non-empty lines; the shorter side is padded
    /// with empty lines up to the longer side's count, and line N of one set
    /// is always diffed against line N of the other.
    ///
    /// # Arguments
    /// * `blob_a` - The left-side message set
    /// * `blob_b` - The right-side message set
    ///
    /// # Returns
    /// One [`ComparisonRow`] per line pair, in input order.
    #[must_use]
    pub fn compare_sets(&self, blob_a: &str, blob_b: &str) -> Vec<ComparisonRow> {
        let lines_a = non_empty_lines(blob_a);
        let lines_b = non_empty_lines(blob_b);
        let rows = lines_a.len().max(lines_b.len());

        let mut out = Vec::with_capacity(rows);
        for index in 0..rows {
            let raw_a = lines_a.get(index).copied().unwrap_or("");
            let raw_b = lines_b.get(index).copied().unwrap_or("");
            let (fragments_a, fragments_b) = self.diff_line(raw_a, raw_b);
            out.push(ComparisonRow {
                line_number: index + 1,
                raw_a: raw_a.to_string(),
                raw_b: raw_b.to_string(),
                fragments_a,
                fragments_b,
            });
        }

        debug!(
            rows,
            left = lines_a.len(),
            right = lines_b.len(),
            "compared message sets"
        );
        out
    }
}

/// One row of a set comparison: a line pair and its diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Position of the pair, starting at 1.
    pub line_number: usize,
    /// The left-side line as received, empty if padded.
    pub raw_a: String,
    /// The right-side line as received, empty if padded.
    pub raw_b: String,
    /// Left-side fragments in union order.
    pub fragments_a: Vec<DiffFragment>,
    /// Right-side fragments in union order.
    pub fragments_b: Vec<DiffFragment>,
}

impl ComparisonRow {
    /// Returns true if every fragment on both sides is unchanged.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.fragments_a.iter().all(|f| f.kind.is_same())
            && self.fragments_b.iter().all(|f| f.kind.is_same())
    }
}

/// Splits a blob into its non-empty lines.
///
/// Lines containing only whitespace count as empty and are dropped.
fn non_empty_lines(blob: &str) -> Vec<&str> {
    blob.lines().filter(|line| !line.trim().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(fragments: &[DiffFragment]) -> Vec<DiffKind> {
        fragments.iter().map(|f| f.kind).collect()
    }

    fn tags(fragments: &[DiffFragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.tag.as_str()).collect()
    }

    #[test]
    fn test_identical_lines_all_same() {
        let engine = DiffEngine::new();
        let line = "35=D|55=EURUSD|44=100.5";
        let (a, b) = engine.diff_line(line, line);

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert!(a.iter().all(|f| f.kind == DiffKind::Same));
        assert!(b.iter().all(|f| f.kind == DiffKind::Same));
    }

    #[test]
    fn test_value_change_is_removed_plus_added() {
        let engine = DiffEngine::new();
        let (a, b) = engine.diff_line("1=X|2=Y", "1=X|2=Z");

        assert_eq!(kinds(&a), vec![DiffKind::Same, DiffKind::Removed]);
        assert_eq!(kinds(&b), vec![DiffKind::Same, DiffKind::Added]);
        assert_eq!(a[1].value, "Y");
        assert_eq!(b[1].value, "Z");
    }

    #[test]
    fn test_tag_only_suppresses_value_change() {
        let engine = DiffEngine::new().with_tag_only(true);
        let (a, b) = engine.diff_line("1=X|2=Y", "1=X|2=Z");

        assert!(a.iter().all(|f| f.kind == DiffKind::Same));
        assert!(b.iter().all(|f| f.kind == DiffKind::Same));
        // Each side still shows its own value.
        assert_eq!(a[1].value, "Y");
        assert_eq!(b[1].value, "Z");
    }

    #[test]
    fn test_tag_only_keeps_presence_diffs() {
        let engine = DiffEngine::new().with_tag_only(true);
        let (a, b) = engine.diff_line("1=X|3=Q", "1=X");

        assert_eq!(kinds(&a), vec![DiffKind::Same, DiffKind::Removed]);
        assert_eq!(kinds(&b), vec![DiffKind::Same]);
    }

    #[test]
    fn test_disjoint_lines() {
        let engine = DiffEngine::new();
        let (a, b) = engine.diff_line("1=X", "2=Y");

        assert_eq!(kinds(&a), vec![DiffKind::Removed]);
        assert_eq!(kinds(&b), vec![DiffKind::Added]);
        assert_eq!(a[0].text(), "1=X");
        assert_eq!(b[0].text(), "2=Y");
    }

    #[test]
    fn test_union_order() {
        let engine = DiffEngine::new();
        // Left order first, then right-only tags in right order.
        let (a, b) = engine.diff_line("8=FIX.4.4|35=D|55=EURUSD", "35=D|49=SENDER|8=FIX.4.4");

        assert_eq!(tags(&a), vec!["8", "35", "55"]);
        assert_eq!(tags(&b), vec!["8", "35", "49"]);
    }

    #[test]
    fn test_empty_lines_diff_to_empty() {
        let engine = DiffEngine::new();
        let (a, b) = engine.diff_line("", "");
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn test_malformed_tokens_do_not_fail_diff() {
        let engine = DiffEngine::new();
        let (a, b) = engine.diff_line("not a fix line", "35=D");
        assert!(a.is_empty());
        assert_eq!(kinds(&b), vec![DiffKind::Added]);
    }

    #[test]
    fn test_compare_sets_pads_shorter_side() {
        let engine = DiffEngine::new();
        let rows = engine.compare_sets("35=D\n35=8", "35=D");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line_number, 1);
        assert_eq!(rows[1].line_number, 2);
        assert_eq!(rows[1].raw_a, "35=8");
        assert_eq!(rows[1].raw_b, "");
        assert_eq!(kinds(&rows[1].fragments_a), vec![DiffKind::Removed]);
        assert!(rows[1].fragments_b.is_empty());
    }

    #[test]
    fn test_compare_sets_skips_blank_lines() {
        let engine = DiffEngine::new();
        let rows = engine.compare_sets("35=D\n\n  \n35=8", "35=D\n35=8");

        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_identical());
        assert!(rows[1].is_identical());
    }

    #[test]
    fn test_compare_sets_is_positional() {
        let engine = DiffEngine::new();
        // Same lines in swapped order do not match up.
        let rows = engine.compare_sets("35=D\n35=8", "35=8\n35=D");

        assert!(!rows[0].is_identical());
        assert!(!rows[1].is_identical());
    }

    #[test]
    fn test_compare_sets_empty_blobs() {
        let engine = DiffEngine::new();
        assert!(engine.compare_sets("", "").is_empty());
        assert!(engine.compare_sets("\n\n", "  \n").is_empty());
    }

    #[test]
    fn test_row_is_identical() {
        let engine = DiffEngine::new();
        let rows = engine.compare_sets("1=X", "1=Y");
        assert!(!rows[0].is_identical());

        let rows = engine.compare_sets("1=X", "1=X");
        assert!(rows[0].is_identical());
    }
}
