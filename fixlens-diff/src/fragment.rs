/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Diff fragments and their classifications.
//!
//! A diff result is two ordered sequences of fragments, one per input side,
//! aligned conceptually by tag rather than by position. Each fragment carries
//! the tag, the value shown on its side, and a classification.
//!
//! The engine emits only `Same`, `Added`, and `Removed`: a changed value is
//! modeled as a removal on one side paired with an addition on the other.
//! `ChangedOld` and `ChangedNew` exist for renderers; [`annotate_changes`]
//! relabels such pairs so a value change can be displayed distinctly from a
//! presence change.

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one diff fragment.
///
/// Each variant is valued at its one-byte rendering marker, the prefix a
/// plain-text report writes in front of the `tag=value` pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
pub enum DiffKind {
    /// Tag present on both sides with the agreed value.
    Same = b'=',
    /// Tag present only on the right side, or carrying its new value.
    Added = b'+',
    /// Tag present only on the left side, or carrying its old value.
    Removed = b'-',
    /// Old value of a changed field (relabeled from `Removed`).
    ChangedOld = b'<',
    /// New value of a changed field (relabeled from `Added`).
    ChangedNew = b'>',
}

impl DiffKind {
    /// Creates a DiffKind from its one-byte marker.
    ///
    /// # Arguments
    /// * `c` - The marker character
    ///
    /// # Returns
    /// `Some(DiffKind)` if the character is a known marker, `None` otherwise.
    #[must_use]
    pub const fn from_marker(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Same),
            '+' => Some(Self::Added),
            '-' => Some(Self::Removed),
            '<' => Some(Self::ChangedOld),
            '>' => Some(Self::ChangedNew),
            _ => None,
        }
    }

    /// Returns the one-byte rendering marker for this classification.
    #[must_use]
    pub const fn marker(self) -> char {
        self as u8 as char
    }

    /// Returns true if the fragment agrees on both sides.
    #[must_use]
    pub const fn is_same(self) -> bool {
        matches!(self, Self::Same)
    }

    /// Returns true if this marks either half of a relabeled value change.
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::ChangedOld | Self::ChangedNew)
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One rendering unit of a diff: a classified `tag=value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFragment {
    /// The field tag.
    pub tag: String,
    /// The value displayed on this fragment's side.
    pub value: String,
    /// The classification of this fragment.
    pub kind: DiffKind,
}

impl DiffFragment {
    /// Creates a new fragment.
    ///
    /// # Arguments
    /// * `tag` - The field tag
    /// * `value` - The value shown on this side
    /// * `kind` - The classification
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>, kind: DiffKind) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
            kind,
        }
    }

    /// Returns the `tag=value` display text of this fragment.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}={}", self.tag, self.value)
    }
}

impl fmt::Display for DiffFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

/// Relabels removal/addition pairs of the same tag as a value change.
///
/// Wherever side A holds a `Removed` fragment and side B an `Added` fragment
/// for the same tag (the engine's encoding of a changed value), the copies
/// returned here carry `ChangedOld` and `ChangedNew` instead. Fragments whose
/// tag exists on only one side keep `Removed`/`Added`. The engine output
/// itself is never modified; this is an opt-in pass for renderers.
///
/// # Arguments
/// * `fragments_a` - Left-side fragments as emitted by the engine
/// * `fragments_b` - Right-side fragments as emitted by the engine
///
/// # Returns
/// Relabeled copies of both sequences, in their original order.
#[must_use]
pub fn annotate_changes(
    fragments_a: &[DiffFragment],
    fragments_b: &[DiffFragment],
) -> (Vec<DiffFragment>, Vec<DiffFragment>) {
    let mut out_a = fragments_a.to_vec();
    let mut out_b = fragments_b.to_vec();

    for fa in out_a.iter_mut().filter(|f| f.kind == DiffKind::Removed) {
        if let Some(fb) = out_b
            .iter_mut()
            .find(|f| f.kind == DiffKind::Added && f.tag == fa.tag)
        {
            fa.kind = DiffKind::ChangedOld;
            fb.kind = DiffKind::ChangedNew;
        }
    }

    (out_a, out_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_marker_round_trip() {
        for kind in [
            DiffKind::Same,
            DiffKind::Added,
            DiffKind::Removed,
            DiffKind::ChangedOld,
            DiffKind::ChangedNew,
        ] {
            assert_eq!(DiffKind::from_marker(kind.marker()), Some(kind));
        }
        assert_eq!(DiffKind::from_marker('?'), None);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(DiffKind::Same.is_same());
        assert!(!DiffKind::Added.is_same());
        assert!(DiffKind::ChangedOld.is_change());
        assert!(DiffKind::ChangedNew.is_change());
        assert!(!DiffKind::Removed.is_change());
    }

    #[test]
    fn test_fragment_text() {
        let fragment = DiffFragment::new("44", "100.5", DiffKind::Removed);
        assert_eq!(fragment.text(), "44=100.5");
        assert_eq!(fragment.to_string(), "44=100.5");
    }

    #[test]
    fn test_annotate_changes_relabels_pairs() {
        let a = vec![
            DiffFragment::new("35", "D", DiffKind::Same),
            DiffFragment::new("44", "100.5", DiffKind::Removed),
        ];
        let b = vec![
            DiffFragment::new("35", "D", DiffKind::Same),
            DiffFragment::new("44", "101.0", DiffKind::Added),
        ];

        let (out_a, out_b) = annotate_changes(&a, &b);
        assert_eq!(out_a[1].kind, DiffKind::ChangedOld);
        assert_eq!(out_b[1].kind, DiffKind::ChangedNew);
        assert_eq!(out_a[0].kind, DiffKind::Same);
    }

    #[test]
    fn test_annotate_changes_keeps_pure_presence_diffs() {
        let a = vec![DiffFragment::new("1", "X", DiffKind::Removed)];
        let b = vec![DiffFragment::new("2", "Y", DiffKind::Added)];

        let (out_a, out_b) = annotate_changes(&a, &b);
        assert_eq!(out_a[0].kind, DiffKind::Removed);
        assert_eq!(out_b[0].kind, DiffKind::Added);
    }

    #[test]
    fn test_annotate_changes_leaves_input_untouched() {
        let a = vec![DiffFragment::new("44", "1", DiffKind::Removed)];
        let b = vec![DiffFragment::new("44", "2", DiffKind::Added)];

        let _ = annotate_changes(&a, &b);
        assert_eq!(a[0].kind, DiffKind::Removed);
        assert_eq!(b[0].kind, DiffKind::Added);
    }
}
