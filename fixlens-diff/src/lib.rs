/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens Diff
//!
//! Field-level comparison of pipe-delimited FIX lines for the FixLens
//! toolkit.
//!
//! Two lines are compared over the union of their tags, and every tag is
//! classified on each side as unchanged, added, or removed. Multi-line
//! message sets are compared positionally, line N against line N.
//!
//! ## Features
//!
//! - **Union-order output**: Left-line tags first, then right-only tags
//! - **Tag-only mode**: Suppresses value differences, keeps presence ones
//! - **Change annotation**: An opt-in pass relabels removal/addition pairs
//!   of the same tag as a value change for rendering
//! - **Never fails**: Malformed input parses to fewer fields, not errors

pub mod engine;
pub mod fragment;

pub use engine::{ComparisonRow, DiffEngine};
pub use fragment::{DiffFragment, DiffKind, annotate_changes};
