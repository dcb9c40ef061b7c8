/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens Log Sort
//!
//! Chronological reordering of FIX log files for the FixLens toolkit.
//!
//! Each line of a log blob is scanned for a bracketed `YYYYMMDD-HH:MM:SS`
//! or `YYYYMMDD-HH:MM:SS.mmm` timestamp anywhere in the line; lines are then
//! stably sorted by that instant, ascending or descending. Lines without a
//! parseable stamp take a sentinel earliest instant instead of failing.
//!
//! ## Features
//!
//! - **Calendar-correct parsing**: Month 13 or February 30 degrade to the
//!   sentinel, never to a shifted date
//! - **Stable ordering**: Same-second lines keep their original order
//! - **Per-file scope**: Batch input sorts each file within itself

pub mod instant;
pub mod sorter;

pub use instant::LogInstant;
pub use sorter::{
    LogLine, ParseSortOrderError, SortOrder, SortedFile, sort_file, sort_files, sort_lines,
};
