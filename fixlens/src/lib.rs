/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens
//!
//! A toolkit for inspecting human-readable FIX protocol text: tokenize
//! pipe-delimited messages, diff two message sets field by field, sort log
//! files by their embedded timestamps, and render the results.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Field tags and values reference the input line
//! - **SIMD-accelerated**: Uses `memchr` for delimiter and bracket search
//! - **Malformed input is data**: Bad tokens and bad timestamps degrade to
//!   fewer fields or a sentinel instant, never to errors
//! - **Deterministic diffs**: Tag-union classification in a fixed order,
//!   positional set comparison, stable timestamp sort
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixlens::prelude::*;
//!
//! // Compare two message sets line by line
//! let engine = DiffEngine::new();
//! let rows = engine.compare_sets(
//!     "35=D|55=EURUSD|44=1.0921",
//!     "35=D|55=EURUSD|44=1.0933",
//! );
//! println!("{}", render_report(&rows));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Field and message model, error definitions
//! - [`tagvalue`]: Zero-copy tag=value tokenizing and line writing
//! - [`diff`]: Field-level diff engine and message-set comparison
//! - [`logsort`]: Bracketed-timestamp extraction and chronological sorting
//! - [`dictionary`]: Embedded tag dictionary and tag-info providers
//! - [`format`]: Markup blocks and plain-text comparison reports

pub mod core {
    //! Field and message model, error definitions.
    pub use fixlens_core::*;
}

pub mod tagvalue {
    //! Zero-copy tag=value tokenizing and line writing.
    pub use fixlens_tagvalue::*;
}

pub mod diff {
    //! Field-level diff engine and message-set comparison.
    pub use fixlens_diff::*;
}

pub mod logsort {
    //! Bracketed-timestamp extraction and chronological sorting.
    pub use fixlens_logsort::*;
}

pub mod dictionary {
    //! Embedded tag dictionary and tag-info providers.
    pub use fixlens_dictionary::*;
}

pub mod format {
    //! Markup blocks and plain-text comparison reports.
    pub use fixlens_format::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixlens_core::{DictionaryError, FieldRef, FixLensError, ParsedMessage, Result};

    // Tokenizing
    pub use fixlens_tagvalue::{
        LineWriter, SkipReason, SkippedToken, Tokenizer, parse_line, parse_line_with_diagnostics,
    };

    // Diffing
    pub use fixlens_diff::{ComparisonRow, DiffEngine, DiffFragment, DiffKind, annotate_changes};

    // Log sorting
    pub use fixlens_logsort::{
        LogInstant, LogLine, SortOrder, SortedFile, sort_file, sort_files, sort_lines,
    };

    // Dictionary
    pub use fixlens_dictionary::{
        CachedProvider, EmbeddedDictionary, FieldDef, FieldType, NoDictionary, ProviderOrigin,
        TagInfoProvider, Version,
    };

    // Rendering
    pub use fixlens_format::{MarkupWriter, differing_rows, render_report};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        // Verify that prelude imports work together
        let message = parse_line("35=D|55=EURUSD");
        assert_eq!(message.get("55"), Some("EURUSD"));

        let engine = DiffEngine::new();
        let (a, b) = engine.diff_line("35=D|44=1", "35=D|44=2");
        assert_eq!(a[1].kind, DiffKind::Removed);
        assert_eq!(b[1].kind, DiffKind::Added);
    }

    #[test]
    fn test_sort_through_prelude() {
        let sorted = sort_lines(
            "[20240101-10:00:01] b\n[20240101-10:00:00] a",
            SortOrder::Ascending,
        );
        assert_eq!(sorted, "[20240101-10:00:00] a\n[20240101-10:00:01] b");
    }

    #[test]
    fn test_version() {
        let version = Version::Fix44;
        assert_eq!(version.begin_string(), "FIX.4.4");
    }

    #[test]
    fn test_report_pipeline() {
        let rows = DiffEngine::new().compare_sets("35=D|44=1", "35=D|44=2");
        assert_eq!(differing_rows(&rows), 1);

        let report = render_report(&rows);
        assert!(report.contains("<44=1"));
        assert!(report.contains(">44=2"));
    }
}
