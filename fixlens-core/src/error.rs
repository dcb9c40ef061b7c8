/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Error types for the FixLens toolkit.
//!
//! This module provides the unified error hierarchy using `thiserror`.
//!
//! The taxonomy is deliberately narrow: tokenizing, diffing, and log sorting
//! treat malformed input as data, not as failure, and never return errors.
//! The fallible operations live at the edges: dictionary selection and
//! whatever I/O a caller performs around the library.

use thiserror::Error;

/// Result type alias using [`FixLensError`] as the error type.
pub type Result<T> = std::result::Result<T, FixLensError>;

/// Top-level error type for all FixLens operations.
#[derive(Debug, Error)]
pub enum FixLensError {
    /// Error in dictionary operations.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// I/O error from a caller-side read or write.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in tag-dictionary operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// BeginString value does not identify a supported FIX version.
    #[error("unsupported begin string: {begin_string}")]
    UnsupportedVersion {
        /// The BeginString value that was requested (tag 8).
        begin_string: String,
    },
}
