/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens Tag-Value
//!
//! Zero-copy tokenizing of pipe-delimited FIX text for the FixLens toolkit.
//!
//! This crate turns one line of human-readable wire text (`35=D|55=EURUSD`)
//! into an ordered tag→value mapping, and assembles such lines back from
//! fields.
//!
//! ## Features
//!
//! - **Zero-copy tokenizing**: Field tags and values reference the input line
//! - **SIMD-accelerated**: Uses `memchr` for separator search
//! - **Malformed input is data**: Bad tokens are dropped, never errors;
//!   diagnostics are available on request
//!
//! The tokenizer is purely syntactic. It has no concept of the FIX data
//! dictionary: unknown tags, duplicate tags, empty values, and non-numeric
//! "numeric" fields all pass through as-is.

pub mod tokenizer;
pub mod writer;

pub use fixlens_core::message::ParsedMessage;
pub use tokenizer::{SkipReason, SkippedToken, Tokenizer, parse_line, parse_line_with_diagnostics};
pub use writer::LineWriter;
