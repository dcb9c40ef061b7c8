/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens Core
//!
//! Core types and error definitions for the FixLens FIX inspection toolkit.
//!
//! This crate provides the fundamental building blocks used across all
//! FixLens crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: [`FieldRef`], a zero-copy tag=value pair
//! - **Message types**: [`ParsedMessage`], the ordered tag→value mapping
//!
//! ## Zero-Copy Design
//!
//! Fields borrow from the input line rather than copying it; a parsed message
//! lives exactly as long as the text it was tokenized from. That suits how
//! messages are used here: parsed for one comparison, then dropped.

pub mod error;
pub mod field;
pub mod message;

pub use error::{DictionaryError, FixLensError, Result};
pub use field::FieldRef;
pub use message::ParsedMessage;
