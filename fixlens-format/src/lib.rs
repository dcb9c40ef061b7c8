/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens Format
//!
//! Presentation rendering for the FixLens toolkit.
//!
//! Everything here is downstream of parsing and diffing: a parsed message
//! becomes a tag-wrapped markup block, and a set comparison becomes a
//! marker-prefixed plain-text report. Nothing in this crate feeds back into
//! the algorithmic core.
//!
//! ## Features
//!
//! - **Markup blocks**: `<message>`/`<field>` rendering with XML escaping
//!   and optional dictionary-name annotation
//! - **Comparison reports**: Three lines per row with `=`/`-`/`+`/`<`/`>`
//!   markers

pub mod markup;
pub mod report;

pub use markup::MarkupWriter;
pub use report::{differing_rows, render_report};
