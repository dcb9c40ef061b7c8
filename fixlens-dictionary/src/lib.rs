/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # FixLens Dictionary
//!
//! FIX tag metadata for the FixLens toolkit.
//!
//! The parsing and diff layers treat tags as opaque text; this crate adds
//! the optional layer that names them. A compiled-in table covers the
//! common FIX 4.x tags and message types, and the [`TagInfoProvider`] trait
//! abstracts richer sources behind one interface.
//!
//! ## Features
//!
//! - **Embedded tables**: Common tags and message types with no I/O
//! - **Provider capability**: Remote, cached, or absent sources behind one
//!   trait, so renderers never branch on availability
//! - **Memoization**: [`CachedProvider`] consults a slow source at most
//!   once per distinct tag

pub mod embedded;
pub mod provider;
pub mod schema;

pub use embedded::EmbeddedDictionary;
pub use provider::{CachedProvider, NoDictionary, ProviderOrigin, TagInfoProvider};
pub use schema::{FieldDef, FieldType, Version};
