/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Tag-info provider abstraction.
//!
//! Renderers ask a [`TagInfoProvider`] for field metadata without knowing
//! where answers come from: a remote dictionary service, a local cache, or
//! nowhere at all. The parsing and diff layers never depend on this trait;
//! tag metadata is presentation enrichment only.

use crate::embedded::EmbeddedDictionary;
use crate::schema::FieldDef;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Where a provider's answers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderOrigin {
    /// Answers served live from a remote dictionary service.
    RemoteDictionary,
    /// Answers served from locally held data.
    CachedFallback,
    /// No source wired; every lookup misses.
    Unavailable,
}

/// Capability interface for tag metadata lookup.
///
/// Implementations must be safe to share across threads; the comparison and
/// formatting surfaces hold one provider per process.
pub trait TagInfoProvider: Send + Sync {
    /// Looks up field metadata for a tag given as wire text.
    ///
    /// # Arguments
    /// * `tag` - The tag text as parsed from the line
    ///
    /// # Returns
    /// The field definition, or `None` when the provider has no answer.
    fn field_info(&self, tag: &str) -> Option<FieldDef>;

    /// Reports where this provider's answers come from.
    fn origin(&self) -> ProviderOrigin;
}

impl TagInfoProvider for EmbeddedDictionary {
    fn field_info(&self, tag: &str) -> Option<FieldDef> {
        // Tags are opaque text upstream; only numeric ones can match here.
        let tag: u32 = tag.parse().ok()?;
        self.field_by_tag(tag)
    }

    fn origin(&self) -> ProviderOrigin {
        ProviderOrigin::CachedFallback
    }
}

/// Provider that always misses.
///
/// Stands in when no dictionary source is configured, keeping callers on
/// one code path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDictionary;

impl TagInfoProvider for NoDictionary {
    fn field_info(&self, _tag: &str) -> Option<FieldDef> {
        None
    }

    fn origin(&self) -> ProviderOrigin {
        ProviderOrigin::Unavailable
    }
}

/// Memoizing wrapper around another provider.
///
/// Remembers every answer, including misses, so a slow inner provider is
/// consulted at most once per distinct tag.
#[derive(Debug)]
pub struct CachedProvider<P> {
    /// The wrapped provider.
    inner: P,
    /// Answers by tag text; `None` records a miss.
    cache: RwLock<HashMap<String, Option<FieldDef>>>,
}

impl<P: TagInfoProvider> CachedProvider<P> {
    /// Wraps a provider with a memo cache.
    ///
    /// # Arguments
    /// * `inner` - The provider to memoize
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of memoized answers, misses included.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Drops all memoized answers.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl<P: TagInfoProvider> TagInfoProvider for CachedProvider<P> {
    fn field_info(&self, tag: &str) -> Option<FieldDef> {
        if let Some(answer) = self.cache.read().get(tag) {
            return answer.clone();
        }

        debug!(tag, "tag info cache miss");
        let answer = self.inner.field_info(tag);
        let mut cache = self.cache.write();
        cache.insert(tag.to_string(), answer.clone());
        answer
    }

    fn origin(&self) -> ProviderOrigin {
        self.inner.origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the inner lookup runs.
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TagInfoProvider for CountingProvider {
        fn field_info(&self, tag: &str) -> Option<FieldDef> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (tag == "35").then(|| FieldDef::new(35, "MsgType", FieldType::String))
        }

        fn origin(&self) -> ProviderOrigin {
            ProviderOrigin::RemoteDictionary
        }
    }

    #[test]
    fn test_embedded_provider_lookup() {
        let provider: &dyn TagInfoProvider = &EmbeddedDictionary::new();

        let def = provider.field_info("35").unwrap();
        assert_eq!(def.name, "MsgType");
        assert_eq!(provider.origin(), ProviderOrigin::CachedFallback);
    }

    #[test]
    fn test_embedded_provider_non_numeric_tag() {
        let provider = EmbeddedDictionary::new();
        assert!(provider.field_info("abc").is_none());
        assert!(provider.field_info("").is_none());
        assert!(provider.field_info("-1").is_none());
    }

    #[test]
    fn test_no_dictionary_always_misses() {
        let provider = NoDictionary;
        assert!(provider.field_info("35").is_none());
        assert_eq!(provider.origin(), ProviderOrigin::Unavailable);
    }

    #[test]
    fn test_cached_provider_memoizes_hits() {
        let cached = CachedProvider::new(CountingProvider::new());

        assert!(cached.field_info("35").is_some());
        assert!(cached.field_info("35").is_some());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cached_provider_memoizes_misses() {
        let cached = CachedProvider::new(CountingProvider::new());

        assert!(cached.field_info("999").is_none());
        assert!(cached.field_info("999").is_none());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.cached_count(), 1);
    }

    #[test]
    fn test_cached_provider_clear() {
        let cached = CachedProvider::new(CountingProvider::new());

        let _ = cached.field_info("35");
        cached.clear();
        let _ = cached.field_info("35");
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.cached_count(), 1);
    }

    #[test]
    fn test_cached_provider_reports_inner_origin() {
        let cached = CachedProvider::new(CountingProvider::new());
        assert_eq!(cached.origin(), ProviderOrigin::RemoteDictionary);
    }
}
