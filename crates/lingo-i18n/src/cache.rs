//! Cache of resolved translation tables, shared by every provider of an instance

use crate::resource::TranslationMap;
use lingo_common::LocaleId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Resolved tables keyed by locale.
///
/// Entries are only ever added, by the resolver, when a table resolves. There
/// is no eviction and no public way to clear the cache, so a locale's loader
/// runs at most once for the lifetime of the owning [`I18n`](crate::I18n).
#[derive(Debug, Default)]
pub struct LoadCache {
    entries: RwLock<HashMap<LocaleId, Arc<TranslationMap>>>,
}

impl LoadCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved table for `locale`
    pub fn get(&self, locale: &str) -> Option<Arc<TranslationMap>> {
        self.entries.read().get(locale).cloned()
    }

    /// Whether `locale` has resolved
    pub fn contains(&self, locale: &str) -> bool {
        self.entries.read().contains_key(locale)
    }

    /// Number of resolved locales
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has resolved yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Resolved locales, sorted
    pub fn loaded_locales(&self) -> Vec<LocaleId> {
        let mut locales: Vec<LocaleId> = self.entries.read().keys().cloned().collect();
        locales.sort();
        locales
    }

    pub(crate) fn insert(&self, locale: LocaleId, translations: Arc<TranslationMap>) {
        debug!("Caching translations for locale {}", locale);
        self.entries.write().insert(locale, translations);
    }
}
