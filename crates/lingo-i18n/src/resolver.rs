//! Translation resolution: picking, and if needed loading, a locale's table

use crate::cache::LoadCache;
use crate::error::{BoxError, I18nError, I18nResult};
use crate::resource::{LoadFuture, ResourceTable, TranslationMap, TranslationSource};
use lingo_common::LocaleId;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use tracing::{debug, error, info};

/// Outcome of resolving a locale.
#[derive(Debug)]
pub enum Resolution {
    /// Table is available now
    Ready(Arc<TranslationMap>),
    /// Loader was invoked; await the load for the table
    Pending(PendingLoad),
}

/// Resolves the active table for a locale against a resource table and an
/// optional cache.
#[derive(Debug)]
pub struct TranslationResolver {
    resources: ResourceTable,
    cache: Option<Arc<LoadCache>>,
}

impl TranslationResolver {
    /// Create a resolver. Pass `None` to load deferred locales on every switch-in.
    pub fn new(resources: ResourceTable, cache: Option<Arc<LoadCache>>) -> Self {
        Self { resources, cache }
    }

    /// The resource table being resolved against
    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    /// The load cache, if caching is enabled
    pub fn cache(&self) -> Option<&LoadCache> {
        self.cache.as_deref()
    }

    /// Resolve `locale`.
    ///
    /// A cached table wins without touching the source. A static table is
    /// ready immediately (and cached). A deferred source has its loader
    /// invoked exactly once per call; the returned [`PendingLoad`] writes the
    /// cache when it completes successfully.
    pub fn resolve(&self, locale: &LocaleId) -> I18nResult<Resolution> {
        if let Some(translations) = self.cache().and_then(|cache| cache.get(locale.as_str())) {
            debug!("Cache hit for locale {}", locale);
            return Ok(Resolution::Ready(translations));
        }

        let source = self
            .resources
            .get(locale.as_str())
            .ok_or_else(|| I18nError::UnknownLocale(locale.clone()))?;

        match source {
            TranslationSource::Static(translations) => {
                debug!("Resolved static translations for locale {}", locale);
                if let Some(cache) = self.cache() {
                    cache.insert(locale.clone(), Arc::clone(translations));
                }
                Ok(Resolution::Ready(Arc::clone(translations)))
            }
            TranslationSource::Deferred(loader) => {
                debug!("Invoking loader for locale {}", locale);
                Ok(Resolution::Pending(PendingLoad {
                    locale: locale.clone(),
                    load: loader(),
                    cache: self.cache.clone(),
                }))
            }
        }
    }
}

/// An in-flight deferred load.
///
/// Resolves to the loaded table; on success the table is written to the cache
/// before the future completes. Failures are never cached. Dropping it
/// abandons the load without touching any state.
pub struct PendingLoad {
    locale: LocaleId,
    load: LoadFuture,
    cache: Option<Arc<LoadCache>>,
}

impl PendingLoad {
    /// Locale being loaded
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    fn complete(&self, result: Result<TranslationMap, BoxError>) -> I18nResult<Arc<TranslationMap>> {
        match result {
            Ok(translations) => {
                info!(
                    "Loaded {} translations for locale {}",
                    translations.len(),
                    self.locale
                );
                let translations = Arc::new(translations);
                if let Some(cache) = &self.cache {
                    cache.insert(self.locale.clone(), Arc::clone(&translations));
                }
                Ok(translations)
            }
            Err(source) => {
                error!("Loader for locale {} failed: {}", self.locale, source);
                Err(I18nError::LoaderFailure {
                    locale: self.locale.clone(),
                    source,
                })
            }
        }
    }
}

impl Future for PendingLoad {
    type Output = I18nResult<Arc<TranslationMap>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = ready!(self.load.as_mut().poll(cx));
        Poll::Ready(self.complete(result))
    }
}

impl fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLoad")
            .field("locale", &self.locale)
            .field("cached", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}
