//! The configured i18n instance

use crate::cache::LoadCache;
use crate::error::I18nResult;
use crate::locale::SetLocale;
use crate::message::Message;
use crate::provider::{Provider, Scope};
use crate::resolver::TranslationResolver;
use crate::resource::{ResourceTable, TranslationSource};
use crate::translator::Translator;
use lingo_common::LocaleId;
use lingo_config::I18nConfig;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Options for an [`I18n`] instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I18nOptions {
    /// Remember resolved locales so revisiting one never reloads it
    pub cache_loaded_locales: bool,
}

impl Default for I18nOptions {
    fn default() -> Self {
        Self {
            cache_loaded_locales: true,
        }
    }
}

impl From<&I18nConfig> for I18nOptions {
    fn from(config: &I18nConfig) -> Self {
        Self {
            cache_loaded_locales: config.cache_loaded_locales,
        }
    }
}

/// A configured localization instance.
///
/// Owns the resource table and the load cache. Cloning is cheap and yields a
/// handle to the same instance; providers and scopes from one instance are
/// invisible to every other instance.
#[derive(Debug, Clone)]
pub struct I18n {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    id: Uuid,
    options: I18nOptions,
    resolver: TranslationResolver,
}

impl I18n {
    /// Create an instance with default options (caching on)
    pub fn new(resources: ResourceTable) -> Self {
        Self::with_options(resources, I18nOptions::default())
    }

    /// Create an instance with explicit options
    pub fn with_options(resources: ResourceTable, options: I18nOptions) -> Self {
        let cache = options
            .cache_loaded_locales
            .then(|| Arc::new(LoadCache::new()));
        let id = Uuid::new_v4();

        info!(
            "I18n instance {} initialized with {} locales (cache: {})",
            id,
            resources.len(),
            options.cache_loaded_locales
        );

        Self {
            inner: Arc::new(Inner {
                id,
                options,
                resolver: TranslationResolver::new(resources, cache),
            }),
        }
    }

    /// Create an instance with options taken from configuration
    pub fn from_config(resources: ResourceTable, config: &I18nConfig) -> Self {
        Self::with_options(resources, I18nOptions::from(config))
    }

    /// Mount a provider starting at `default_locale`
    pub fn provider(&self, default_locale: impl Into<LocaleId>) -> Provider {
        Provider::new(self.clone(), default_locale.into())
    }

    /// Mount a provider with default locale and fallback from configuration
    pub fn provider_from_config(&self, config: &I18nConfig) -> Provider {
        let provider = self.provider(config.default_locale_id());
        match &config.fallback {
            Some(fallback) => provider.with_fallback(fallback.clone()),
            None => provider,
        }
    }

    /// Locale of the enclosing provider and its setter
    pub fn use_locale(&self, cx: &Scope) -> I18nResult<(LocaleId, SetLocale)> {
        cx.locale_for(self.inner.id)
    }

    /// Lookup function for the enclosing provider's resolved translations
    pub fn use_t(&self, cx: &Scope) -> I18nResult<Translator> {
        let (locale, translations) = cx.translations_for(self.inner.id)?;
        Ok(Translator::new(locale, translations))
    }

    /// Check `M` against every table available without loading: static
    /// tables plus deferred ones already in the cache.
    pub fn verify<M: Message>(&self) -> I18nResult<()> {
        let resources = self.resources();
        for locale in resources.locales() {
            match resources.get(locale.as_str()) {
                Some(TranslationSource::Static(translations)) => {
                    translations.verify::<M>(locale)?;
                }
                Some(TranslationSource::Deferred(_)) => {
                    if let Some(translations) = self.cache().and_then(|c| c.get(locale.as_str())) {
                        translations.verify::<M>(locale)?;
                    }
                }
                None => {}
            }
        }
        Ok(())
    }

    /// The resource table
    pub fn resources(&self) -> &ResourceTable {
        self.inner.resolver.resources()
    }

    /// The load cache, if caching is enabled
    pub fn cache(&self) -> Option<&LoadCache> {
        self.inner.resolver.cache()
    }

    /// Options this instance was created with
    pub fn options(&self) -> I18nOptions {
        self.inner.options
    }

    pub(crate) fn id(&self) -> Uuid {
        self.inner.id
    }

    pub(crate) fn resolver(&self) -> &TranslationResolver {
        &self.inner.resolver
    }
}
