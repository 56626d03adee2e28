//! Translation tables, parameters, and the per-instance resource table

use crate::error::{BoxError, I18nError, I18nResult};
use crate::interpolate::placeholder_names;
use crate::message::Message;
use futures::future::BoxFuture;
use lingo_common::LocaleId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Future produced by a deferred loader.
pub type LoadFuture = BoxFuture<'static, Result<TranslationMap, BoxError>>;

/// Zero-argument producer of a locale's translations.
pub type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Translation table for one locale: translation id to template string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap(HashMap<String, String>);

impl TranslationMap {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Template for `id`, if present
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Whether `id` is present
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of translations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no translations
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Translation ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.0.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Placeholder names of the template for `id`, in order of appearance
    pub fn placeholders(&self, id: &str) -> Option<Vec<&str>> {
        self.get(id).map(placeholder_names)
    }

    /// Check that the template for `M` exists and uses exactly the
    /// placeholders `M` declares.
    pub fn verify<M: Message>(&self, locale: &LocaleId) -> I18nResult<()> {
        let found = self
            .placeholders(M::ID)
            .ok_or_else(|| I18nError::MissingTranslationKey {
                locale: locale.clone(),
                key: M::ID.to_string(),
            })?;

        let mut found: Vec<String> = found.into_iter().map(str::to_string).collect();
        found.sort();
        found.dedup();
        let mut expected: Vec<String> = M::PLACEHOLDERS.iter().map(|p| (*p).to_string()).collect();
        expected.sort();

        if found == expected {
            Ok(())
        } else {
            Err(I18nError::PlaceholderMismatch {
                locale: locale.clone(),
                key: M::ID.to_string(),
                expected,
                found,
            })
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for TranslationMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<&[(&str, &str)]> for TranslationMap {
    fn from(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }
}

impl From<HashMap<String, String>> for TranslationMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Parameter values substituted into `{name}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.0.insert(key.into(), value.to_string());
    }

    /// Builder-style [`Params::insert`]
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.insert(key, value);
        self
    }

    /// Value for `key`, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Macro to create [`Params`] more easily
///
/// ```rust
/// let params = lingo_i18n::params!["lib" => "lingo", "count" => 3];
/// assert_eq!(params.get("count"), Some("3"));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($key, $value);
        )+
        params
    }};
}

/// Where a locale's translations come from.
#[derive(Clone)]
pub enum TranslationSource {
    /// Table available immediately
    Static(Arc<TranslationMap>),
    /// Table produced asynchronously on first use
    Deferred(Loader),
}

impl TranslationSource {
    /// Wrap an async loader.
    pub fn deferred<F, Fut, E>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<TranslationMap, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        let loader: Loader = Arc::new(move || -> LoadFuture {
            let load = loader();
            Box::pin(async move { load.await.map_err(Into::into) })
        });
        Self::Deferred(loader)
    }

    /// Whether the table has to be loaded
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl fmt::Debug for TranslationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(map) => f.debug_tuple("Static").field(map).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").field(&"<loader>").finish(),
        }
    }
}

impl From<TranslationMap> for TranslationSource {
    fn from(map: TranslationMap) -> Self {
        Self::Static(Arc::new(map))
    }
}

/// Mapping from locale to translation source, fixed once handed to an
/// [`I18n`](crate::I18n) instance.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    sources: HashMap<LocaleId, TranslationSource>,
}

impl ResourceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale whose translations are available immediately
    #[must_use]
    pub fn with_static(self, locale: impl Into<LocaleId>, map: impl Into<TranslationMap>) -> Self {
        self.with_source(locale, TranslationSource::from(map.into()))
    }

    /// Add a locale whose translations come from an async loader
    #[must_use]
    pub fn with_deferred<F, Fut, E>(self, locale: impl Into<LocaleId>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<TranslationMap, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        self.with_source(locale, TranslationSource::deferred(loader))
    }

    /// Add a locale with an explicit source, replacing any previous entry
    #[must_use]
    pub fn with_source(mut self, locale: impl Into<LocaleId>, source: TranslationSource) -> Self {
        self.sources.insert(locale.into(), source);
        self
    }

    /// Source configured for `locale`
    pub fn get(&self, locale: &str) -> Option<&TranslationSource> {
        self.sources.get(locale)
    }

    /// Whether `locale` is configured
    pub fn contains(&self, locale: &str) -> bool {
        self.sources.contains_key(locale)
    }

    /// Configured locales, sorted
    pub fn locales(&self) -> Vec<&LocaleId> {
        let mut locales: Vec<&LocaleId> = self.sources.keys().collect();
        locales.sort();
        locales
    }

    /// Number of configured locales
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no locale is configured
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
