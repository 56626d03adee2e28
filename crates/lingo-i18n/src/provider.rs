//! Provider: owns the locale state of one subtree and renders it

use crate::error::{I18nError, I18nResult};
use crate::locale::{LocaleState, SetLocale};
use crate::manager::I18n;
use crate::resource::TranslationMap;
use crate::suspense::{LoadState, SuspenseBoundary};
use lingo_common::LocaleId;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

/// Context handed to the children of a provider.
///
/// A scope is bound to the [`I18n`] instance whose provider created it; the
/// instance's hooks fail with [`I18nError::LocaleContextNotFound`] on
/// [`Scope::root`] or on a scope from another instance.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    provided: Option<Provided>,
}

#[derive(Debug, Clone)]
struct Provided {
    instance: Uuid,
    state: LocaleState,
    locale: LocaleId,
    translations: Arc<TranslationMap>,
}

impl Scope {
    /// A scope outside every provider
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether some provider created this scope
    pub const fn is_provided(&self) -> bool {
        self.provided.is_some()
    }

    fn provided_by(&self, instance: Uuid) -> I18nResult<&Provided> {
        self.provided
            .as_ref()
            .filter(|provided| provided.instance == instance)
            .ok_or(I18nError::LocaleContextNotFound)
    }

    pub(crate) fn locale_for(&self, instance: Uuid) -> I18nResult<(LocaleId, SetLocale)> {
        let provided = self.provided_by(instance)?;
        Ok((provided.locale.clone(), provided.state.setter()))
    }

    pub(crate) fn translations_for(
        &self,
        instance: Uuid,
    ) -> I18nResult<(LocaleId, Arc<TranslationMap>)> {
        let provided = self.provided_by(instance)?;
        Ok((provided.locale.clone(), Arc::clone(&provided.translations)))
    }
}

/// A mounted provider: one locale state plus the suspense boundary for its
/// active translations.
///
/// Created through [`I18n::provider`]. Dropping the provider unmounts it; an
/// in-flight load is abandoned and its result never rendered.
#[derive(Debug)]
pub struct Provider {
    i18n: I18n,
    state: LocaleState,
    changes: watch::Receiver<LocaleId>,
    fallback: Option<String>,
    boundary: SuspenseBoundary,
}

impl Provider {
    pub(crate) fn new(i18n: I18n, default_locale: LocaleId) -> Self {
        info!("Mounting provider with default locale {}", default_locale);
        let state = LocaleState::new(default_locale);
        let changes = state.subscribe();
        Self {
            i18n,
            state,
            changes,
            fallback: None,
            boundary: SuspenseBoundary::new(),
        }
    }

    /// Content rendered while a deferred locale loads (default: empty)
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Current locale
    pub fn locale(&self) -> LocaleId {
        self.state.current()
    }

    /// Setter for the current locale
    pub fn setter(&self) -> SetLocale {
        self.state.setter()
    }

    /// Receiver notified whenever the locale changes
    pub fn subscribe(&self) -> watch::Receiver<LocaleId> {
        self.state.subscribe()
    }

    /// Whether the locale changed since the last render
    pub fn needs_render(&self) -> bool {
        self.changes.has_changed().unwrap_or(false)
    }

    /// Wait until the locale changes after the last render
    pub async fn changed(&mut self) {
        // The sender lives in `self.state`, so the channel cannot close here
        self.changes.changed().await.ok();
    }

    /// Load state of the active locale
    pub const fn state(&self) -> &LoadState {
        self.boundary.state()
    }

    /// Whether the fallback is being shown
    pub const fn is_loading(&self) -> bool {
        self.boundary.state().is_loading()
    }

    /// Render the subtree for the current locale.
    ///
    /// While the active locale is loading the fallback is returned and
    /// `children` is not called. A failed load is returned as an error once;
    /// the render after that invokes the loader again.
    pub fn render<F>(&mut self, children: F) -> I18nResult<String>
    where
        F: FnOnce(&Scope) -> I18nResult<String>,
    {
        let locale = self.changes.borrow_and_update().clone();
        self.boundary.sync(&locale, self.i18n.resolver())?;

        if let Some(err) = self.boundary.take_failure() {
            return Err(err);
        }

        let Some(translations) = self.boundary.state().translations().cloned() else {
            debug!("Translations for locale {} pending, rendering fallback", locale);
            return Ok(self.fallback.clone().unwrap_or_default());
        };

        let scope = Scope {
            provided: Some(Provided {
                instance: self.i18n.id(),
                state: self.state.clone(),
                locale,
                translations,
            }),
        };
        children(&scope)
    }

    /// Wait for the active locale's pending load, if any, to settle.
    pub async fn settle(&mut self) {
        self.boundary.settle().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceTable;

    fn i18n() -> I18n {
        I18n::new(
            ResourceTable::new()
                .with_static("en", TranslationMap::from([("title", "Hi!")]))
                .with_static("vi", TranslationMap::from([("title", "Xin chào!")])),
        )
    }

    #[test]
    fn test_root_scope_has_no_context() {
        let scope = Scope::root();
        assert!(!scope.is_provided());
        assert!(matches!(
            scope.locale_for(Uuid::new_v4()),
            Err(I18nError::LocaleContextNotFound)
        ));
    }

    #[test]
    fn test_render_passes_scope_for_current_locale() {
        let i18n = i18n();
        let mut provider = i18n.provider("en");

        let rendered = provider
            .render(|cx| {
                let (locale, _) = i18n.use_locale(cx)?;
                Ok(locale.to_string())
            })
            .unwrap();
        assert_eq!(rendered, "en");
        assert!(!provider.is_loading());
    }

    #[test]
    fn test_needs_render_after_switch() {
        let i18n = i18n();
        let mut provider = i18n.provider("en");
        provider.render(|_| Ok(String::new())).unwrap();
        assert!(!provider.needs_render());

        provider.setter().set("vi");
        assert!(provider.needs_render());
        provider.render(|_| Ok(String::new())).unwrap();
        assert!(!provider.needs_render());
    }

    #[test]
    fn test_unknown_locale_fails_render() {
        let i18n = i18n();
        let mut provider = i18n.provider("fr");
        assert!(matches!(
            provider.render(|_| Ok(String::new())),
            Err(I18nError::UnknownLocale(_))
        ));
    }
}
