//! Suspense boundary: per-provider load state for the active locale

use crate::error::{I18nError, I18nResult};
use crate::resolver::{PendingLoad, Resolution, TranslationResolver};
use crate::resource::TranslationMap;
use lingo_common::LocaleId;
use std::mem;
use std::sync::Arc;
use tracing::{debug, warn};

/// Load state of the active locale's table.
#[derive(Debug)]
pub enum LoadState {
    /// Waiting for a deferred table; the fallback is shown
    Loading,
    /// Table resolved
    Ready(Arc<TranslationMap>),
    /// Loader failed; surfaced by the next render, then retried
    Failed(I18nError),
}

impl LoadState {
    /// Whether the fallback should be shown
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Resolved table, if ready
    pub fn translations(&self) -> Option<&Arc<TranslationMap>> {
        match self {
            Self::Ready(translations) => Some(translations),
            _ => None,
        }
    }
}

/// Holds the load state for the locale it was last synced to.
///
/// Resolution is memoized on the locale: syncing to the same locale again does
/// nothing, so re-renders never re-invoke a loader. Syncing to a different
/// locale drops any in-flight load for the old one.
#[derive(Debug)]
pub struct SuspenseBoundary {
    locale: Option<LocaleId>,
    state: LoadState,
    pending: Option<PendingLoad>,
}

impl Default for SuspenseBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspenseBoundary {
    /// Create a boundary that has not resolved anything yet
    pub const fn new() -> Self {
        Self {
            locale: None,
            state: LoadState::Loading,
            pending: None,
        }
    }

    /// Current state
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Locale the state belongs to
    pub const fn locale(&self) -> Option<&LocaleId> {
        self.locale.as_ref()
    }

    /// Whether a load is in flight
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Bring the state in line with `locale`, resolving it if it changed.
    ///
    /// If `locale` cannot be resolved the boundary is left untouched, so an
    /// in-flight load for the previous locale keeps going.
    pub fn sync(&mut self, locale: &LocaleId, resolver: &TranslationResolver) -> I18nResult<()> {
        if self.locale.as_ref() == Some(locale) {
            return Ok(());
        }

        let resolution = resolver.resolve(locale)?;

        if let Some(stale) = self.pending.take() {
            debug!("Dropping pending load for locale {}", stale.locale());
        }

        match resolution {
            Resolution::Ready(translations) => {
                self.state = LoadState::Ready(translations);
            }
            Resolution::Pending(load) => {
                self.state = LoadState::Loading;
                self.pending = Some(load);
            }
        }
        self.locale = Some(locale.clone());
        Ok(())
    }

    /// Drive the in-flight load to completion, moving to `Ready` or `Failed`.
    ///
    /// Returns immediately when nothing is loading. Cancel-safe: if the
    /// returned future is dropped early the load stays pending.
    pub async fn settle(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let result = pending.await;
        self.pending = None;
        self.state = match result {
            Ok(translations) => LoadState::Ready(translations),
            Err(err) => LoadState::Failed(err),
        };
    }

    /// Take a failure out of the boundary, resetting it so the next sync
    /// resolves (and loads) again.
    pub fn take_failure(&mut self) -> Option<I18nError> {
        if !matches!(self.state, LoadState::Failed(_)) {
            return None;
        }

        self.locale = None;
        match mem::replace(&mut self.state, LoadState::Loading) {
            LoadState::Failed(err) => {
                warn!("Surfacing translation load failure: {}", err);
                Some(err)
            }
            _ => None,
        }
    }
}
