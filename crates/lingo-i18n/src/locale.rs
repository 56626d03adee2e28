//! Locale state: the current locale of one provider and its setter

use lingo_common::LocaleId;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Current locale of a mounted provider.
///
/// Backed by a `watch` channel so consumers can await changes; cloning shares
/// the same cell.
#[derive(Debug, Clone)]
pub struct LocaleState {
    tx: Arc<watch::Sender<LocaleId>>,
}

impl LocaleState {
    /// Create the state with its initial locale
    pub fn new(initial: impl Into<LocaleId>) -> Self {
        let (tx, _rx) = watch::channel(initial.into());
        Self { tx: Arc::new(tx) }
    }

    /// Currently selected locale
    pub fn current(&self) -> LocaleId {
        self.tx.borrow().clone()
    }

    /// Setter handle for this state
    pub fn setter(&self) -> SetLocale {
        SetLocale {
            tx: Arc::clone(&self.tx),
        }
    }

    /// Receiver notified on every locale change
    pub fn subscribe(&self) -> watch::Receiver<LocaleId> {
        self.tx.subscribe()
    }
}

/// Setter for a provider's locale.
///
/// Setting the locale it already holds is a no-op and wakes no one. The new
/// locale is not validated here; an unconfigured locale fails on the next
/// render instead.
#[derive(Debug, Clone)]
pub struct SetLocale {
    tx: Arc<watch::Sender<LocaleId>>,
}

impl SetLocale {
    /// Switch to `locale`. Returns whether the locale changed.
    pub fn set(&self, locale: impl Into<LocaleId>) -> bool {
        let next = locale.into();
        self.update(move |_| next)
    }

    /// Switch to a locale computed from the current one.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&LocaleId) -> LocaleId,
    {
        self.tx.send_if_modified(|current| {
            let next = f(current);
            if next == *current {
                return false;
            }
            info!("Switching locale: {} -> {}", current, next);
            *current = next;
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_locale() {
        let state = LocaleState::new("en");
        assert_eq!(state.current(), "en");
    }

    #[test]
    fn test_setter_changes_shared_state() {
        let state = LocaleState::new("en");
        let clone = state.clone();

        assert!(state.setter().set("vi"));
        assert_eq!(clone.current(), "vi");
    }

    #[test]
    fn test_same_locale_does_not_notify() {
        let state = LocaleState::new("en");
        let mut rx = state.subscribe();

        assert!(!state.setter().set("en"));
        assert!(!rx.has_changed().unwrap());

        assert!(state.setter().set("vi"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "vi");
    }

    #[test]
    fn test_update_from_current() {
        let state = LocaleState::new("en");
        let toggle = |current: &LocaleId| {
            if current == "en" {
                LocaleId::from("vi")
            } else {
                LocaleId::from("en")
            }
        };

        state.setter().update(toggle);
        assert_eq!(state.current(), "vi");
        state.setter().update(toggle);
        assert_eq!(state.current(), "en");
    }

    #[tokio::test]
    async fn test_subscribers_wake_on_change() {
        let state = LocaleState::new("en");
        let mut rx = state.subscribe();
        let setter = state.setter();

        let handle = tokio::spawn(async move {
            rx.changed().await.unwrap();
            rx.borrow().clone()
        });
        setter.set("vi");

        assert_eq!(handle.await.unwrap(), "vi");
    }
}
