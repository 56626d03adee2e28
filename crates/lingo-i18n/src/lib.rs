//! # Lingo I18n
//!
//! Localization for component trees: a locale context with a setter, a
//! translation lookup function, and a declarative translation unit with
//! `{param}` interpolation.
//!
//! A configured [`I18n`] instance owns a [`ResourceTable`] mapping each locale
//! to either a ready [`TranslationMap`] or a deferred loader. Mounting a
//! [`Provider`] creates the locale state for one subtree; rendering through
//! the provider resolves the active table, shows the fallback while a deferred
//! locale loads, and hands children a [`Scope`] to read translations from.
//! Loaded locales are kept in a [`LoadCache`] shared by every provider of the
//! same instance, so revisiting a locale never invokes its loader again.
//!
//! # Example
//!
//! ```rust
//! use lingo_i18n::{params, I18n, ResourceTable, Translate, TranslationMap};
//!
//! # fn example() -> Result<(), lingo_i18n::I18nError> {
//! let i18n = I18n::new(
//!     ResourceTable::new()
//!         .with_static("en", TranslationMap::from([("greet", "Hello, {name}!")]))
//!         .with_static("vi", TranslationMap::from([("greet", "Xin chào, {name}!")])),
//! );
//!
//! let mut provider = i18n.provider("en");
//! let greet = Translate::new("greet").with_params(params!["name" => "Ada"]);
//!
//! assert_eq!(provider.render(|cx| greet.render(&i18n, cx))?, "Hello, Ada!");
//!
//! provider.setter().set("vi");
//! assert_eq!(provider.render(|cx| greet.render(&i18n, cx))?, "Xin chào, Ada!");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod error;
pub mod interpolate;
pub mod locale;
pub mod manager;
pub mod message;
pub mod provider;
pub mod resolver;
pub mod resource;
pub mod suspense;
pub mod translator;

pub use cache::LoadCache;
pub use error::{BoxError, I18nError, I18nResult};
pub use interpolate::{interpolate, placeholder_names};
pub use locale::{LocaleState, SetLocale};
pub use manager::{I18n, I18nOptions};
pub use message::Message;
pub use provider::{Provider, Scope};
pub use resolver::{PendingLoad, Resolution, TranslationResolver};
pub use resource::{LoadFuture, Loader, Params, ResourceTable, TranslationMap, TranslationSource};
pub use suspense::{LoadState, SuspenseBoundary};
pub use translator::{Translate, Translator};

pub use lingo_common::LocaleId;
