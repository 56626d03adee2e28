//! Error types for internationalization operations

use lingo_common::{LingoError, LocaleId};
use thiserror::Error;

/// Boxed error produced by a deferred locale loader.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Locale or translations were read from a scope without a matching provider
    #[error("LocaleContext not found")]
    LocaleContextNotFound,

    /// The current locale has no entry in the resource table
    #[error("Unknown locale: {0}")]
    UnknownLocale(LocaleId),

    /// Translation id absent from the active locale's table
    #[error("Translation '{key}' not found for locale {locale}")]
    MissingTranslationKey { locale: LocaleId, key: String },

    /// A template's placeholders differ from the parameters a message declares
    #[error("Placeholders of '{key}' in locale {locale} are {found:?}, expected {expected:?}")]
    PlaceholderMismatch {
        locale: LocaleId,
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A deferred loader's future failed
    #[error("Failed to load translations for locale {locale}: {source}")]
    LoaderFailure {
        locale: LocaleId,
        #[source]
        source: BoxError,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] LingoError),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
