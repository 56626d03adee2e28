//! Configuration schema definitions using serde.

use crate::validator::{validate_locale_tag, validate_log_level};
use lingo_common::{LingoError, LocaleId};
use serde::{Deserialize, Serialize};

/// Configuration for a translation provider and its host process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale the provider starts with.
    pub default_locale: String,
    /// Text shown while a lazily loaded locale is pending.
    pub fallback: Option<String>,
    /// Whether loaded locales are remembered so revisiting them skips the loader.
    pub cache_loaded_locales: bool,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl I18nConfig {
    /// The default locale as a [`LocaleId`].
    #[must_use]
    pub fn default_locale_id(&self) -> LocaleId {
        LocaleId::new(self.default_locale.clone())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), LingoError> {
        validate_locale_tag(&self.default_locale)?;
        validate_log_level(&self.logging.level)?;
        Ok(())
    }
}
