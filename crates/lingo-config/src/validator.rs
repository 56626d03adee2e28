//! Configuration validation.

use crate::schema::I18nConfig;
use lingo_common::LingoError;
use unic_langid::LanguageIdentifier;

/// Log levels accepted by [`validate_log_level`].
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &I18nConfig) -> lingo_common::Result<()> {
        config.validate().map_err(Into::into)
    }
}

/// Checks that a locale tag is a well-formed BCP-47 language identifier.
pub fn validate_locale_tag(tag: &str) -> Result<LanguageIdentifier, LingoError> {
    if tag.is_empty() {
        return Err(LingoError::Config(
            "Default locale cannot be empty".to_string(),
        ));
    }

    tag.parse::<LanguageIdentifier>()
        .map_err(|_| LingoError::Config(format!("Invalid locale tag: {tag}")))
}

/// Checks that a log level is one of [`LOG_LEVELS`].
pub fn validate_log_level(level: &str) -> Result<(), LingoError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(LingoError::Config(format!(
            "Invalid log level '{level}', expected one of {LOG_LEVELS:?}"
        )))
    }
}
