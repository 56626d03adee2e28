//! Default values for the configuration schema.

use crate::schema::{I18nConfig, LoggingConfig};

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            fallback: None,
            cache_loaded_locales: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
