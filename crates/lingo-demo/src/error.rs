//! Application-wide error types using thiserror.

use lingo_common::LingoError;
use lingo_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] LingoError),

    /// Translation error raised while rendering.
    #[error("Translation error: {0}")]
    I18n(#[from] I18nError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type for the demo application.
pub type DemoResult<T> = Result<T, DemoError>;
