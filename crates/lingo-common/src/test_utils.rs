//! Test utilities and shared test helpers for the lingo workspace.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Counts invocations of a closure, typically a deferred locale loader.
///
/// Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one call.
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Sample translation tables shared by the workspace tests.
pub mod translation_fixtures {
    /// English sample table.
    pub const EN: &[(&str, &str)] = &[
        ("title", "Hi!"),
        ("desc", "Lets localize your app with {lib} and {framework}"),
    ];

    /// Vietnamese sample table with the same keys as [`EN`].
    pub const VI: &[(&str, &str)] = &[
        ("title", "Xin chào!"),
        (
            "desc",
            "Bắt đầu địa phương hoá ứng dụng của bạn với {lib} và {framework}",
        ),
    ];

    /// The same English table as JSON, for deserialization-based loaders.
    pub fn en_json() -> &'static str {
        r#"{
  "title": "Hi!",
  "desc": "Lets localize your app with {lib} and {framework}"
}"#
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid provider configuration as YAML.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
default_locale: "en"
"#
    }

    /// A full provider configuration as YAML.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "default_locale: \"vi\"\n",
            "fallback: \"Loading...\"\n",
            "cache_loaded_locales: false\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  json: true\n",
        )
    }

    /// A full provider configuration as TOML.
    pub fn full_config_toml() -> &'static str {
        concat!(
            "default_locale = \"vi\"\n",
            "fallback = \"Loading...\"\n",
            "cache_loaded_locales = false\n",
            "\n",
            "[logging]\n",
            "level = \"debug\"\n",
            "json = true\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for placeholder names (no braces, no newlines).
    pub fn placeholder_name_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z_][a-zA-Z0-9_]{0,11}".prop_map(|s| s.to_string())
    }

    /// Strategy for literal template text between placeholders.
    pub fn literal_text_strategy() -> impl Strategy<Value = String> {
        r"[^{}\n]{0,16}".prop_map(|s| s.to_string())
    }

    /// Strategy for parameter values; may contain anything but braces.
    pub fn param_value_strategy() -> impl Strategy<Value = String> {
        r"[^{}]{0,12}".prop_map(|s| s.to_string())
    }
}
