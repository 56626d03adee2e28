//! Configuration loading from YAML or TOML with environment overrides.

use crate::schema::I18nConfig;
use lingo_common::{normalize_locale_tag, LingoError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "LINGO_";

/// On-disk formats understood by [`ConfigLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// TOML (`.toml`).
    Toml,
}

impl ConfigFormat {
    /// Picks a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LingoError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(LingoError::Config(format!(
                "Unsupported config file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads, applies environment overrides, and validates the configuration.
    pub async fn load(&self) -> Result<I18nConfig, LingoError> {
        self.load_with(|key| std::env::var(key).ok()).await
    }

    /// Like [`ConfigLoader::load`], reading overrides through `lookup`
    /// instead of the process environment.
    pub async fn load_with<F>(&self, lookup: F) -> Result<I18nConfig, LingoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = ConfigFormat::from_path(&self.path)?;
        debug!("Loading configuration from {:?}", self.path);

        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut config = Self::parse(&content, format)?;
        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;

        info!(
            "Loaded configuration from {:?} (default locale: {})",
            self.path, config.default_locale
        );
        Ok(config)
    }

    /// Parses configuration text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<I18nConfig, LingoError> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| LingoError::Serialization(e.to_string())),
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| LingoError::Serialization(e.to_string()))
            }
        }
    }

    /// Builds a configuration from defaults plus process environment overrides.
    pub fn from_env() -> Result<I18nConfig, LingoError> {
        let mut config = I18nConfig::default();
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `LINGO_*` overrides read through `lookup`.
    ///
    /// Recognized keys: `LINGO_DEFAULT_LOCALE`, `LINGO_FALLBACK`,
    /// `LINGO_CACHE_LOADED_LOCALES`, `LINGO_LOG_LEVEL`, `LINGO_LOG_JSON`.
    pub fn apply_overrides<F>(config: &mut I18nConfig, lookup: F) -> Result<(), LingoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(locale) = var("DEFAULT_LOCALE") {
            config.default_locale = normalize_locale_tag(&locale);
        }
        if let Some(fallback) = var("FALLBACK") {
            config.fallback = Some(fallback);
        }
        if let Some(cache) = var("CACHE_LOADED_LOCALES") {
            config.cache_loaded_locales = parse_bool("CACHE_LOADED_LOCALES", &cache)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level.trim().to_ascii_lowercase();
        }
        if let Some(json) = var("LOG_JSON") {
            config.logging.json = parse_bool("LOG_JSON", &json)?;
        }

        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, LingoError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LingoError::Config(format!(
            "{ENV_PREFIX}{name} must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("lingo.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/lingo.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(ConfigFormat::from_path(Path::new("lingo.json")).is_err());
    }

    #[test]
    fn test_overrides_are_applied() {
        let env: HashMap<&str, &str> = [
            ("LINGO_DEFAULT_LOCALE", "pt_BR"),
            ("LINGO_FALLBACK", "..."),
            ("LINGO_CACHE_LOADED_LOCALES", "no"),
            ("LINGO_LOG_LEVEL", " DEBUG "),
        ]
        .into_iter()
        .collect();

        let mut config = I18nConfig::default();
        ConfigLoader::apply_overrides(&mut config, |key| env.get(key).map(ToString::to_string))
            .unwrap();

        assert_eq!(config.default_locale, "pt-BR");
        assert_eq!(config.fallback.as_deref(), Some("..."));
        assert!(!config.cache_loaded_locales);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_bad_boolean_override() {
        let mut config = I18nConfig::default();
        let result = ConfigLoader::apply_overrides(&mut config, |key| {
            (key == "LINGO_LOG_JSON").then(|| "maybe".to_string())
        });
        assert!(matches!(result, Err(LingoError::Config(_))));
    }
}
