//! The demo page and its render loop.

use crate::error::DemoResult;
use lingo_common::LocaleId;
use lingo_config::I18nConfig;
use lingo_i18n::{messages, I18n, I18nResult, Provider, ResourceTable, Scope, TranslationMap};
use std::convert::Infallible;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Fallback shown when the configuration does not set one
pub const DEFAULT_FALLBACK: &str = "Loading...";

/// Simulated latency of the Vietnamese bundle
pub const LOAD_DELAY: Duration = Duration::from_millis(150);

const EN: &[(&str, &str)] = &[
    ("title", "Hi!"),
    ("desc", "Lets localize your app with {lib} and {framework}"),
    ("switch", "Tiếng Việt"),
];

const VI: &[(&str, &str)] = &[
    ("title", "Xin chào!"),
    (
        "desc",
        "Bắt đầu địa phương hoá ứng dụng của bạn với {lib} và {framework}",
    ),
    ("switch", "English"),
];

messages! {
    /// Page heading
    Title = "title";
    /// Intro paragraph
    Desc = "desc" { lib, framework };
    /// Label of the language switch button
    SwitchLabel = "switch";
}

/// English bundled, Vietnamese loaded after `load_delay`.
pub fn demo_resources(load_delay: Duration) -> ResourceTable {
    ResourceTable::new()
        .with_static("en", TranslationMap::from(EN))
        .with_deferred("vi", move || async move {
            debug!("Fetching vi bundle");
            tokio::time::sleep(load_delay).await;
            Ok::<_, Infallible>(TranslationMap::from(VI))
        })
}

/// The locale the switch button moves to
pub fn next_locale(current: &LocaleId) -> LocaleId {
    if current == "vi" {
        LocaleId::from("en")
    } else {
        LocaleId::from("vi")
    }
}

/// One rendered frame of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Locale active when the frame was rendered
    pub locale: LocaleId,
    /// Whether the fallback was rendered
    pub loading: bool,
    /// Rendered text
    pub text: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.loading { "loading" } else { "ready" };
        writeln!(f, "[{} {}]", self.locale, status)?;
        write!(f, "{}", self.text)
    }
}

fn render_page(i18n: &I18n, cx: &Scope) -> I18nResult<String> {
    let t = i18n.use_t(cx)?;
    let desc = Desc {
        lib: "lingo".to_string(),
        framework: "Rust".to_string(),
    };
    Ok(format!(
        "{}\n{}\n[ {} ]",
        t.message(&Title)?,
        t.message(&desc)?,
        t.message(&SwitchLabel)?
    ))
}

/// A mounted page: one provider over the demo translations.
#[derive(Debug)]
pub struct DemoApp {
    i18n: I18n,
    provider: Provider,
}

impl DemoApp {
    /// Mount the page with the built-in translations
    pub fn new(config: &I18nConfig) -> Self {
        Self::with_resources(demo_resources(LOAD_DELAY), config)
    }

    /// Mount the page over `resources`
    pub fn with_resources(resources: ResourceTable, config: &I18nConfig) -> Self {
        let i18n = I18n::from_config(resources, config);
        let mut provider = i18n.provider_from_config(config);
        if config.fallback.is_none() {
            provider = provider.with_fallback(DEFAULT_FALLBACK);
        }
        Self { i18n, provider }
    }

    /// The configured instance
    pub const fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Current locale
    pub fn locale(&self) -> LocaleId {
        self.provider.locale()
    }

    /// Render one frame
    pub fn render(&mut self) -> DemoResult<Frame> {
        let i18n = &self.i18n;
        let locale = self.provider.locale();
        let text = self.provider.render(|cx| render_page(i18n, cx))?;
        Ok(Frame {
            locale,
            loading: self.provider.is_loading(),
            text,
        })
    }

    /// Press the switch button.
    ///
    /// The button is part of the page, so it cannot be pressed while the
    /// fallback is shown. Returns whether the locale changed.
    pub fn click_switch(&mut self) -> DemoResult<bool> {
        let i18n = &self.i18n;
        let mut switched = false;
        self.provider.render(|cx| {
            let (locale, set_locale) = i18n.use_locale(cx)?;
            switched = set_locale.set(next_locale(&locale));
            Ok(String::new())
        })?;
        Ok(switched)
    }

    /// Render until the active locale is ready, collecting every frame
    pub async fn render_settled(&mut self) -> DemoResult<Vec<Frame>> {
        let mut frames = vec![self.render()?];
        while self.provider.is_loading() {
            self.provider.settle().await;
            frames.push(self.render()?);
        }
        Ok(frames)
    }

    /// Mount, then press the switch button `switches` times, re-rendering
    /// whenever the locale changes.
    pub async fn run(&mut self, switches: usize) -> DemoResult<Vec<Frame>> {
        info!("Rendering demo page in {}", self.locale());
        let mut frames = self.render_settled().await?;

        for _ in 0..switches {
            if !self.click_switch()? {
                break;
            }
            self.provider.changed().await;
            frames.extend(self.render_settled().await?);
        }

        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_locale_toggles() {
        assert_eq!(next_locale(&LocaleId::from("en")), "vi");
        assert_eq!(next_locale(&LocaleId::from("vi")), "en");
        assert_eq!(next_locale(&LocaleId::from("de")), "vi");
    }

    #[test]
    fn test_messages_match_tables() {
        let app = DemoApp::new(&I18nConfig::default());
        assert!(app.i18n().verify::<Title>().is_ok());
        assert!(app.i18n().verify::<Desc>().is_ok());
        assert!(app.i18n().verify::<SwitchLabel>().is_ok());
    }

    #[test]
    fn test_first_frame_in_english() {
        let mut app = DemoApp::new(&I18nConfig::default());
        let frame = app.render().unwrap();
        assert!(!frame.loading);
        assert_eq!(
            frame.text,
            "Hi!\nLets localize your app with lingo and Rust\n[ Tiếng Việt ]"
        );
    }

    #[test]
    fn test_frame_display() {
        let frame = Frame {
            locale: LocaleId::from("vi"),
            loading: true,
            text: DEFAULT_FALLBACK.to_string(),
        };
        assert_eq!(frame.to_string(), "[vi loading]\nLoading...");
    }
}
