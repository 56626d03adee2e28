//! Lazy locale loading: fallback while pending, caching, failures

use futures::future::BoxFuture;
use lingo_common::test_utils::{init_test_logging, translation_fixtures, CallCounter};
use lingo_i18n::{I18n, I18nError, I18nOptions, Provider, ResourceTable, Translate, TranslationMap};
use std::time::Duration;

type SlowLoad = BoxFuture<'static, Result<TranslationMap, std::io::Error>>;

const FALLBACK: &str = "Loading...";

/// Deferred loader that sleeps briefly, counting each invocation
fn slow_loader(
    counter: &CallCounter,
    pairs: &'static [(&'static str, &'static str)],
) -> impl Fn() -> SlowLoad + Send + Sync + 'static {
    let counter = counter.clone();
    move || -> SlowLoad {
        counter.hit();
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(TranslationMap::from(pairs))
        })
    }
}

struct Fixture {
    i18n: I18n,
    en_loads: CallCounter,
    vi_loads: CallCounter,
}

fn create_fixture(options: I18nOptions) -> Fixture {
    init_test_logging();
    let en_loads = CallCounter::new();
    let vi_loads = CallCounter::new();
    let i18n = I18n::with_options(
        ResourceTable::new()
            .with_deferred("en", slow_loader(&en_loads, translation_fixtures::EN))
            .with_deferred("vi", slow_loader(&vi_loads, translation_fixtures::VI)),
        options,
    );
    Fixture {
        i18n,
        en_loads,
        vi_loads,
    }
}

fn render_title(i18n: &I18n, provider: &mut Provider) -> String {
    let title = Translate::new("title");
    provider.render(|cx| title.render(i18n, cx)).unwrap()
}

#[tokio::test]
async fn test_renders_fallback_while_loading() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("en").with_fallback(FALLBACK);

    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);
    assert!(provider.is_loading());
}

#[tokio::test]
async fn test_fallback_defaults_to_empty() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("en");

    let mut children_ran = false;
    let text = provider
        .render(|_| {
            children_ran = true;
            Ok("content".to_string())
        })
        .unwrap();

    assert_eq!(text, "");
    assert!(!children_ran);
}

#[tokio::test]
async fn test_renders_translations_after_loaded() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("en").with_fallback(FALLBACK);

    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);
    provider.settle().await;

    assert_eq!(render_title(&fx.i18n, &mut provider), "Hi!");
    assert!(!provider.is_loading());
    assert_eq!(fx.en_loads.count(), 1);

    // Re-rendering the same mounted subtree never reloads
    for _ in 0..5 {
        assert_eq!(render_title(&fx.i18n, &mut provider), "Hi!");
    }
    assert_eq!(fx.en_loads.count(), 1);
}

#[tokio::test]
async fn test_revisiting_cached_locale_skips_loader_and_fallback() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("en").with_fallback(FALLBACK);
    render_title(&fx.i18n, &mut provider);
    provider.settle().await;

    // Switch in: vi loads, fallback shown instead of stale English
    provider.setter().set("vi");
    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);
    provider.settle().await;
    assert_eq!(render_title(&fx.i18n, &mut provider), "Xin chào!");

    // Switch back: served from the cache immediately
    provider.setter().set("en");
    assert_eq!(render_title(&fx.i18n, &mut provider), "Hi!");
    provider.setter().set("vi");
    assert_eq!(render_title(&fx.i18n, &mut provider), "Xin chào!");

    assert_eq!(fx.en_loads.count(), 1);
    assert_eq!(fx.vi_loads.count(), 1);
    assert_eq!(fx.i18n.cache().unwrap().loaded_locales(), vec!["en", "vi"]);
}

#[tokio::test]
async fn test_cache_is_shared_across_providers() {
    let fx = create_fixture(I18nOptions::default());
    let mut first = fx.i18n.provider("en");
    render_title(&fx.i18n, &mut first);
    first.settle().await;
    drop(first);

    let mut second = fx.i18n.provider("en").with_fallback(FALLBACK);
    assert_eq!(render_title(&fx.i18n, &mut second), "Hi!");
    assert_eq!(fx.en_loads.count(), 1);
}

#[tokio::test]
async fn test_without_cache_revisit_reloads() {
    let fx = create_fixture(I18nOptions {
        cache_loaded_locales: false,
    });
    assert!(fx.i18n.cache().is_none());

    let mut provider = fx.i18n.provider("en").with_fallback(FALLBACK);
    render_title(&fx.i18n, &mut provider);
    provider.settle().await;
    assert_eq!(render_title(&fx.i18n, &mut provider), "Hi!");

    provider.setter().set("vi");
    render_title(&fx.i18n, &mut provider);
    provider.settle().await;

    provider.setter().set("en");
    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);
    provider.settle().await;
    assert_eq!(render_title(&fx.i18n, &mut provider), "Hi!");

    assert_eq!(fx.en_loads.count(), 2);
    assert_eq!(fx.vi_loads.count(), 1);
}

#[tokio::test]
async fn test_switching_before_load_completes() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("en").with_fallback(FALLBACK);
    render_title(&fx.i18n, &mut provider);

    // Leave en while it is still loading, then come back
    provider.setter().set("vi");
    render_title(&fx.i18n, &mut provider);
    provider.setter().set("en");
    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);
    provider.settle().await;
    assert_eq!(render_title(&fx.i18n, &mut provider), "Hi!");

    // The abandoned first load never resolved, so en was loaded again
    assert_eq!(fx.en_loads.count(), 2);
}

#[tokio::test]
async fn test_unknown_locale_during_load_does_not_stall_boundary() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("vi").with_fallback(FALLBACK);
    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);

    provider.setter().set("fr");
    let title = Translate::new("title");
    let err = provider.render(|cx| title.render(&fx.i18n, cx)).unwrap_err();
    assert!(matches!(err, I18nError::UnknownLocale(ref locale) if locale == "fr"));

    provider.setter().set("vi");
    assert_eq!(render_title(&fx.i18n, &mut provider), FALLBACK);
    provider.settle().await;
    assert_eq!(render_title(&fx.i18n, &mut provider), "Xin chào!");
    assert!(!provider.is_loading());
    assert_eq!(fx.vi_loads.count(), 1);
}

#[tokio::test]
async fn test_loader_failure_surfaces_and_retries() {
    init_test_logging();
    let attempts = CallCounter::new();
    let counter = attempts.clone();
    let i18n = I18n::new(ResourceTable::new().with_deferred("en", move || {
        counter.hit();
        let attempt = counter.count();
        async move {
            if attempt == 1 {
                Err(std::io::Error::other("network unreachable"))
            } else {
                Ok(TranslationMap::from(translation_fixtures::EN))
            }
        }
    }));

    let mut provider = i18n.provider("en").with_fallback(FALLBACK);
    assert_eq!(render_title(&i18n, &mut provider), FALLBACK);
    provider.settle().await;

    let title = Translate::new("title");
    let err = provider.render(|cx| title.render(&i18n, cx)).unwrap_err();
    assert!(matches!(err, I18nError::LoaderFailure { ref locale, .. } if locale == "en"));
    assert!(!i18n.cache().unwrap().contains("en"));

    // Next render retries the loader
    assert_eq!(render_title(&i18n, &mut provider), FALLBACK);
    provider.settle().await;
    assert_eq!(render_title(&i18n, &mut provider), "Hi!");
    assert_eq!(attempts.count(), 2);
}

#[tokio::test]
async fn test_host_loop_rerenders_on_locale_change() {
    let fx = create_fixture(I18nOptions::default());
    let mut provider = fx.i18n.provider("en").with_fallback(FALLBACK);
    let setter = provider.setter();

    let mut frames = vec![render_title(&fx.i18n, &mut provider)];
    provider.settle().await;
    frames.push(render_title(&fx.i18n, &mut provider));

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        setter.set("vi");
    });

    provider.changed().await;
    frames.push(render_title(&fx.i18n, &mut provider));
    provider.settle().await;
    frames.push(render_title(&fx.i18n, &mut provider));

    assert_eq!(frames, vec![FALLBACK, "Hi!", FALLBACK, "Xin chào!"]);
}
