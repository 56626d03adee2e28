//! `{param}` placeholder interpolation

use crate::resource::Params;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::warn;

/// Placeholder pattern: a brace, the shortest non-empty name, a closing brace.
pub static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.+?\}").expect("Invalid placeholder regex pattern"));

/// Resolve `template` against `params`.
///
/// Without params the template comes back untouched, placeholders included.
/// With params every placeholder is replaced in a single left-to-right pass;
/// a name missing from `params` becomes the empty string.
pub fn interpolate<'a>(template: &'a str, params: Option<&Params>) -> Cow<'a, str> {
    let Some(params) = params else {
        return Cow::Borrowed(template);
    };

    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures<'_>| {
        let name = strip_braces(&caps[0]);
        params.get(name).map_or_else(
            || {
                warn!("No value for placeholder '{}', substituting empty string", name);
                String::new()
            },
            str::to_string,
        )
    })
}

/// Placeholder names in `template`, in order of appearance (duplicates kept).
pub fn placeholder_names(template: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(template)
        .map(|m| strip_braces(m.as_str()))
        .collect()
}

fn strip_braces(placeholder: &str) -> &str {
    &placeholder[1..placeholder.len() - 1]
}
