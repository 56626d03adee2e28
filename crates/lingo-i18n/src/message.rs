//! Typed messages: parameter keys checked by the compiler
//!
//! [`messages!`](crate::messages) declares one type per translation id. A
//! message whose template has no placeholders becomes a unit struct and can
//! only be rendered without params; a message with placeholders becomes a
//! struct with one `String` field per placeholder, so forgetting or
//! misspelling a parameter is a compile error.
//!
//! ```rust
//! use lingo_i18n::{messages, I18n, ResourceTable, TranslationMap};
//!
//! messages! {
//!     Title = "title";
//!     Desc = "desc" { lib, framework };
//! }
//!
//! let i18n = I18n::new(ResourceTable::new().with_static(
//!     "en",
//!     TranslationMap::from([
//!         ("title", "Hi!"),
//!         ("desc", "Lets localize your app with {lib} and {framework}"),
//!     ]),
//! ));
//! i18n.verify::<Title>().unwrap();
//! i18n.verify::<Desc>().unwrap();
//!
//! let mut provider = i18n.provider("en");
//! let text = provider
//!     .render(|cx| {
//!         let t = i18n.use_t(cx)?;
//!         t.message(&Desc {
//!             lib: "lingo".into(),
//!             framework: "Rust".into(),
//!         })
//!     })
//!     .unwrap();
//! assert_eq!(text, "Lets localize your app with lingo and Rust");
//! ```

use crate::resource::Params;

/// A translation id together with the parameters its template needs.
pub trait Message {
    /// Translation id
    const ID: &'static str;

    /// Placeholder names the template is expected to contain
    const PLACEHOLDERS: &'static [&'static str];

    /// Parameters to interpolate, `None` for templates without placeholders
    fn params(&self) -> Option<Params>;
}

/// Declare typed messages.
///
/// ```rust
/// lingo_i18n::messages! {
///     /// Page heading
///     Title = "title";
///     Greeting = "greeting" { name };
/// }
///
/// let _ = Title;
/// let _ = Greeting { name: "Ada".to_string() };
/// ```
#[macro_export]
macro_rules! messages {
    ($( $(#[$meta:meta])* $name:ident = $id:literal $({ $($param:ident),+ $(,)? })? ; )*) => {
        $(
            $crate::__message! { $(#[$meta])* $name = $id $(, $($param),+)? }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    ($(#[$meta:meta])* $name:ident = $id:literal) => {
        $(#[$meta])*
        #[doc = concat!("Translation `", $id, "`.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::Message for $name {
            const ID: &'static str = $id;
            const PLACEHOLDERS: &'static [&'static str] = &[];

            fn params(&self) -> Option<$crate::Params> {
                None
            }
        }
    };
    ($(#[$meta:meta])* $name:ident = $id:literal, $($param:ident),+) => {
        $(#[$meta])*
        #[doc = concat!("Translation `", $id, "`.")]
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(
                #[doc = concat!("Value for `{", stringify!($param), "}`.")]
                pub $param: String,
            )+
        }

        impl $crate::Message for $name {
            const ID: &'static str = $id;
            const PLACEHOLDERS: &'static [&'static str] = &[$(stringify!($param)),+];

            fn params(&self) -> Option<$crate::Params> {
                let mut params = $crate::Params::new();
                $(
                    params.insert(stringify!($param), &self.$param);
                )+
                Some(params)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::TranslationMap;
    use crate::I18nError;
    use lingo_common::test_utils::translation_fixtures;
    use lingo_common::LocaleId;

    crate::messages! {
        Title = "title";
        Desc = "desc" { lib, framework };
        /// Declared with a parameter its template lacks
        WrongDesc = "desc" { lib };
    }

    #[test]
    fn test_unit_message_has_no_params() {
        assert_eq!(Title::ID, "title");
        assert!(Title::PLACEHOLDERS.is_empty());
        assert_eq!(Title.params(), None);
    }

    #[test]
    fn test_struct_message_params() {
        let desc = Desc {
            lib: "lingo".to_string(),
            framework: "Rust".to_string(),
        };
        let params = desc.params().unwrap();
        assert_eq!(params.get("lib"), Some("lingo"));
        assert_eq!(params.get("framework"), Some("Rust"));
        assert_eq!(Desc::PLACEHOLDERS, &["lib", "framework"]);
    }

    #[test]
    fn test_verify_against_table() {
        let map = TranslationMap::from(translation_fixtures::VI);
        let vi = LocaleId::from("vi");

        assert!(map.verify::<Title>(&vi).is_ok());
        assert!(map.verify::<Desc>(&vi).is_ok());
        assert!(matches!(
            map.verify::<WrongDesc>(&vi),
            Err(I18nError::PlaceholderMismatch { ref found, .. }) if found == &["framework", "lib"]
        ));
    }
}
