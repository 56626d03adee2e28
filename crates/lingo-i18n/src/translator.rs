//! Translation lookup and the declarative translation unit

use crate::error::{I18nError, I18nResult};
use crate::interpolate::interpolate;
use crate::manager::I18n;
use crate::message::Message;
use crate::provider::Scope;
use crate::resource::{Params, TranslationMap};
use lingo_common::{truncate_string, LocaleId};
use std::sync::Arc;
use tracing::{trace, warn};

/// Lookup function over one resolved translation table.
///
/// Obtained from [`I18n::use_t`]; the table is fixed for the render that
/// produced it.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: LocaleId,
    translations: Arc<TranslationMap>,
}

impl Translator {
    pub(crate) fn new(locale: LocaleId, translations: Arc<TranslationMap>) -> Self {
        Self {
            locale,
            translations,
        }
    }

    /// Locale the table belongs to
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Translate `id`, interpolating `params` when given.
    ///
    /// A missing id read without params yields an empty string (logged at
    /// warn level). A missing id read with params is an error, since there is
    /// no template to interpolate into.
    pub fn t(&self, id: &str, params: Option<&Params>) -> I18nResult<String> {
        match self.try_t(id, params) {
            Err(err @ I18nError::MissingTranslationKey { .. }) if params.is_none() => {
                warn!("{}", err);
                Ok(String::new())
            }
            result => result,
        }
    }

    /// Like [`Translator::t`] but reports a missing id even without params.
    pub fn try_t(&self, id: &str, params: Option<&Params>) -> I18nResult<String> {
        let template = self
            .translations
            .get(id)
            .ok_or_else(|| I18nError::MissingTranslationKey {
                locale: self.locale.clone(),
                key: id.to_string(),
            })?;

        if params.is_none() && template.contains('{') {
            trace!(
                "Rendering '{}' without params: {}",
                id,
                truncate_string(template, 64)
            );
        }

        Ok(interpolate(template, params).into_owned())
    }

    /// Translate a typed message.
    pub fn message<M: Message>(&self, message: &M) -> I18nResult<String> {
        self.t(M::ID, message.params().as_ref())
    }
}

/// Declarative translation unit: renders one id with optional params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translate {
    id: String,
    params: Option<Params>,
}

impl Translate {
    /// Unit rendering `id` without params
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: None,
        }
    }

    /// Unit rendering a typed message
    pub fn message<M: Message>(message: &M) -> Self {
        Self {
            id: M::ID.to_string(),
            params: message.params(),
        }
    }

    /// Attach params
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Translation id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render within `cx`
    pub fn render(&self, i18n: &I18n, cx: &Scope) -> I18nResult<String> {
        i18n.use_t(cx)?.t(&self.id, self.params.as_ref())
    }
}
