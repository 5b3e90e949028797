//! Locale bundle value types.

use crate::greeting::{GreetingTemplate, format_greeting};
use serde::Serialize;
use std::borrow::Cow;

/// Field labels shown next to the registration form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldLabels {
    /// Label for the person's name.
    pub name: &'static str,
    /// Label for the postal address.
    pub address: &'static str,
    /// Label for the country.
    pub country: &'static str,
    /// Label for the language.
    pub language: &'static str,
}

impl FieldLabels {
    /// English labels used by the fallback bundle.
    pub const ENGLISH: Self = Self {
        name: "Name",
        address: "Address",
        country: "Country",
        language: "Language",
    };

    /// Iterate `(field, label)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("name", self.name),
            ("address", self.address),
            ("country", self.country),
            ("language", self.language),
        ]
        .into_iter()
    }
}

/// Literal row of the locale data set, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleSpec {
    /// Country name in English; normalized to form the table key.
    pub country: &'static str,
    /// Language name in English.
    pub language: &'static str,
    /// Language name written in that language.
    pub language_localized: &'static str,
    /// Bare greeting word.
    pub greeting_word: &'static str,
    /// Template holding `{greeting}` and `{name}`.
    pub greeting_template: &'static str,
    /// BCP 47 language-region tag.
    pub locale_tag: &'static str,
    /// Country name in its own language.
    pub country_localized: &'static str,
    /// Form labels in the bundle's language.
    pub labels: FieldLabels,
}

/// Locale data resolved for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBundle {
    /// Language name in English.
    pub language: &'static str,
    /// Language name written in that language.
    pub language_localized: &'static str,
    /// Bare greeting word, for example `Bonjour`.
    pub greeting_word: &'static str,
    /// Validated greeting sentence template.
    pub greeting_template: GreetingTemplate,
    /// Language-region tag for caller-side rendering.
    pub locale_tag: &'static str,
    /// Country name in its own language, or the caller's text on fallback.
    pub country_localized: Cow<'static, str>,
    /// Form labels in the bundle's language.
    pub labels: FieldLabels,
}

impl LocaleBundle {
    pub(crate) fn from_spec(spec: &BundleSpec, greeting_template: GreetingTemplate) -> Self {
        Self {
            language: spec.language,
            language_localized: spec.language_localized,
            greeting_word: spec.greeting_word,
            greeting_template,
            locale_tag: spec.locale_tag,
            country_localized: Cow::Borrowed(spec.country_localized),
            labels: spec.labels,
        }
    }

    /// Render this bundle's greeting for `name`.
    #[must_use]
    pub fn greet(&self, name: &str) -> String {
        format_greeting(self, name)
    }
}
