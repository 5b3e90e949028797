//! The country-keyed locale table.
//!
//! The table is built from literal [`BundleSpec`] rows and validated in one
//! pass. The built-in table is constructed on first use and shared for the
//! life of the process; nothing mutates it afterwards.

use super::bundle::{BundleSpec, LocaleBundle};
use super::data;
use super::error::TableError;
use crate::greeting::GreetingTemplate;
use crate::locale_resolution::canonical_key;
use indexmap::IndexMap;
use indexmap::map::Entry;
use ortho_config::LanguageIdentifier;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN: LazyLock<Result<LocaleTable, TableError>> =
    LazyLock::new(|| LocaleTable::from_entries(data::COUNTRIES));

/// Validated mapping from canonical country key to locale bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    entries: IndexMap<String, LocaleBundle>,
    fallback: LocaleBundle,
}

impl LocaleTable {
    /// Return the process-wide table built from the embedded data set.
    ///
    /// # Errors
    ///
    /// Returns the [`TableError`] found while validating the embedded rows.
    /// The data is static, so an error here is a defect in the crate.
    pub fn builtin() -> Result<&'static Self, TableError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Build a table from `entries` with the English fallback bundle.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] for the first invalid row.
    pub fn from_entries(entries: &[BundleSpec]) -> Result<Self, TableError> {
        Self::with_fallback(entries, &data::ENGLISH_FALLBACK)
    }

    /// Build a table from `entries` and an explicit fallback row.
    ///
    /// The fallback's `country` and `country_localized` fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] for the first invalid row, including the
    /// fallback.
    pub fn with_fallback(entries: &[BundleSpec], fallback: &BundleSpec) -> Result<Self, TableError> {
        let fallback = build_bundle(fallback, "fallback")?;
        let mut table = IndexMap::with_capacity(entries.len());
        for spec in entries {
            let key = canonical_key(spec.country);
            if key.is_empty() {
                return Err(TableError::EmptyField {
                    country: spec.country.to_owned(),
                    field: "country",
                });
            }
            if spec.country_localized.trim().is_empty() {
                return Err(TableError::EmptyField {
                    country: spec.country.to_owned(),
                    field: "country_localized",
                });
            }
            let bundle = build_bundle(spec, spec.country)?;
            match table.entry(key) {
                Entry::Occupied(slot) => {
                    return Err(TableError::DuplicateCountry {
                        key: slot.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(bundle);
                }
            }
        }
        debug!(entries = table.len(), "locale table loaded");
        Ok(Self {
            entries: table,
            fallback,
        })
    }

    /// Look up a bundle by canonical key.
    ///
    /// `key` must already be normalized; use
    /// [`LocaleResolver`](crate::locale_resolution::LocaleResolver) for raw
    /// user input.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LocaleBundle> {
        self.entries.get(key)
    }

    /// Build the fallback bundle, echoing the trimmed `country` text.
    #[must_use]
    pub fn fallback(&self, country: &str) -> LocaleBundle {
        LocaleBundle {
            country_localized: Cow::Owned(country.trim().to_owned()),
            ..self.fallback.clone()
        }
    }

    /// Number of countries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the table has no countries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, bundle)` pairs in data-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleBundle)> {
        self.entries.iter().map(|(key, bundle)| (key.as_str(), bundle))
    }
}

fn build_bundle(spec: &BundleSpec, country: &str) -> Result<LocaleBundle, TableError> {
    let required = [
        ("language", spec.language),
        ("language_localized", spec.language_localized),
        ("greeting_word", spec.greeting_word),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(TableError::EmptyField {
            country: country.to_owned(),
            field,
        });
    }
    if let Some((label, _)) = spec.labels.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(TableError::EmptyLabel {
            country: country.to_owned(),
            label,
        });
    }
    let tag = spec.locale_tag.trim();
    if tag.is_empty() || LanguageIdentifier::from_str(tag).is_err() {
        return Err(TableError::InvalidLocaleTag {
            country: country.to_owned(),
            tag: spec.locale_tag.to_owned(),
        });
    }
    let template = GreetingTemplate::parse(spec.greeting_template).map_err(|source| {
        TableError::InvalidTemplate {
            country: country.to_owned(),
            source,
        }
    })?;
    Ok(LocaleBundle::from_spec(spec, template))
}
