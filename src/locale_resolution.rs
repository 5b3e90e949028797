//! Country-to-locale resolution.
//!
//! Free-text country input is normalized to a canonical key and matched
//! exactly against the [`LocaleTable`]. Resolution never fails: unknown
//! countries receive the English fallback bundle with the caller's text
//! echoed back as the localized country name.

use crate::locale::{LocaleBundle, LocaleTable, TableError};
use tracing::trace;

/// Normalize raw country text into a table key.
///
/// Surrounding whitespace is trimmed and the result is lowercased. No alias
/// or fuzzy matching is applied.
///
/// # Examples
///
/// ```rust
/// use greeter::locale_resolution::canonical_key;
///
/// assert_eq!(canonical_key("  UNITED States "), "united states");
/// assert_eq!(canonical_key("USA"), "usa");
/// ```
#[must_use]
pub fn canonical_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Outcome of resolving a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// The country matched a table entry.
    Matched {
        /// Canonical key that matched.
        key: String,
        /// Bundle stored in the table.
        bundle: &'t LocaleBundle,
    },
    /// No entry matched; the English fallback was built for this input.
    Fallback(LocaleBundle),
}

impl Resolution<'_> {
    /// Borrow the resolved bundle.
    #[must_use]
    pub fn bundle(&self) -> &LocaleBundle {
        match self {
            Self::Matched { bundle, .. } => bundle,
            Self::Fallback(bundle) => bundle,
        }
    }

    /// Return `true` when the fallback bundle was used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Take ownership of the resolved bundle, cloning table entries.
    #[must_use]
    pub fn into_bundle(self) -> LocaleBundle {
        match self {
            Self::Matched { bundle, .. } => bundle.clone(),
            Self::Fallback(bundle) => bundle,
        }
    }
}

/// Resolves country text against a locale table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver<'t> {
    table: &'t LocaleTable,
}

impl<'t> LocaleResolver<'t> {
    /// Create a resolver over `table`.
    #[must_use]
    pub const fn new(table: &'t LocaleTable) -> Self {
        Self { table }
    }

    /// The table this resolver reads from.
    #[must_use]
    pub const fn table(&self) -> &'t LocaleTable {
        self.table
    }

    /// Resolve `country` to a bundle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use greeter::locale_resolution::LocaleResolver;
    ///
    /// let resolver = LocaleResolver::builtin()?;
    /// assert_eq!(resolver.resolve("  JAPAN ").bundle().locale_tag, "ja-JP");
    ///
    /// let unknown = resolver.resolve(" Atlantis ");
    /// assert!(unknown.is_fallback());
    /// assert_eq!(unknown.bundle().country_localized, "Atlantis");
    /// # Ok::<(), greeter::locale::TableError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, country: &str) -> Resolution<'t> {
        let key = canonical_key(country);
        if let Some(bundle) = self.table.get(&key) {
            trace!(country = %key, locale = bundle.locale_tag, "country matched");
            return Resolution::Matched { key, bundle };
        }
        trace!(country = %key, "country unknown; using fallback");
        Resolution::Fallback(self.table.fallback(country))
    }

    /// Resolve `country` and return an owned bundle.
    #[must_use]
    pub fn resolve_bundle(&self, country: &str) -> LocaleBundle {
        self.resolve(country).into_bundle()
    }
}

impl LocaleResolver<'static> {
    /// Create a resolver over the built-in table.
    ///
    /// # Errors
    ///
    /// Returns the [`TableError`] raised while loading the embedded data.
    pub fn builtin() -> Result<Self, TableError> {
        LocaleTable::builtin().map(Self::new)
    }
}
