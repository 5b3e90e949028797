//! Errors raised while loading a locale table.
//!
//! Kept in its own submodule so the lint suppression needed around the
//! `thiserror`/`miette` derives stays narrowly scoped.

// The miette/thiserror derives trip `unused_assignments` on some toolchains
// and not others, so `#[expect]` cannot be used here.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use crate::greeting::TemplateError;
use miette::Diagnostic;
use thiserror::Error;

/// Defects found in the literal locale data set.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TableError {
    /// A bundle's greeting template is malformed.
    #[error("locale bundle for '{country}' has an invalid greeting template")]
    #[diagnostic(
        code(greeter::table::invalid_template),
        help("templates must contain {{greeting}} and {{name}} exactly once")
    )]
    InvalidTemplate {
        /// Country the bundle belongs to.
        country: String,
        /// Underlying template defect.
        source: TemplateError,
    },
    /// A required text field is empty.
    #[error("locale bundle for '{country}' has an empty {field} field")]
    #[diagnostic(code(greeter::table::empty_field))]
    EmptyField {
        /// Country the bundle belongs to.
        country: String,
        /// Name of the empty field.
        field: &'static str,
    },
    /// One of the four form labels is empty.
    #[error("locale bundle for '{country}' has an empty '{label}' label")]
    #[diagnostic(
        code(greeter::table::empty_label),
        help("every bundle needs name, address, country and language labels")
    )]
    EmptyLabel {
        /// Country the bundle belongs to.
        country: String,
        /// Label key that is empty.
        label: &'static str,
    },
    /// The locale tag is not a well-formed language identifier.
    #[error("locale bundle for '{country}' has invalid locale tag '{tag}'")]
    #[diagnostic(code(greeter::table::invalid_locale_tag))]
    InvalidLocaleTag {
        /// Country the bundle belongs to.
        country: String,
        /// Offending tag.
        tag: String,
    },
    /// Two rows normalize to the same lookup key.
    #[error("country key '{key}' is defined more than once")]
    #[diagnostic(code(greeter::table::duplicate_country))]
    DuplicateCountry {
        /// Canonical key shared by both rows.
        key: String,
    },
}
