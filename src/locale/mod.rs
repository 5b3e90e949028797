//! Locale bundles and the static country table.
//!
//! [`LocaleTable::builtin`] exposes the embedded data set. Each row becomes a
//! [`LocaleBundle`] once its template, labels and locale tag pass validation.

mod bundle;
mod data;
mod error;
mod table;

pub use bundle::{BundleSpec, FieldLabels, LocaleBundle};
pub use data::{COUNTRIES, ENGLISH_FALLBACK};
pub use error::TableError;
pub use table::LocaleTable;
