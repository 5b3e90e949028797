//! Registration input validation and response shaping.
//!
//! The storage and HTTP layers live elsewhere; this module defines the data
//! that crosses their boundary with the greeting engine. Validation mirrors
//! the thresholds the registration form enforces, and the response types
//! serialize to the flat JSON object returned to clients.

// Scoped suppression for the derive-macro lint noise described in
// `locale::error`.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use crate::greeting::format_greeting;
use crate::locale::{FieldLabels, LocaleBundle};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use time::OffsetDateTime;

/// Minimum length of a person's name, in characters.
pub const MIN_NAME_LEN: usize = 2;
/// Minimum length of an address, in characters.
pub const MIN_ADDRESS_LEN: usize = 5;
/// Minimum length of a country, in characters.
pub const MIN_COUNTRY_LEN: usize = 2;

/// Form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The person's name.
    Name,
    /// The postal address.
    Address,
    /// The country.
    Country,
}

impl Field {
    const fn min_len(self) -> usize {
        match self {
            Self::Name => MIN_NAME_LEN,
            Self::Address => MIN_ADDRESS_LEN,
            Self::Country => MIN_COUNTRY_LEN,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Country => "Country",
        }
    }
}

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldProblem {
    /// Field that failed.
    pub field: Field,
    /// Human-readable message, for example `Name must be at least 2 characters.`
    pub message: String,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validation failure listing every field that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{}", join_messages(.problems))]
#[diagnostic(
    code(greeter::registration::invalid),
    help("fix the listed fields and submit again")
)]
pub struct RegistrationError {
    /// Failed checks in form order.
    pub problems: Vec<FieldProblem>,
}

impl RegistrationError {
    /// Messages in form order, as the service reports them.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.problems.iter().map(|p| p.message.as_str()).collect()
    }
}

fn join_messages(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(|p| p.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn check(field: Field, value: &str, problems: &mut Vec<FieldProblem>) {
    let min = field.min_len();
    if value.trim().chars().count() < min {
        problems.push(FieldProblem {
            field,
            message: format!("{} must be at least {min} characters.", field.label()),
        });
    }
}

fn finish(problems: Vec<FieldProblem>) -> Result<(), RegistrationError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(RegistrationError { problems })
    }
}

/// A submitted registration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registration {
    /// Person's name.
    #[serde(default)]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Free-text country.
    #[serde(default)]
    pub country: String,
}

impl Registration {
    /// Check every field, reporting all failures together.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when any trimmed field is shorter than
    /// its minimum length.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let mut problems = Vec::new();
        check(Field::Name, &self.name, &mut problems);
        check(Field::Address, &self.address, &mut problems);
        check(Field::Country, &self.country, &mut problems);
        finish(problems)
    }

    /// Return a copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            address: self.address.trim().to_owned(),
            country: self.country.trim().to_owned(),
        }
    }
}

/// The two fields needed to produce a greeting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GreetingRequest {
    /// Person's name.
    pub name: String,
    /// Free-text country.
    pub country: String,
}

impl GreetingRequest {
    /// Check the name and country fields.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when either trimmed field is too short.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let mut problems = Vec::new();
        check(Field::Name, &self.name, &mut problems);
        check(Field::Country, &self.country, &mut problems);
        finish(problems)
    }
}

impl From<&Registration> for GreetingRequest {
    fn from(registration: &Registration) -> Self {
        Self {
            name: registration.name.clone(),
            country: registration.country.clone(),
        }
    }
}

/// Greeting fields embedded in a registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingPayload {
    /// Bare greeting word.
    pub greeting: &'static str,
    /// Rendered greeting sentence.
    pub greeting_message: String,
    /// Language name in English.
    pub language: &'static str,
    /// Language name in that language.
    pub language_localized: &'static str,
    /// Language-region tag.
    pub locale: &'static str,
    /// Country name in its own language.
    pub country_localized: String,
    /// Form labels in the bundle's language.
    pub labels: FieldLabels,
}

impl GreetingPayload {
    /// Build the payload for `name` from a resolved bundle.
    #[must_use]
    pub fn new(bundle: &LocaleBundle, name: &str) -> Self {
        Self {
            greeting: bundle.greeting_word,
            greeting_message: format_greeting(bundle, name),
            language: bundle.language,
            language_localized: bundle.language_localized,
            locale: bundle.locale_tag,
            country_localized: bundle.country_localized.clone().into_owned(),
            labels: bundle.labels,
        }
    }
}

/// A stored registration row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    /// Row identifier assigned by the store.
    pub id: u64,
    /// Trimmed name.
    pub name: String,
    /// Trimmed address.
    pub address: String,
    /// Trimmed country text as submitted.
    pub country: String,
    /// Insertion time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl RegistrationRecord {
    /// Build a record from a validated registration.
    #[must_use]
    pub fn new(id: u64, registration: &Registration, created_at: OffsetDateTime) -> Self {
        let trimmed = registration.trimmed();
        Self {
            id,
            name: trimmed.name,
            address: trimmed.address,
            country: trimmed.country,
            created_at,
        }
    }
}

/// A stored record merged with its greeting into one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationResponse {
    /// Persisted fields.
    #[serde(flatten)]
    pub record: RegistrationRecord,
    /// Greeting fields derived from the record's country.
    #[serde(flatten)]
    pub greeting: GreetingPayload,
}

impl RegistrationResponse {
    /// Pair `record` with the greeting resolved for its country.
    #[must_use]
    pub fn new(record: RegistrationRecord, bundle: &LocaleBundle) -> Self {
        let greeting = GreetingPayload::new(bundle, &record.name);
        Self { record, greeting }
    }
}
