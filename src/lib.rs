//! Greeter core library.
//!
//! This library resolves free-text country names to locale bundles, renders
//! greeting sentences from their templates, and shapes registration data
//! for the service that embeds it.

pub mod cli;
pub mod greeting;
pub mod locale;
pub mod locale_resolution;
pub mod registration;
pub mod runner;
