//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! loads the locale table once and dispatches each subcommand against it.

mod output;

use crate::cli::{Cli, Commands, GreetArgs, OutputFormat, Settings};
use crate::locale::{LocaleBundle, LocaleTable};
use crate::locale_resolution::LocaleResolver;
use crate::registration::{GreetingPayload, GreetingRequest};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, info};

/// Execute the parsed [`Cli`] command, writing results to stdout.
///
/// # Errors
///
/// Returns an error if the locale table fails validation, the input is
/// rejected, or stdout cannot be written.
pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_to(cli, settings, &mut handle)
}

/// Execute the parsed [`Cli`] command, writing results to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_to(cli: &Cli, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let table = LocaleTable::builtin().context("load built-in locale table")?;
    debug!(command = ?cli.command, "dispatching command");
    match &cli.command {
        Commands::Greet(args) => handle_greet(LocaleResolver::new(table), args, settings, out),
        Commands::Countries => handle_countries(table, settings, out),
        Commands::Check => handle_check(table, settings, out),
    }
}

fn handle_greet(
    resolver: LocaleResolver<'_>,
    args: &GreetArgs,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    let request = GreetingRequest {
        name: args.name.clone(),
        country: args.country.clone(),
    };
    request.validate()?;
    let resolution = resolver.resolve(&request.country);
    if resolution.is_fallback() {
        info!(country = %request.country, "no locale bundle for country; using English");
    }
    let payload = GreetingPayload::new(resolution.bundle(), &request.name);
    match settings.format {
        OutputFormat::Json => output::write_json(out, &payload, settings.pretty),
        OutputFormat::Text => output::write_line(out, &payload.greeting_message),
    }
}

#[derive(Serialize)]
struct CountryEntry<'a> {
    country: &'a str,
    #[serde(flatten)]
    bundle: &'a LocaleBundle,
}

fn handle_countries(table: &LocaleTable, settings: &Settings, out: &mut impl Write) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            let entries: Vec<CountryEntry<'_>> = table
                .iter()
                .map(|(country, bundle)| CountryEntry { country, bundle })
                .collect();
            output::write_json(out, &entries, settings.pretty)
        }
        OutputFormat::Text => {
            for (country, bundle) in table.iter() {
                let line = format!(
                    "{country}\t{}\t{}\t{}",
                    bundle.locale_tag, bundle.language, bundle.country_localized
                );
                output::write_line(out, &line)?;
            }
            Ok(())
        }
    }
}

fn handle_check(table: &LocaleTable, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let count = table.len();
    match settings.format {
        OutputFormat::Json => output::write_json(
            out,
            &serde_json::json!({ "status": "ok", "countries": count }),
            settings.pretty,
        ),
        OutputFormat::Text => output::write_line(out, &format!("locale table ok: {count} countries")),
    }
}
