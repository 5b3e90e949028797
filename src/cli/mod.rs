//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure, its subcommands, and the
//! layered [`Settings`] merged from defaults, `GREETER_*` environment
//! variables and explicit flags.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ortho_config::figment::Figment;
use ortho_config::figment::Provider;
use ortho_config::figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod parsing;

use parsing::parse_text;

/// Prefix for environment variables read into [`Settings`].
pub const ENV_PREFIX: &str = "GREETER_";

/// Resolve countries to locale bundles and render localized greetings.
#[derive(Debug, Parser)]
#[command(name = "greeter", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Output format for command results.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments accepted by the `greet` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct GreetArgs {
    /// Name of the person to greet.
    #[arg(long, value_name = "NAME", value_parser = parse_text)]
    pub name: String,

    /// Country used to pick the greeting language.
    #[arg(long, value_name = "COUNTRY", value_parser = parse_text)]
    pub country: String,
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Resolve a country and print the greeting payload for a name.
    Greet(GreetArgs),

    /// List supported countries and their locale bundles.
    Countries,

    /// Validate the built-in locale table.
    Check,
}

/// Rendering used for command results on stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON.
    #[default]
    Json,
    /// Plain text lines.
    Text,
}

/// Effective runtime settings after all layers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emit debug-level logs.
    pub verbose: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Output format.
    pub format: OutputFormat,
}

/// Settings explicitly supplied on the command line.
///
/// Unset fields are skipped during serialization so they do not mask
/// lower-precedence layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsOverrides {
    /// `--verbose` was passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// `--pretty` was passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
    /// `--format` was passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl From<&Cli> for SettingsOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose.then_some(true),
            pretty: cli.pretty.then_some(true),
            format: cli.format,
        }
    }
}

/// Merge defaults, `GREETER_*` environment variables and CLI flags.
///
/// # Errors
///
/// Returns an error when an environment value cannot be deserialized into
/// [`Settings`], for example `GREETER_FORMAT=xml`.
pub fn merge_with_config(cli: &Cli) -> Result<Settings> {
    merge_settings_from(&SettingsOverrides::from(cli), Env::prefixed(ENV_PREFIX))
}

/// Merge settings using `environment` in place of the process environment.
///
/// Precedence, lowest first: [`Settings::default`], `environment`,
/// `overrides`.
///
/// # Errors
///
/// Returns an error when the merged layers do not deserialize into
/// [`Settings`].
pub fn merge_settings_from(
    overrides: &SettingsOverrides,
    environment: impl Provider,
) -> Result<Settings> {
    let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(environment)
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("merge configuration layers")?;
    debug!(?settings, "configuration merged");
    Ok(settings)
}
