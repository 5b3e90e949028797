//! Tests for layered settings resolution.

use anyhow::{Result, ensure};
use greeter::cli::{OutputFormat, Settings, SettingsOverrides, merge_settings_from};
use ortho_config::figment::providers::Serialized;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn defaults_apply_without_layers() -> Result<()> {
    let settings = merge_settings_from(
        &SettingsOverrides::default(),
        Serialized::defaults(json!({})),
    )?;
    ensure!(settings == Settings::default(), "got {settings:?}");
    ensure!(settings.format == OutputFormat::Json, "json is the default");
    Ok(())
}

#[rstest]
fn environment_overrides_defaults() -> Result<()> {
    let settings = merge_settings_from(
        &SettingsOverrides::default(),
        Serialized::defaults(json!({ "format": "text", "pretty": true })),
    )?;
    ensure!(settings.format == OutputFormat::Text, "got {settings:?}");
    ensure!(settings.pretty, "got {settings:?}");
    ensure!(!settings.verbose, "got {settings:?}");
    Ok(())
}

#[rstest]
fn cli_flags_override_environment() -> Result<()> {
    let overrides = SettingsOverrides {
        format: Some(OutputFormat::Json),
        verbose: Some(true),
        ..SettingsOverrides::default()
    };
    let settings = merge_settings_from(
        &overrides,
        Serialized::defaults(json!({ "format": "text", "pretty": true })),
    )?;
    ensure!(settings.format == OutputFormat::Json, "got {settings:?}");
    ensure!(settings.verbose, "got {settings:?}");
    ensure!(settings.pretty, "unset flags keep the environment value");
    Ok(())
}

#[rstest]
fn invalid_environment_values_are_rejected() -> Result<()> {
    let result = merge_settings_from(
        &SettingsOverrides::default(),
        Serialized::defaults(json!({ "format": "xml" })),
    );
    ensure!(result.is_err(), "xml is not a known format: {result:?}");
    Ok(())
}
