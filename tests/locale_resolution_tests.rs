//! Unit tests for country-to-locale resolution.

use anyhow::{Context, Result, ensure};
use greeter::locale::LocaleTable;
use greeter::locale_resolution::{LocaleResolver, Resolution, canonical_key};
use rstest::rstest;

fn builtin_resolver() -> Result<LocaleResolver<'static>> {
    LocaleResolver::builtin().context("load built-in table")
}

#[rstest]
#[case("japan", "Japanese", "こんにちは", "ja-JP", "日本")]
#[case("Spain", "Spanish", "Hola", "es-ES", "España")]
#[case("France", "French", "Bonjour", "fr-FR", "France")]
#[case("korea", "Korean", "안녕하세요", "ko-KR", "대한민국")]
#[case("India", "Hindi", "नमस्ते", "hi-IN", "भारत")]
#[case("united kingdom", "English", "Hello", "en-GB", "United Kingdom")]
fn resolves_known_countries(
    #[case] country: &str,
    #[case] language: &str,
    #[case] greeting: &str,
    #[case] locale: &str,
    #[case] localized: &str,
) -> Result<()> {
    let resolver = builtin_resolver()?;
    let resolution = resolver.resolve(country);
    ensure!(!resolution.is_fallback(), "{country} should match a table entry");
    let bundle = resolution.bundle();
    ensure!(bundle.language == language, "language for {country}: {bundle:?}");
    ensure!(bundle.greeting_word == greeting, "greeting for {country}: {bundle:?}");
    ensure!(bundle.locale_tag == locale, "locale for {country}: {bundle:?}");
    ensure!(
        bundle.country_localized == localized,
        "localized country for {country}: {bundle:?}"
    );
    Ok(())
}

#[rstest]
#[case("  JAPAN ", "japan")]
#[case("  UNITED STATES  ", "united states")]
#[case("\tBrazil\n", "brazil")]
#[case("GeRmAnY", "germany")]
fn normalization_matches_canonical_input(
    #[case] raw: &str,
    #[case] canonical: &str,
) -> Result<()> {
    let resolver = builtin_resolver()?;
    let variant = resolver.resolve(raw);
    let expected = resolver.resolve(canonical);
    ensure!(
        variant == expected,
        "expected {raw:?} to resolve like {canonical:?}: {variant:?} vs {expected:?}"
    );
    ensure!(
        matches!(&variant, Resolution::Matched { key, .. } if key == canonical),
        "expected matched key {canonical:?}, got {variant:?}"
    );
    Ok(())
}

#[rstest]
#[case("Atlantis", "Atlantis")]
#[case("  Narnia  ", "Narnia")]
#[case("USA", "USA")]
#[case("Nippon 日本", "Nippon 日本")]
fn unknown_countries_echo_trimmed_input(
    #[case] raw: &str,
    #[case] echoed: &str,
) -> Result<()> {
    let resolver = builtin_resolver()?;
    let resolution = resolver.resolve(raw);
    ensure!(resolution.is_fallback(), "{raw:?} should fall back");
    let bundle = resolution.bundle();
    ensure!(bundle.language == "English", "fallback language: {bundle:?}");
    ensure!(
        bundle.language_localized == "English",
        "fallback localized language: {bundle:?}"
    );
    ensure!(bundle.greeting_word == "Hello", "fallback greeting: {bundle:?}");
    ensure!(bundle.locale_tag == "en-US", "fallback locale: {bundle:?}");
    ensure!(
        bundle.greeting_template.as_str() == "{greeting}, {name}!",
        "fallback template: {bundle:?}"
    );
    ensure!(
        bundle.country_localized == echoed,
        "expected {echoed:?}, got {:?}",
        bundle.country_localized
    );
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("ÉIRE")]
#[case("🇯🇵")]
fn resolution_is_total(#[case] raw: &str) -> Result<()> {
    let resolver = builtin_resolver()?;
    let bundle = resolver.resolve_bundle(raw);
    ensure!(!bundle.language.is_empty(), "language populated for {raw:?}");
    ensure!(!bundle.greeting_word.is_empty(), "greeting populated for {raw:?}");
    ensure!(!bundle.locale_tag.is_empty(), "locale populated for {raw:?}");
    ensure!(
        bundle.labels.iter().all(|(_, label)| !label.is_empty()),
        "labels populated for {raw:?}"
    );
    ensure!(
        bundle.country_localized == raw.trim(),
        "fallback echoes trimmed input for {raw:?}"
    );
    Ok(())
}

#[rstest]
fn table_entries_have_four_nonempty_labels() -> Result<()> {
    let table = LocaleTable::builtin().context("load built-in table")?;
    for (country, bundle) in table.iter() {
        let labels: Vec<_> = bundle.labels.iter().collect();
        let keys: Vec<_> = labels.iter().map(|(key, _)| *key).collect();
        ensure!(
            keys == ["name", "address", "country", "language"],
            "{country} has unexpected label keys {keys:?}"
        );
        ensure!(
            labels.iter().all(|(_, value)| !value.trim().is_empty()),
            "{country} has an empty label: {labels:?}"
        );
        ensure!(
            canonical_key(country) == country,
            "{country} is not stored in canonical form"
        );
    }
    Ok(())
}

#[rstest]
fn aliases_are_not_resolved() -> Result<()> {
    let resolver = builtin_resolver()?;
    let usa = resolver.resolve("USA");
    ensure!(usa.is_fallback(), "USA is not an alias for united states");
    ensure!(
        resolver.resolve("Japn").is_fallback(),
        "no fuzzy matching is applied"
    );
    Ok(())
}
