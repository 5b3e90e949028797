//! Tests for registration validation and response shaping.

use anyhow::{Context, Result, ensure};
use greeter::locale_resolution::LocaleResolver;
use greeter::registration::{
    Field, GreetingPayload, GreetingRequest, Registration, RegistrationRecord,
    RegistrationResponse,
};
use rstest::rstest;
use serde_json::json;
use time::macros::datetime;

fn registration(name: &str, address: &str, country: &str) -> Registration {
    Registration {
        name: name.to_owned(),
        address: address.to_owned(),
        country: country.to_owned(),
    }
}

#[rstest]
fn valid_registration_passes() -> Result<()> {
    registration("Mika", "1-2-3 Shibuya", "Japan").validate()?;
    Ok(())
}

#[rstest]
#[case(registration("M", "1-2-3 Shibuya", "Japan"), vec![Field::Name])]
#[case(registration("Mika", " 12 ", "Japan"), vec![Field::Address])]
#[case(registration("Mika", "1-2-3 Shibuya", " J "), vec![Field::Country])]
#[case(registration("", "", ""), vec![Field::Name, Field::Address, Field::Country])]
fn each_threshold_is_reported(
    #[case] input: Registration,
    #[case] expected: Vec<Field>,
) -> Result<()> {
    let Err(err) = input.validate() else {
        anyhow::bail!("expected {input:?} to be rejected");
    };
    let fields: Vec<Field> = err.problems.iter().map(|p| p.field).collect();
    ensure!(fields == expected, "expected {expected:?}, got {fields:?}");
    Ok(())
}

#[rstest]
fn messages_match_the_form_wording() -> Result<()> {
    let Err(err) = registration(" ", "abc", "x").validate() else {
        anyhow::bail!("expected rejection");
    };
    ensure!(
        err.messages()
            == [
                "Name must be at least 2 characters.",
                "Address must be at least 5 characters.",
                "Country must be at least 2 characters.",
            ],
        "unexpected messages {:?}",
        err.messages()
    );
    ensure!(
        err.to_string()
            == "Name must be at least 2 characters. Address must be at least 5 characters. \
                Country must be at least 2 characters.",
        "unexpected display: {err}"
    );
    Ok(())
}

#[rstest]
fn lengths_count_characters_not_bytes() -> Result<()> {
    registration("李明", "東京都渋谷", "中国").validate()?;
    GreetingRequest {
        name: "李".to_owned(),
        country: "日本".to_owned(),
    }
    .validate()
    .err()
    .context("one-character name should be rejected")?;
    Ok(())
}

#[rstest]
fn greeting_request_ignores_address() -> Result<()> {
    let request = GreetingRequest::from(&registration("Ana", "", "Spain"));
    request.validate()?;
    Ok(())
}

#[rstest]
fn payload_has_the_documented_shape() -> Result<()> {
    let resolver = LocaleResolver::builtin().context("load built-in table")?;
    let payload = GreetingPayload::new(resolver.resolve("japan").bundle(), "Mika");
    let value = serde_json::to_value(&payload)?;
    ensure!(
        value
            == json!({
                "greeting": "こんにちは",
                "greetingMessage": "こんにちは、Mikaさん！",
                "language": "Japanese",
                "languageLocalized": "日本語",
                "locale": "ja-JP",
                "countryLocalized": "日本",
                "labels": {
                    "name": "名前",
                    "address": "住所",
                    "country": "国",
                    "language": "言語"
                }
            }),
        "unexpected payload {value}"
    );
    Ok(())
}

#[rstest]
fn response_merges_record_and_greeting() -> Result<()> {
    let resolver = LocaleResolver::builtin().context("load built-in table")?;
    let submitted = registration("  Sam ", " 42 Ocean Drive ", " Atlantis ");
    let record = RegistrationRecord::new(7, &submitted, datetime!(2024-05-01 12:30:00 UTC));
    let bundle = resolver.resolve_bundle(&record.country);
    let value = serde_json::to_value(RegistrationResponse::new(record, &bundle))?;
    ensure!(value["id"] == 7, "id: {value}");
    ensure!(value["name"] == "Sam", "name: {value}");
    ensure!(value["address"] == "42 Ocean Drive", "address: {value}");
    ensure!(value["country"] == "Atlantis", "country: {value}");
    ensure!(
        value["created_at"] == "2024-05-01T12:30:00Z",
        "created_at: {value}"
    );
    ensure!(value["greetingMessage"] == "Hello, Sam!", "greeting: {value}");
    ensure!(value["countryLocalized"] == "Atlantis", "echo: {value}");
    ensure!(value["locale"] == "en-US", "locale: {value}");
    Ok(())
}

#[rstest]
fn registration_deserializes_with_missing_fields() -> Result<()> {
    let parsed: Registration = serde_json::from_str(r#"{"name":"Ana"}"#)?;
    ensure!(parsed.address.is_empty(), "address defaults to empty");
    ensure!(parsed.validate().is_err(), "missing fields fail validation");
    Ok(())
}
