//! CLI parsing helpers for clap value parsers.

/// Trim a free-text argument, rejecting blank values.
///
/// Length thresholds are checked later so every failing field is reported
/// together.
pub(super) fn parse_text(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(String::from("value must not be empty"));
    }
    Ok(trimmed.to_owned())
}
