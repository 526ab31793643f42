// src/shared/forms.rs
//
// Helpers shared by every entity form. Forms arrive as urlencoded strings,
// so blank means "not provided" and list fields are comma separated.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Message shown to the user as-is.
    #[error("{0}")]
    Required(String),

    #[error("{field} must be a valid URL")]
    InvalidUrl { field: &'static str },

    #[error("{field} must be a date (YYYY-MM-DD)")]
    InvalidDate { field: &'static str },

    #[error("{0}")]
    Invalid(String),
}

/// Rejects the form unless every listed field has non-blank content.
///
/// `message` names all of them at once, the way the forms report it
/// ("Title and content are required").
pub fn require_all(fields: &[&str], message: &str) -> Result<(), ValidationError> {
    if fields.iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::Required(message.to_string()));
    }
    Ok(())
}

pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// `None` for a blank input, the trimmed text otherwise.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Splits `"React, Node.js , ,Rust"` into `["React", "Node.js", "Rust"]`.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_csv(values: &[String]) -> String {
    values.join(", ")
}

/// Accepts a blank value or an absolute http(s) URL.
pub fn optional_url(field: &'static str, raw: &str) -> Result<Option<String>, ValidationError> {
    let Some(value) = optional(raw) else {
        return Ok(None);
    };

    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(value)),
        _ => Err(ValidationError::InvalidUrl { field }),
    }
}

/// Parses an `<input type="date">` value into the ISO timestamp the API stores
/// (midnight UTC).
pub fn optional_date(field: &'static str, raw: &str) -> Result<Option<String>, ValidationError> {
    let Some(value) = optional(raw) else {
        return Ok(None);
    };

    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field })?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(ValidationError::InvalidDate { field })?
        .and_utc();

    Ok(Some(midnight.to_rfc3339_opts(SecondsFormat::Millis, true)))
}

/// Reads the calendar date out of a stored timestamp.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` strings.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Value to seed an `<input type="date">` with.
pub fn date_input_value(stored: Option<&str>) -> String {
    stored
        .and_then(parse_stored_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// HTML checkboxes submit `on` when ticked and nothing otherwise.
pub fn checkbox(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("on" | "true" | "1"))
}
