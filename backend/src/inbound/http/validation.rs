//! Shared validation helpers for inbound HTTP adapters.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidTimestamp,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an ISO-8601 timestamp")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidTimestamp.as_str(),
    }))
}

/// Offset-bearing layouts tried after RFC 3339, once `Z` is spelled `+00:00`.
const OFFSET_FORMATS: [&str; 1] = ["%Y-%m-%dT%H:%M%:z"];

/// Layouts without an offset; the value is read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Accept a space between date and time and a trailing `Z`.
fn normalise_timestamp(value: &str) -> String {
    let mut normalised = value.trim().to_owned();
    if normalised.len() > 10 && normalised.is_char_boundary(10) && normalised[10..].starts_with(' ')
    {
        normalised.replace_range(10..11, "T");
    }
    if normalised.ends_with(['Z', 'z']) {
        normalised.pop();
        normalised.push_str("+00:00");
    }
    normalised
}

/// Parse an ISO-8601 timestamp.
///
/// Seconds and fractions are optional and the date may be separated from the
/// time by `T` or a space. Values without an offset are read as UTC.
pub(crate) fn parse_timestamp(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    let normalised = normalise_timestamp(value);
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&normalised) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalised, format).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(&normalised, format).ok())
                .map(|naive| naive.and_utc())
        })
        .ok_or_else(|| invalid_timestamp_error(field, value))
}

/// Render a timestamp as RFC 3339 in UTC with a `Z` suffix.
pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
