use super::normalizer::cell_text;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to emit for a date value that cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum InvalidDatePolicy {
    /// Render an empty cell.
    #[default]
    Empty,
    /// Keep the raw input text unchanged.
    Passthrough,
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date/time value into UTC.
///
/// Strings with an offset are converted to UTC; naive strings and bare dates
/// are taken as UTC. JSON numbers are epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis)
        }
        Value::String(s) => parse_timestamp_str(s.trim()),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn format_with(value: Option<&Value>, policy: InvalidDatePolicy, pattern: &str) -> String {
    let raw = match value {
        Some(raw) if !is_absent(value) => raw,
        _ => return String::new(),
    };

    match parse_timestamp(raw) {
        Some(dt) => dt.format(pattern).to_string(),
        None => {
            tracing::debug!("Unparseable date value {}, applying {:?} policy", raw, policy);
            match policy {
                InvalidDatePolicy::Empty => String::new(),
                InvalidDatePolicy::Passthrough => cell_text(Some(raw)),
            }
        }
    }
}

/// `YYYY-MM-DD`, or empty when the value is absent.
pub fn format_date(value: Option<&Value>, policy: InvalidDatePolicy) -> String {
    format_with(value, policy, "%Y-%m-%d")
}

/// `YYYY-MM-DD HH:MM:SS` in UTC, truncated to whole seconds.
pub fn format_date_time(value: Option<&Value>, policy: InvalidDatePolicy) -> String {
    format_with(value, policy, "%Y-%m-%d %H:%M:%S")
}
