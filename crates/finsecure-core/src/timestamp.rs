//! Lenient timestamp parsing for backend payloads
//!
//! The backend emits timestamps in whichever format its JSON encoder picks:
//! RFC 3339 (`2025-01-14T10:00:00Z`), naive ISO-8601 without an offset
//! (`2025-01-14T10:00:00.123456`), or an HTTP-date (`Tue, 14 Jan 2025 10:00:00 GMT`).
//! Naive values are taken as UTC. Anything else becomes `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp string, returning `None` when no known format matches.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Serde adapter: accepts a string, null, or a missing field.
///
/// Unparseable strings and non-string values deserialize to `None` instead of
/// failing the enclosing payload.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => {
            let parsed = parse_timestamp(&s);
            if parsed.is_none() {
                tracing::debug!("Unrecognised timestamp format: {:?}", s);
            }
            parsed
        }
        _ => None,
    })
}
