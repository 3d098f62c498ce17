//! Timestamp formatting for JSON responses.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a UTC instant as ISO-8601 with microseconds and a `Z` suffix,
/// e.g. `2026-10-16T09:30:00.123456Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time as an [`iso_timestamp`].
pub fn now_iso() -> String {
    iso_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2026-10-16T09:30:00.000000Z");
    }

    #[test]
    fn test_now_iso_parses_back() {
        let stamp = now_iso();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
