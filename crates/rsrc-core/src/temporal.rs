//! # Temporal Types: UTC Expiry Timestamps
//!
//! Defines `Timestamp`, the type of `metadata.expires`. Values are held in
//! UTC, truncated to seconds precision.
//!
//! ## Wire Format
//!
//! Serialized as RFC 3339 with a `Z` suffix: `YYYY-MM-DDTHH:MM:SSZ`.
//! Deserialization accepts any RFC 3339 offset and converts to UTC, so a
//! document written with `+02:00` reads back as the same instant. Because
//! the serialized form has no sub-second part, marshaling and then
//! unmarshaling a `Timestamp` always yields an equal value.
//!
//! ## Range
//!
//! RFC 3339 has a four-digit year, so a `Timestamp` is confined to
//! `0000-01-01T00:00:00Z..=9999-12-31T23:59:59Z`. Every constructor checks
//! the bound; values outside it cannot be built.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResourceError;

/// A UTC timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` if the year falls outside `0000..=9999`.
    pub fn from_utc(dt: DateTime<Utc>) -> Result<Self, ResourceError> {
        if !in_rfc3339_range(&dt) {
            return Err(ResourceError::bad_parameter(format!(
                "timestamp out of RFC 3339 range: year {}",
                dt.year()
            )));
        }
        Ok(Self(truncate_to_seconds(dt)))
    }

    /// Parse an RFC 3339 string, accepting any offset and converting to UTC.
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` if the string is not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ResourceError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ResourceError::bad_parameter(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Self::from_utc(dt.with_timezone(&Utc))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` if `secs` is outside the RFC 3339 range.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, ResourceError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            ResourceError::bad_parameter(format!("invalid Unix timestamp: {secs}"))
        })?;
        Self::from_utc(dt)
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// The instant `ttl` after `self`, or `None` if it would pass
    /// `9999-12-31T23:59:59Z`.
    pub fn checked_add(&self, ttl: std::time::Duration) -> Option<Self> {
        let ttl = Duration::from_std(ttl).ok()?;
        let dt = self.0.checked_add_signed(ttl)?;
        Self::from_utc(dt).ok()
    }

    /// Render as RFC 3339 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_rfc3339(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn in_rfc3339_range(dt: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&dt.year())
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let dt_with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt_with_nanos).unwrap();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn test_parse_converts_offset_to_utc() {
        let ts = Timestamp::parse("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_subseconds_truncated() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.123456Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_invalid_is_bad_parameter() {
        for input in ["not-a-date", "2026-01-15", ""] {
            let err = Timestamp::parse(input).unwrap_err();
            assert!(err.is_bad_parameter(), "{input:?} -> {err}");
        }
    }

    #[test]
    fn test_checked_add() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let later = ts.checked_add(std::time::Duration::from_secs(90)).unwrap();
        assert_eq!(later.to_rfc3339(), "2026-01-15T12:01:30Z");
    }

    #[test]
    fn test_checked_add_stops_at_year_9999() {
        let last = Timestamp::parse("9999-12-31T23:59:59Z").unwrap();
        assert!(last.checked_add(std::time::Duration::from_secs(1)).is_none());
        let ts = Timestamp::parse("9999-12-31T23:59:58Z").unwrap();
        assert_eq!(
            ts.checked_add(std::time::Duration::from_secs(1)),
            Some(last)
        );
    }

    #[test]
    fn test_checked_add_huge_ttl() {
        let ts = Timestamp::parse("2026-01-01T00:00:00Z").unwrap();
        assert!(ts.checked_add(std::time::Duration::from_secs(u64::MAX)).is_none());
    }

    #[test]
    fn test_from_utc_rejects_five_digit_year() {
        let err = Timestamp::from_utc(DateTime::<Utc>::MAX_UTC).unwrap_err();
        assert!(err.is_bad_parameter());
        let dt = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert!(Timestamp::from_utc(dt).is_err());
    }

    #[test]
    fn test_from_utc_rejects_negative_year() {
        let dt = Utc.with_ymd_and_hms(-1, 12, 31, 23, 59, 59).unwrap();
        assert!(Timestamp::from_utc(dt).unwrap_err().is_bad_parameter());
    }

    #[test]
    fn test_from_epoch_secs_bounds() {
        // 9999-12-31T23:59:59Z and the second after it.
        let last = Timestamp::from_epoch_secs(253_402_300_799).unwrap();
        assert_eq!(last.to_rfc3339(), "9999-12-31T23:59:59Z");
        let err = Timestamp::from_epoch_secs(253_402_300_800).unwrap_err();
        assert!(err.is_bad_parameter());
        // 0000-01-01T00:00:00Z and the second before it.
        let first = Timestamp::from_epoch_secs(-62_167_219_200).unwrap();
        assert_eq!(first.to_rfc3339(), "0000-01-01T00:00:00Z");
        assert!(Timestamp::from_epoch_secs(-62_167_219_201).is_err());
    }

    #[test]
    fn test_parse_offset_past_year_9999_rejected() {
        let err = Timestamp::parse("9999-12-31T23:59:59-01:00").unwrap_err();
        assert!(err.is_bad_parameter());
    }

    #[test]
    fn test_boundary_serializes_and_parses_back() {
        for secs in [-62_167_219_200, 253_402_300_799] {
            let ts = Timestamp::from_epoch_secs(secs).unwrap();
            let json = serde_json::to_string(&ts).unwrap();
            assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), ts);
        }
    }

    #[test]
    fn test_serde_uses_z_suffix() {
        let ts = Timestamp::parse("2026-06-30T23:59:59+00:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-06-30T23:59:59Z\"");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"tomorrow\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("42").is_err());
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let later = Timestamp::parse("2026-01-15T12:00:01Z").unwrap();
        assert!(earlier < later);
    }
}
