//! Start-time representation and derived instants.
//!
//! Feeds deliver a session's start in one of two shapes:
//! - an absolute instant (`date_utc`, milliseconds since the epoch), or
//! - legacy local fields: a calendar `date` plus minutes since conference start.
//!
//! [`DateUtc`] makes the distinction explicit while keeping the
//! `0 = unset` millisecond contract at the serialization boundary.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ValidationError;

/// Calendar date format of the legacy `date` field.
pub const LEGACY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from deriving instants out of a session's time fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The absolute start instant is required but `date_utc` is unset.
    #[error("field 'date_utc' must be more than 0")]
    StartUnresolved,

    /// The legacy `date` field is not a `YYYY-MM-DD` calendar date.
    #[error("invalid legacy date {date:?}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The derived instant does not fit into the supported range.
    #[error("derived instant is out of range")]
    OutOfRange,
}

/// Absolute start instant of a session.
///
/// Serialized as integer milliseconds where `0` means [`DateUtc::Unset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum DateUtc {
    /// Only legacy time fields are available.
    #[default]
    Unset,
    /// Resolved absolute instant, timezone already applied by the importer.
    At(DateTime<Utc>),
}

impl DateUtc {
    /// Builds the start instant from epoch milliseconds.
    ///
    /// `0` maps to [`DateUtc::Unset`]; negative values are rejected.
    pub fn from_millis(millis: i64) -> Result<Self, ValidationError> {
        match millis {
            0 => Ok(Self::Unset),
            m if m < 0 => Err(ValidationError::NegativeInstant { millis }),
            m => DateTime::from_timestamp_millis(m)
                .map(Self::At)
                .ok_or(ValidationError::InstantOutOfRange { millis }),
        }
    }

    /// Epoch milliseconds, `0` when unset.
    pub fn as_millis(self) -> i64 {
        match self {
            Self::Unset => 0,
            Self::At(instant) => instant.timestamp_millis(),
        }
    }

    /// The resolved instant, if any.
    pub const fn instant(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Unset => None,
            Self::At(instant) => Some(instant),
        }
    }

    pub const fn is_set(self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl TryFrom<i64> for DateUtc {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_millis(value)
    }
}

impl From<DateUtc> for i64 {
    fn from(value: DateUtc) -> Self {
        value.as_millis()
    }
}

/// Parses a legacy `YYYY-MM-DD` date into its start-of-day instant in UTC.
pub fn parse_legacy_date(date: &str) -> Result<DateTime<Utc>, TimeError> {
    let day = NaiveDate::parse_from_str(date, LEGACY_DATE_FORMAT).map_err(|source| {
        TimeError::InvalidDate {
            date: date.to_string(),
            source,
        }
    })?;
    day.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .ok_or(TimeError::OutOfRange)
}

/// Adds a signed number of minutes to an instant.
pub fn plus_minutes(instant: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>, TimeError> {
    Duration::try_minutes(minutes)
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or(TimeError::OutOfRange)
}

/// Renders the start time as `HH:MM`.
///
/// Uses the session's own offset (UTC when it has none) unless
/// `use_device_time_zone` is set, in which case the local zone is used.
/// An unset start renders as an empty string.
pub fn format_start_time(
    date_utc: DateUtc,
    offset: Option<FixedOffset>,
    use_device_time_zone: bool,
) -> String {
    let Some(instant) = date_utc.instant() else {
        return String::new();
    };
    if use_device_time_zone {
        instant.with_timezone(&Local).format("%H:%M").to_string()
    } else {
        let offset = offset.unwrap_or_else(|| Utc.fix());
        instant.with_timezone(&offset).format("%H:%M").to_string()
    }
}

/// Serde adapter storing an optional UTC offset as signed seconds east of UTC.
pub(crate) mod offset_seconds {
    use chrono::FixedOffset;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(
        clippy::ref_option,
        reason = "signature is dictated by serde's `with` attribute"
    )]
    pub fn serialize<S>(offset: &Option<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        offset
            .map(|o| o.local_minus_utc())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i32>::deserialize(deserializer)?
            .map(|secs| {
                FixedOffset::east_opt(secs)
                    .ok_or_else(|| D::Error::custom(format!("invalid UTC offset: {secs} seconds")))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_maps_zero_to_unset() {
        assert_eq!(DateUtc::from_millis(0), Ok(DateUtc::Unset));
        assert_eq!(DateUtc::Unset.as_millis(), 0);
    }

    #[test]
    fn test_from_millis_rejects_negative() {
        assert_eq!(
            DateUtc::from_millis(-1),
            Err(ValidationError::NegativeInstant { millis: -1 })
        );
    }

    #[test]
    fn test_from_millis_keeps_exact_value() {
        let date_utc = DateUtc::from_millis(1_700_000_000_123).unwrap();
        assert!(date_utc.is_set());
        assert_eq!(date_utc.as_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_date_utc_serializes_as_millis() {
        let date_utc = DateUtc::from_millis(1_700_000_000_000).unwrap();
        assert_eq!(serde_json::to_string(&date_utc).unwrap(), "1700000000000");
        assert_eq!(serde_json::to_string(&DateUtc::Unset).unwrap(), "0");

        let parsed: DateUtc = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, DateUtc::Unset);
        assert!(serde_json::from_str::<DateUtc>("-10").is_err());
    }

    #[test]
    fn test_parse_legacy_date_is_start_of_day_utc() {
        let start = parse_legacy_date("2023-12-27").unwrap();
        assert_eq!(start.to_rfc3339(), "2023-12-27T00:00:00+00:00");
    }

    #[test]
    fn test_parse_legacy_date_rejects_garbage() {
        let err = parse_legacy_date("27.12.2023").unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate { ref date, .. } if date == "27.12.2023"));
    }

    #[test]
    fn test_plus_minutes_handles_negative_offsets() {
        let start = parse_legacy_date("2023-12-27").unwrap();
        let earlier = plus_minutes(start, -30).unwrap();
        assert_eq!(earlier.to_rfc3339(), "2023-12-26T23:30:00+00:00");
    }

    #[test]
    fn test_format_start_time_uses_session_offset() {
        // 2023-12-27T10:30:00Z
        let date_utc = DateUtc::from_millis(1_703_673_000_000).unwrap();
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_start_time(date_utc, Some(cet), false), "11:30");
        assert_eq!(format_start_time(date_utc, None, false), "10:30");
    }

    #[test]
    fn test_format_start_time_of_unset_is_empty() {
        assert_eq!(format_start_time(DateUtc::Unset, None, true), "");
    }
}
