//! Per-family change flags set by schedule diffing.
//!
//! Each content family flips independently from unchanged to changed. The
//! lifecycle markers `is_new` and `is_canceled` live alongside but are not
//! content edits, so they never count towards [`ChangeFlags::is_changed`].
//! The only way back to unchanged is [`ChangeFlags::cancel`] or building a
//! fresh session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A group of session fields tracked by one change flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFamily {
    Title,
    Subtitle,
    RoomName,
    Day,
    /// Start time cluster: `start_time`, `date`, `date_utc` and `time_zone_offset`.
    Time,
    Duration,
    Speakers,
    RecordingOptOut,
    Language,
    Track,
}

impl ContentFamily {
    /// All content families, in diagnostic order.
    pub const ALL: [Self; 10] = [
        Self::Title,
        Self::Subtitle,
        Self::RoomName,
        Self::Day,
        Self::Time,
        Self::Duration,
        Self::Speakers,
        Self::RecordingOptOut,
        Self::Language,
        Self::Track,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::RoomName => "room_name",
            Self::Day => "day",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Speakers => "speakers",
            Self::RecordingOptOut => "recording_opt_out",
            Self::Language => "language",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for ContentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| format!("invalid content family: {s}"))
    }
}

/// Change state of one session relative to the previous import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeFlags {
    pub title: bool,
    pub subtitle: bool,
    pub room_name: bool,
    pub day: bool,
    pub time: bool,
    pub duration: bool,
    pub speakers: bool,
    pub recording_opt_out: bool,
    pub language: bool,
    pub track: bool,
    /// The session did not exist in the previous import.
    pub is_new: bool,
    /// The session was removed from the feed.
    pub is_canceled: bool,
}

impl ChangeFlags {
    /// Returns the flag of a content family.
    pub const fn get(&self, family: ContentFamily) -> bool {
        match family {
            ContentFamily::Title => self.title,
            ContentFamily::Subtitle => self.subtitle,
            ContentFamily::RoomName => self.room_name,
            ContentFamily::Day => self.day,
            ContentFamily::Time => self.time,
            ContentFamily::Duration => self.duration,
            ContentFamily::Speakers => self.speakers,
            ContentFamily::RecordingOptOut => self.recording_opt_out,
            ContentFamily::Language => self.language,
            ContentFamily::Track => self.track,
        }
    }

    /// Sets the flag of a content family.
    pub fn set(&mut self, family: ContentFamily, changed: bool) {
        let flag = match family {
            ContentFamily::Title => &mut self.title,
            ContentFamily::Subtitle => &mut self.subtitle,
            ContentFamily::RoomName => &mut self.room_name,
            ContentFamily::Day => &mut self.day,
            ContentFamily::Time => &mut self.time,
            ContentFamily::Duration => &mut self.duration,
            ContentFamily::Speakers => &mut self.speakers,
            ContentFamily::RecordingOptOut => &mut self.recording_opt_out,
            ContentFamily::Language => &mut self.language,
            ContentFamily::Track => &mut self.track,
        };
        *flag = changed;
    }

    /// True if any content family changed. Ignores `is_new` and `is_canceled`.
    pub fn is_changed(&self) -> bool {
        ContentFamily::ALL.into_iter().any(|family| self.get(family))
    }

    /// Content families currently flagged as changed.
    pub fn changed_families(&self) -> Vec<ContentFamily> {
        ContentFamily::ALL
            .into_iter()
            .filter(|family| self.get(*family))
            .collect()
    }

    /// Marks the session canceled and clears every other flag.
    pub fn cancel(&mut self) {
        *self = Self {
            is_canceled: true,
            ..Self::default()
        };
    }
}

impl fmt::Display for ChangeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeFlags{")?;
        for family in ContentFamily::ALL {
            write!(f, "{family}={}, ", self.get(family))?;
        }
        write!(
            f,
            "is_new={}, is_canceled={}}}",
            self.is_new, self.is_canceled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_set() -> ChangeFlags {
        let mut flags = ChangeFlags {
            is_new: true,
            ..ChangeFlags::default()
        };
        for family in ContentFamily::ALL {
            flags.set(family, true);
        }
        flags
    }

    #[test]
    fn test_fresh_flags_are_unchanged() {
        let flags = ChangeFlags::default();
        assert!(!flags.is_changed());
        assert!(!flags.is_new);
        assert!(!flags.is_canceled);
        assert!(flags.changed_families().is_empty());
    }

    #[test]
    fn test_any_content_family_marks_changed() {
        for family in ContentFamily::ALL {
            let mut flags = ChangeFlags::default();
            flags.set(family, true);
            assert!(flags.is_changed(), "{family} should count as a change");
            assert_eq!(flags.changed_families(), vec![family]);
        }
    }

    #[test]
    fn test_lifecycle_markers_are_not_content_changes() {
        let flags = ChangeFlags {
            is_new: true,
            is_canceled: true,
            ..ChangeFlags::default()
        };
        assert!(!flags.is_changed());
    }

    #[test]
    fn test_cancel_clears_content_flags_and_is_new() {
        let mut flags = all_set();
        assert!(flags.is_changed());

        flags.cancel();

        assert!(flags.is_canceled);
        assert!(!flags.is_new);
        assert!(!flags.is_changed());
        for family in ContentFamily::ALL {
            assert!(!flags.get(family), "{family} should be cleared");
        }
    }

    #[test]
    fn test_content_family_from_str_roundtrip() {
        for family in ContentFamily::ALL {
            assert_eq!(family.as_str().parse::<ContentFamily>(), Ok(family));
        }
        assert!("abstract".parse::<ContentFamily>().is_err());
    }

    #[test]
    fn test_display_lists_every_flag() {
        let flags = ChangeFlags {
            room_name: true,
            is_new: true,
            ..ChangeFlags::default()
        };
        insta::assert_snapshot!(
            flags.to_string(),
            @"ChangeFlags{title=false, subtitle=false, room_name=true, day=false, time=false, duration=false, speakers=false, recording_opt_out=false, language=false, track=false, is_new=true, is_canceled=false}"
        );
    }

    #[test]
    fn test_missing_flags_deserialize_as_unchanged() {
        let flags: ChangeFlags = serde_json::from_str(r#"{"title": true}"#).unwrap();
        assert!(flags.title);
        assert!(!flags.is_canceled);
    }
}
