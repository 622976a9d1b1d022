//! The schedule session entity.
//!
//! A [`Session`] is one talk, workshop or similar time-boxed program item as
//! delivered by the schedule feed. Two imports of the same item are compared
//! through [`Session::content_key`], which covers only the fields that count
//! as feed content. Presentation aliases, importer-computed hints, user state
//! and change flags stay out of equality, see [`EXCLUDED_FROM_EQUALITY`].

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::changes::ChangeFlags;
use crate::language;
use crate::time::{self, DateUtc, TimeError};
use crate::types::SessionId;

/// Separator between speaker names in the formatted speaker list.
const SPEAKER_SEPARATOR: &str = ", ";

/// Fields stored on a [`Session`] that do not take part in equality or hashing.
pub const EXCLUDED_FROM_EQUALITY: &[&str] = &[
    "slug",
    "url",
    "abstract_text",
    "description",
    "links",
    "highlight",
    "has_alarm",
    "room_index",
    "rel_start_time",
    "changes",
];

/// Ordered speaker names, in feed order.
///
/// Cloning shares the underlying sequence. There is no in-place mutation;
/// a session changes its speakers by replacing the whole sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Speakers(Arc<[String]>);

impl Speakers {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// True if both values share the same underlying sequence.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<String>> for Speakers {
    fn from(names: Vec<String>) -> Self {
        Self(names.into())
    }
}

impl From<Speakers> for Vec<String> {
    fn from(speakers: Speakers) -> Self {
        speakers.0.to_vec()
    }
}

impl<'a> IntoIterator for &'a Speakers {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lecture, workshop or any similar time-framed happening.
///
/// `Clone` acts as the copy constructor: text and numeric fields are
/// duplicated, the speaker sequence is shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    session_id: SessionId,

    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub url: String,
    /// Link to the talk's feedback page in Frab or Pretalx.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_url: Option<String>,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub description: String,
    /// Comma separated Markdown links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
    #[serde(default)]
    pub track: String,
    #[serde(default, rename = "type")]
    pub session_type: String,
    /// Language label as delivered by the feed, see [`Session::language_code`].
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub recording_license: String,
    #[serde(default)]
    pub recording_opt_out: bool,

    /// Conference day, 1-based.
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub room_name: String,
    /// Stable room key. The display name may change independently.
    #[serde(default)]
    pub room_identifier: String,
    /// Sort hint computed by the importer for room ordering.
    ///
    /// Only the room ordering logic may read it.
    #[serde(default)]
    pub room_index: i32,

    /// Legacy calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_utc: DateUtc,
    #[serde(default, with = "time::offset_seconds")]
    pub time_zone_offset: Option<FixedOffset>,
    /// Minutes since the start of the local day.
    #[serde(default)]
    pub start_time: u32,
    /// Minutes since the start of the conference.
    #[serde(default)]
    pub rel_start_time: i32,
    /// Length in minutes. Zero is a point-in-time item.
    #[serde(default)]
    pub duration: u32,

    #[serde(default)]
    pub speakers: Speakers,

    /// Marked as favorite by the user.
    #[serde(default)]
    pub highlight: bool,
    /// The user set a reminder.
    #[serde(default)]
    pub has_alarm: bool,

    #[serde(default)]
    changes: ChangeFlags,
}

/// The subset of [`Session`] fields that defines content equality.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ContentKey<'a> {
    feedback_url: Option<&'a str>,
    day: u32,
    duration: u32,
    recording_opt_out: bool,
    start_time: u32,
    date: &'a str,
    lang: &'a str,
    session_id: &'a SessionId,
    recording_license: &'a str,
    room_name: &'a str,
    room_identifier: &'a str,
    speakers: &'a [String],
    subtitle: &'a str,
    title: &'a str,
    track: &'a str,
    session_type: &'a str,
    date_utc: DateUtc,
    time_zone_offset: Option<FixedOffset>,
}

impl Session {
    /// Creates an empty session with all change flags unset.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            slug: String::new(),
            url: String::new(),
            feedback_url: None,
            title: String::new(),
            subtitle: String::new(),
            abstract_text: String::new(),
            description: String::new(),
            links: None,
            track: String::new(),
            session_type: String::new(),
            lang: String::new(),
            recording_license: String::new(),
            recording_opt_out: false,
            day: 0,
            room_name: String::new(),
            room_identifier: String::new(),
            room_index: 0,
            date: String::new(),
            date_utc: DateUtc::Unset,
            time_zone_offset: None,
            start_time: 0,
            rel_start_time: 0,
            duration: 0,
            speakers: Speakers::default(),
            highlight: false,
            has_alarm: false,
            changes: ChangeFlags::default(),
        }
    }

    pub const fn id(&self) -> &SessionId {
        &self.session_id
    }

    pub const fn changes(&self) -> &ChangeFlags {
        &self.changes
    }

    /// Write access to the change flags only, for diffing collaborators.
    pub fn changes_mut(&mut self) -> &mut ChangeFlags {
        &mut self.changes
    }

    /// True if any content family changed since the previous import.
    pub fn is_changed(&self) -> bool {
        self.changes.is_changed()
    }

    /// Marks the session canceled, dropping all content change flags.
    pub fn cancel(&mut self) {
        self.changes.cancel();
        tracing::debug!(session_id = %self.session_id, "session canceled");
    }

    /// Diagnostic dump of all change flags.
    pub fn changed_state_string(&self) -> String {
        format!("Session[{}] {}", self.session_id, self.changes)
    }

    /// Comma separated Markdown links, empty when the feed had none.
    pub fn links(&self) -> &str {
        self.links.as_deref().unwrap_or_default()
    }

    /// Moves the room sort hint by a signed amount.
    pub fn shift_room_index_by(&mut self, amount: i32) {
        self.room_index = self.room_index.saturating_add(amount);
    }

    /// The fields compared by `==` and fed into `Hash`.
    pub fn content_key(&self) -> ContentKey<'_> {
        ContentKey {
            feedback_url: self.feedback_url.as_deref(),
            day: self.day,
            duration: self.duration,
            recording_opt_out: self.recording_opt_out,
            start_time: self.start_time,
            date: &self.date,
            lang: &self.lang,
            session_id: &self.session_id,
            recording_license: &self.recording_license,
            room_name: &self.room_name,
            room_identifier: &self.room_identifier,
            speakers: self.speakers.as_slice(),
            subtitle: &self.subtitle,
            title: &self.title,
            track: &self.track,
            session_type: &self.session_type,
            date_utc: self.date_utc,
            time_zone_offset: self.time_zone_offset,
        }
    }

    /// Start instant of the session.
    ///
    /// `date_utc` wins when set. Otherwise the legacy `date` is taken as
    /// midnight UTC and `rel_start_time` minutes are added.
    pub fn start_instant(&self) -> Result<DateTime<Utc>, TimeError> {
        match self.date_utc {
            DateUtc::At(instant) => Ok(instant),
            DateUtc::Unset => {
                tracing::trace!(
                    session_id = %self.session_id,
                    date = %self.date,
                    "deriving start from legacy date fields"
                );
                let start_of_day = time::parse_legacy_date(&self.date)?;
                time::plus_minutes(start_of_day, i64::from(self.rel_start_time))
            }
        }
    }

    /// [`Session::start_instant`] as epoch milliseconds.
    pub fn start_time_millis(&self) -> Result<i64, TimeError> {
        self.start_instant().map(|instant| instant.timestamp_millis())
    }

    /// Start instant from `date_utc` only, without the legacy fallback.
    pub fn starts_at(&self) -> Result<DateTime<Utc>, TimeError> {
        match self.date_utc {
            DateUtc::At(instant) => Ok(instant),
            DateUtc::Unset => Err(TimeError::StartUnresolved),
        }
    }

    /// End instant: `date_utc` plus `duration` minutes.
    pub fn ends_at(&self) -> Result<DateTime<Utc>, TimeError> {
        let start = self.starts_at()?;
        time::plus_minutes(start, i64::from(self.duration))
    }

    /// Normalized language code, see [`language::language_code`].
    pub fn language_code(&self) -> String {
        language::language_code(&self.lang)
    }

    /// Speaker names joined with `", "`, in feed order.
    pub fn formatted_speakers(&self) -> String {
        self.speakers.as_slice().join(SPEAKER_SEPARATOR)
    }

    /// Track label with the language code appended, e.g. `Security [de]`.
    pub fn formatted_track_language_text(&self) -> String {
        if self.lang.is_empty() {
            self.track.clone()
        } else {
            format!("{} [{}]", self.track, self.language_code())
        }
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.content_key() == other.content_key()
    }
}

impl Eq for Session {}

impl Hash for Session {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content_key().hash(state);
    }
}
