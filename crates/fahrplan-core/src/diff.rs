//! Reference schedule diffing.
//!
//! Compares a previous import against a freshly parsed one and writes the
//! outcome into the change flags of the new sessions. Sessions are matched
//! by [`SessionId`]. Equality through [`Session::content_key`] decides
//! whether a matched pair needs a field-by-field look at all.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::changes::{ChangeFlags, ContentFamily};
use crate::session::Session;
use crate::types::SessionId;

/// Outcome of comparing two schedule imports.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleChanges {
    /// The new sessions with change flags applied, followed by canceled
    /// copies of sessions that disappeared from the feed.
    pub sessions: Vec<Session>,
    /// True if any session is new, canceled or changed.
    pub found_changes: bool,
}

impl ScheduleChanges {
    /// Sessions that carry any change, lifecycle markers included.
    pub fn flagged(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(|session| {
            let changes = session.changes();
            changes.is_new || changes.is_canceled || changes.is_changed()
        })
    }
}

/// Content families whose fields differ between two imports of a session.
pub fn changed_families(old: &Session, new: &Session) -> Vec<ContentFamily> {
    ContentFamily::ALL
        .into_iter()
        .filter(|family| family_differs(*family, old, new))
        .collect()
}

fn family_differs(family: ContentFamily, old: &Session, new: &Session) -> bool {
    match family {
        ContentFamily::Title => old.title != new.title,
        ContentFamily::Subtitle => old.subtitle != new.subtitle,
        ContentFamily::RoomName => old.room_name != new.room_name,
        ContentFamily::Day => old.day != new.day,
        ContentFamily::Time => {
            old.start_time != new.start_time
                || old.date != new.date
                || old.date_utc != new.date_utc
                || old.time_zone_offset != new.time_zone_offset
        }
        ContentFamily::Duration => old.duration != new.duration,
        ContentFamily::Speakers => old.speakers != new.speakers,
        ContentFamily::RecordingOptOut => old.recording_opt_out != new.recording_opt_out,
        ContentFamily::Language => old.language_code() != new.language_code(),
        ContentFamily::Track => old.track != new.track,
    }
}

/// Returns a copy of `new` with change flags set against `old`.
///
/// Only the change flags are written. `highlight` and `has_alarm` belong to
/// the user and pass through from `new` as they are.
pub fn mark_changes(old: &Session, new: &Session) -> Session {
    let mut marked = new.clone();
    if old == new {
        return marked;
    }
    for family in changed_families(old, new) {
        tracing::debug!(session_id = %new.id(), %family, "session field changed");
        marked.changes_mut().set(family, true);
    }
    marked
}

/// Diffs two complete imports.
///
/// Sessions only present in `new` are flagged `is_new`. Sessions only present
/// in `old` are appended as canceled copies. Matched sessions get their
/// content family flags from [`mark_changes`]. Flags already present on the
/// inputs are discarded.
pub fn compare_schedules(old: &[Session], new: &[Session]) -> ScheduleChanges {
    let previous: HashMap<&SessionId, &Session> =
        old.iter().map(|session| (session.id(), session)).collect();
    let mut sessions = Vec::with_capacity(new.len());

    for candidate in new {
        let marked = match previous.get(candidate.id()) {
            Some(before) => mark_changes(before, &reset(candidate)),
            None => {
                tracing::debug!(session_id = %candidate.id(), "new session");
                let mut added = reset(candidate);
                added.changes_mut().is_new = true;
                added
            }
        };
        sessions.push(marked);
    }

    let current: HashSet<&SessionId> = new.iter().map(Session::id).collect();
    for removed in old.iter().filter(|session| !current.contains(session.id())) {
        let mut canceled = removed.clone();
        canceled.cancel();
        sessions.push(canceled);
    }

    let found_changes = sessions.iter().any(|session| {
        let changes = session.changes();
        changes.is_new || changes.is_canceled || changes.is_changed()
    });
    tracing::debug!(
        sessions = sessions.len(),
        found_changes,
        "compared schedule imports"
    );

    ScheduleChanges {
        sessions,
        found_changes,
    }
}

fn reset(session: &Session) -> Session {
    let mut fresh = session.clone();
    *fresh.changes_mut() = ChangeFlags::default();
    fresh
}
