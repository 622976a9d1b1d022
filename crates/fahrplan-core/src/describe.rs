//! Accessibility descriptions for session list items.
//!
//! Localized templates come from a [`DescriptionStrings`] implementation
//! supplied by the caller. This module decides which fragments appear and
//! how they are joined. Missing feed data degrades to empty fragments.

use crate::language::KnownLanguage;
use crate::session::Session;

/// Localized string lookup for session descriptions.
///
/// Each method fills one template with an already resolved value. The
/// helpers below take it as a trait object so callers can pick a table at
/// runtime.
pub trait DescriptionStrings {
    fn duration(&self, minutes: u32) -> String;
    fn title(&self, title: &str) -> String;
    fn subtitle(&self, subtitle: &str) -> String;
    fn room_name(&self, room_name: &str) -> String;
    /// Pluralized on `count`.
    fn speakers(&self, count: usize, formatted_names: &str) -> String;
    fn track(&self, track_name: &str) -> String;
    /// Wraps a language name, e.g. "Language: English".
    fn language(&self, language_name: &str) -> String;
    fn language_unknown(&self) -> String;
    /// Localized display name of a known language.
    fn language_name(&self, language: KnownLanguage) -> String;
    fn start_time(&self, start_time_text: &str) -> String;
    fn highlight(&self, is_highlighted: bool) -> String;
}

pub fn duration_description(strings: &dyn DescriptionStrings, minutes: u32) -> String {
    strings.duration(minutes)
}

/// Empty when the title is empty.
pub fn title_description(strings: &dyn DescriptionStrings, title: &str) -> String {
    if title.is_empty() {
        String::new()
    } else {
        strings.title(title)
    }
}

/// Empty when the subtitle is empty.
pub fn subtitle_description(strings: &dyn DescriptionStrings, subtitle: &str) -> String {
    if subtitle.is_empty() {
        String::new()
    } else {
        strings.subtitle(subtitle)
    }
}

pub fn room_name_description(strings: &dyn DescriptionStrings, room_name: &str) -> String {
    strings.room_name(room_name)
}

pub fn speakers_description(
    strings: &dyn DescriptionStrings,
    count: usize,
    formatted_names: &str,
) -> String {
    strings.speakers(count, formatted_names)
}

/// Track description, followed by `"; <language>"` when a code is known.
pub fn track_description(
    strings: &dyn DescriptionStrings,
    track_name: &str,
    language_code: &str,
) -> String {
    let track = strings.track(track_name);
    if language_code.is_empty() {
        track
    } else {
        format!("{track}; {}", language_description(strings, language_code))
    }
}

/// Language description; unknown codes are used verbatim as the name.
pub fn language_description(strings: &dyn DescriptionStrings, language_code: &str) -> String {
    if language_code.is_empty() {
        return strings.language_unknown();
    }
    let name = KnownLanguage::from_code(language_code).map_or_else(
        || language_code.to_string(),
        |language| strings.language_name(language),
    );
    strings.language(&name)
}

pub fn start_time_description(strings: &dyn DescriptionStrings, start_time_text: &str) -> String {
    strings.start_time(start_time_text)
}

pub fn highlight_description(strings: &dyn DescriptionStrings, is_highlighted: bool) -> String {
    strings.highlight(is_highlighted)
}

/// Combined state: `"<highlight>, <start time>, <room>"`.
///
/// `start_time_text` is the already formatted start time, see
/// [`crate::time::format_start_time`]. An empty text drops the start time
/// clause.
pub fn state_description(
    strings: &dyn DescriptionStrings,
    session: &Session,
    start_time_text: &str,
) -> String {
    let highlight = highlight_description(strings, session.highlight);
    let room = room_name_description(strings, &session.room_name);
    if start_time_text.is_empty() {
        return format!("{highlight}, {room}");
    }
    format!(
        "{highlight}, {}, {room}",
        start_time_description(strings, start_time_text),
    )
}
