//! Built-in description string tables.

use fahrplan_core::{DescriptionStrings, KnownLanguage};

use crate::Locale;

/// Returns the string table for a locale.
pub fn for_locale(locale: Locale) -> &'static dyn DescriptionStrings {
    match locale {
        Locale::En => &EnglishStrings,
        Locale::De => &GermanStrings,
    }
}

pub struct EnglishStrings;

impl DescriptionStrings for EnglishStrings {
    fn duration(&self, minutes: u32) -> String {
        format!("Duration: {minutes} minutes")
    }

    fn title(&self, title: &str) -> String {
        format!("Title: {title}")
    }

    fn subtitle(&self, subtitle: &str) -> String {
        format!("Subtitle: {subtitle}")
    }

    fn room_name(&self, room_name: &str) -> String {
        format!("Room: {room_name}")
    }

    fn speakers(&self, count: usize, formatted_names: &str) -> String {
        if count == 1 {
            format!("Speaker: {formatted_names}")
        } else {
            format!("Speakers: {formatted_names}")
        }
    }

    fn track(&self, track_name: &str) -> String {
        format!("Track: {track_name}")
    }

    fn language(&self, language_name: &str) -> String {
        format!("Language: {language_name}")
    }

    fn language_unknown(&self) -> String {
        "Unknown language".to_string()
    }

    fn language_name(&self, language: KnownLanguage) -> String {
        match language {
            KnownLanguage::English => "English",
            KnownLanguage::German => "German",
            KnownLanguage::Portuguese => "Portuguese",
        }
        .to_string()
    }

    fn start_time(&self, start_time_text: &str) -> String {
        format!("Starts at {start_time_text}")
    }

    fn highlight(&self, is_highlighted: bool) -> String {
        if is_highlighted { "Favored" } else { "Not favored" }.to_string()
    }
}

pub struct GermanStrings;

impl DescriptionStrings for GermanStrings {
    fn duration(&self, minutes: u32) -> String {
        format!("Dauer: {minutes} Minuten")
    }

    fn title(&self, title: &str) -> String {
        format!("Titel: {title}")
    }

    fn subtitle(&self, subtitle: &str) -> String {
        format!("Untertitel: {subtitle}")
    }

    fn room_name(&self, room_name: &str) -> String {
        format!("Raum: {room_name}")
    }

    fn speakers(&self, count: usize, formatted_names: &str) -> String {
        if count == 1 {
            format!("Vortragende Person: {formatted_names}")
        } else {
            format!("Vortragende: {formatted_names}")
        }
    }

    fn track(&self, track_name: &str) -> String {
        format!("Track: {track_name}")
    }

    fn language(&self, language_name: &str) -> String {
        format!("Sprache: {language_name}")
    }

    fn language_unknown(&self) -> String {
        "Sprache unbekannt".to_string()
    }

    fn language_name(&self, language: KnownLanguage) -> String {
        match language {
            KnownLanguage::English => "Englisch",
            KnownLanguage::German => "Deutsch",
            KnownLanguage::Portuguese => "Portugiesisch",
        }
        .to_string()
    }

    fn start_time(&self, start_time_text: &str) -> String {
        format!("Beginnt um {start_time_text}")
    }

    fn highlight(&self, is_highlighted: bool) -> String {
        if is_highlighted {
            "Favorisiert"
        } else {
            "Nicht favorisiert"
        }
        .to_string()
    }
}
