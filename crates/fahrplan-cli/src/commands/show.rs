//! Show command rendering sessions with derived times and descriptions.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use fahrplan_core::describe::{
    duration_description, speakers_description, state_description, subtitle_description,
    title_description, track_description,
};
use fahrplan_core::time::format_start_time;
use fahrplan_core::{DateUtc, DescriptionStrings, Session};

use super::util::{format_instant, load_sessions};
use crate::{Config, strings};

#[derive(Debug, Clone)]
pub struct ShowArgs {
    pub file: PathBuf,
    pub session: Option<String>,
}

pub fn run<W: Write>(writer: &mut W, args: &ShowArgs, config: &Config) -> Result<()> {
    let sessions = load_sessions(&args.file)?;
    let strings = strings::for_locale(config.locale);

    let selected: Vec<&Session> = match &args.session {
        Some(id) => sessions.iter().filter(|s| s.id().as_str() == id).collect(),
        None => sessions.iter().collect(),
    };
    if let Some(id) = &args.session {
        if selected.is_empty() {
            anyhow::bail!("session not found: {id}");
        }
    }

    for session in selected {
        write_session(writer, session, strings, config)?;
    }
    Ok(())
}

fn write_session<W: Write>(
    writer: &mut W,
    session: &Session,
    strings: &dyn DescriptionStrings,
    config: &Config,
) -> Result<()> {
    writeln!(writer, "[{}] {}", session.id(), session.title)?;
    writeln!(writer, "  track:       {}", session.formatted_track_language_text())?;
    writeln!(writer, "  speakers:    {}", session.formatted_speakers())?;
    writeln!(writer, "  start:       {}", format_instant(session.start_instant()))?;
    writeln!(writer, "  end:         {}", format_instant(session.ends_at()))?;
    writeln!(writer, "  description: {}", describe(session, strings, config))?;
    Ok(())
}

/// Joins the non-empty description fragments of a session.
fn describe(session: &Session, strings: &dyn DescriptionStrings, config: &Config) -> String {
    let start_time_text = session.start_instant().map_or_else(
        |_| String::new(),
        |instant| {
            format_start_time(
                DateUtc::At(instant),
                session.time_zone_offset,
                config.use_device_time_zone,
            )
        },
    );
    let speakers = if session.speakers.is_empty() {
        String::new()
    } else {
        speakers_description(
            strings,
            session.speakers.len(),
            &session.formatted_speakers(),
        )
    };
    let fragments = [
        title_description(strings, &session.title),
        subtitle_description(strings, &session.subtitle),
        speakers,
        duration_description(strings, session.duration),
        track_description(strings, &session.track, &session.language_code()),
        state_description(strings, session, &start_time_text),
    ];
    fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}
