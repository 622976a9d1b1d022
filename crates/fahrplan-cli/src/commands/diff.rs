//! Diff command comparing two schedule imports.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use fahrplan_core::{ContentFamily, Session, compare_schedules};

use super::util::load_sessions;

#[derive(Debug, Clone)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &DiffArgs) -> Result<()> {
    let old = load_sessions(&args.old)?;
    let new = load_sessions(&args.new)?;
    let changes = compare_schedules(&old, &new);

    if args.json {
        let flagged: Vec<&Session> = changes.flagged().collect();
        let json =
            serde_json::to_string_pretty(&flagged).context("failed to serialize changes")?;
        writeln!(writer, "{json}")?;
        return Ok(());
    }

    if !changes.found_changes {
        writeln!(writer, "No changes.")?;
        return Ok(());
    }

    for session in changes.flagged() {
        tracing::debug!("{}", session.changed_state_string());
        writeln!(writer, "{}", summary_line(session))?;
    }
    Ok(())
}

fn summary_line(session: &Session) -> String {
    let flags = session.changes();
    if flags.is_canceled {
        format!("canceled  {}  {}", session.id(), session.title)
    } else if flags.is_new {
        format!("new       {}  {}", session.id(), session.title)
    } else {
        let families: Vec<&str> = flags
            .changed_families()
            .iter()
            .map(ContentFamily::as_str)
            .collect();
        format!(
            "changed   {}  {} ({})",
            session.id(),
            session.title,
            families.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn write_json(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const OLD: &str = r#"[
        {"session_id": "1", "title": "Opening", "room_name": "Saal 1", "date_utc": 1703757600000, "duration": 30},
        {"session_id": "2", "title": "Lightning talks", "room_name": "Saal 2", "date_utc": 1703761200000, "duration": 60}
    ]"#;

    const NEW: &str = r#"[
        {"session_id": "1", "title": "Grand Opening", "room_name": "Saal 3", "date_utc": 1703757600000, "duration": 45},
        {"session_id": "3", "title": "Workshop", "room_name": "Saal 2", "date_utc": 1703764800000, "duration": 90}
    ]"#;

    #[test]
    fn test_diff_lists_changed_new_and_canceled() {
        let old = write_json(OLD);
        let new = write_json(NEW);
        let args = DiffArgs {
            old: old.path().to_path_buf(),
            new: new.path().to_path_buf(),
            json: false,
        };
        let mut output = Vec::new();

        run(&mut output, &args).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        changed   1  Grand Opening (title, room_name, duration)
        new       3  Workshop
        canceled  2  Lightning talks
        ");
    }

    #[test]
    fn test_diff_reports_no_changes() {
        let old = write_json(OLD);
        let args = DiffArgs {
            old: old.path().to_path_buf(),
            new: old.path().to_path_buf(),
            json: false,
        };
        let mut output = Vec::new();

        run(&mut output, &args).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "No changes.\n");
    }

    #[test]
    fn test_diff_json_contains_flagged_sessions_only() {
        let old = write_json(OLD);
        let new = write_json(NEW);
        let args = DiffArgs {
            old: old.path().to_path_buf(),
            new: new.path().to_path_buf(),
            json: true,
        };
        let mut output = Vec::new();

        run(&mut output, &args).unwrap();

        let sessions: Vec<Session> = serde_json::from_slice(&output).unwrap();
        assert_eq!(sessions.len(), 3);
        assert!(sessions[0].changes().title);
        assert!(sessions[1].changes().is_new);
        assert!(sessions[2].changes().is_canceled);
    }
}
