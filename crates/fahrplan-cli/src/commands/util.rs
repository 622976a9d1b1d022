//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};

use fahrplan_core::{Session, TimeError};

/// Reads a JSON array of sessions from a file.
pub fn load_sessions(path: &Path) -> anyhow::Result<Vec<Session>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let sessions: Vec<Session> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse sessions from {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = sessions.len(), "loaded sessions");
    Ok(sessions)
}

/// Formats a derived instant, or `-` when it cannot be derived.
pub fn format_instant(instant: Result<DateTime<Utc>, TimeError>) -> String {
    match instant {
        Ok(instant) => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(e) => {
            tracing::debug!(error = %e, "instant not derivable");
            "-".to_string()
        }
    }
}
