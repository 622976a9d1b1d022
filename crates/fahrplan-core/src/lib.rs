//! Core domain logic for conference schedule sessions.
//!
//! This crate contains the fundamental types and logic for:
//! - Session: the canonical schedule item and its content equality
//! - Time: absolute and legacy start representations, derived instants
//! - Changes: per-family change flags and cancellation
//! - Describe: accessibility text assembled from localized templates
//! - Diff: a reference comparison of two schedule imports

pub mod changes;
pub mod describe;
pub mod diff;
pub mod language;
pub mod session;
pub mod time;
pub mod types;

pub use changes::{ChangeFlags, ContentFamily};
pub use describe::DescriptionStrings;
pub use diff::{ScheduleChanges, compare_schedules, mark_changes};
pub use language::{KnownLanguage, language_code};
pub use session::{ContentKey, EXCLUDED_FROM_EQUALITY, Session, Speakers};
pub use time::{DateUtc, TimeError};
pub use types::{SessionId, ValidationError};
