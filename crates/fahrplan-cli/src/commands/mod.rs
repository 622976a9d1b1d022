//! CLI subcommand implementations.

pub mod diff;
pub mod show;
pub mod util;
