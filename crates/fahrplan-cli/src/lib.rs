//! Conference schedule CLI library.
//!
//! This crate provides the CLI interface for inspecting and diffing
//! schedule imports.

mod cli;
pub mod commands;
mod config;
pub mod strings;

pub use cli::{Cli, Commands};
pub use config::{Config, Locale};
