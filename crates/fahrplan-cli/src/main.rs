use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fahrplan_cli::commands::diff::{self, DiffArgs};
use fahrplan_cli::commands::show::{self, ShowArgs};
use fahrplan_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(Commands::Show { file, session }) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");
            show::run(&mut stdout, &ShowArgs { file, session }, &config)?;
        }
        Some(Commands::Diff { old, new, json }) => {
            diff::run(&mut stdout, &DiffArgs { old, new, json })?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
