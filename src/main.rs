//! bcu - pick local git branches to clean up
//!
//! Lists local branches, shows them as an interactive checklist and
//! prints (or deletes) the ones confirmed with Enter.

use anyhow::Result;
use branch_cleanup::{
    Cli, Config, CrosstermTerminal, Outcome, SelectionState, Session, SessionOptions, git,
};
use chrono::Local;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let _guard = setup_file_only_logging(&cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_path.display(),
        "bcu starting"
    );

    let config = load_config(&cli)?;
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    let items = git::list_branches(&config.protected_branches)?;
    if items.is_empty() {
        println!("No branches to clean up.");
        return Ok(());
    }

    let session = Session::new(
        SelectionState::new(items),
        CrosstermTerminal::new(config.fallback_width),
        io::stdin(),
        io::stdout(),
    )
    .with_options(SessionOptions {
        alternate_screen: config.alternate_screen,
    });

    let selected = match session.run_outcome()? {
        Outcome::Confirmed(selected) => selected,
        Outcome::Cancelled => return Ok(()),
    };

    if !config.delete {
        for branch in &selected {
            println!("{branch}");
        }
        return Ok(());
    }

    let mut failed = 0;
    for deletion in git::delete_branches(&selected) {
        match deletion.error {
            None => println!("Deleted {}", deletion.branch),
            Some(error) => {
                failed += 1;
                eprintln!("Could not delete {}: {}", deletion.branch, error);
            }
        }
    }
    info!(deleted = selected.len() - failed, failed, "Clean-up finished");

    Ok(())
}

/// Load configuration from file and apply CLI overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let file_config = Config::discover(cli.config.as_deref(), &cwd)?;
    Ok(cli.merge_with_config(file_config))
}

/// `<temp>/bcu/Session_<timestamp>.log`
fn default_log_path() -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    std::env::temp_dir()
        .join("bcu")
        .join(format!("Session_{}.log", timestamp))
}

/// Setup file-only logging; the terminal belongs to the checklist
fn setup_file_only_logging(cli: &Cli, log_path: &Path) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(guard)
}
