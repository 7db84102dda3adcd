//! bcu - interactive branch clean-up checklist
//!
//! This library provides:
//! - A pure selection state over an ordered list of labeled items,
//!   where locked items can never be selected
//! - A raw-mode terminal session with key decoding and in-place redraw
//! - `git branch` listing and deletion helpers around the checklist
//! - TOML configuration and CLI argument parsing

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod tui;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use tui::{CrosstermTerminal, Item, Outcome, SelectionState, Session, SessionOptions};
