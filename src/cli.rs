//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// bcu - pick local git branches to clean up from an interactive checklist
///
/// Lists local branches (minus protected ones), lets you tick the ones
/// to remove with j/k or the arrow keys and Space, and prints or deletes
/// them once you press Enter. Branches that are checked out are shown
/// but cannot be selected.
#[derive(Parser, Debug, Default)]
#[command(name = "bcu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// Defaults to `.bcu.toml` in the current directory when present.
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Additional branch names to protect from selection
    #[arg(short, long = "protect", value_name = "BRANCH")]
    pub protect: Vec<String>,

    /// Delete the confirmed branches with `git branch -D`
    #[arg(short, long)]
    pub delete: bool,

    /// Draw inline instead of on the alternate screen
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Terminal width to assume when it cannot be detected
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<u16>,

    /// Write the session log to this file
    #[arg(long, env = "BCU_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        for branch in &self.protect {
            if !config.is_protected(branch) {
                config.protected_branches.push(branch.clone());
            }
        }
        if self.delete {
            config.delete = true;
        }
        if self.no_alt_screen {
            config.alternate_screen = false;
        }
        if let Some(width) = self.width {
            config.fallback_width = width;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "bcu",
            "--protect",
            "develop",
            "-p",
            "release",
            "--delete",
            "--no-alt-screen",
            "-w",
            "100",
        ]);
        assert_eq!(cli.protect, vec!["develop", "release"]);
        assert!(cli.delete);
        assert!(cli.no_alt_screen);
        assert_eq!(cli.width, Some(100));
    }

    #[test]
    fn test_merge_overrides_config() {
        let cli = Cli {
            protect: vec!["develop".into(), "main".into()],
            delete: true,
            no_alt_screen: true,
            width: Some(40),
            ..Cli::default()
        };

        let config = cli.merge_with_config(Config::default());
        assert_eq!(config.protected_branches, vec!["main", "master", "develop"]);
        assert!(config.delete);
        assert!(!config.alternate_screen);
        assert_eq!(config.fallback_width, 40);
    }

    #[test]
    fn test_merge_without_flags_keeps_config() {
        let file_config = Config {
            delete: true,
            ..Config::default()
        };
        let config = Cli::default().merge_with_config(file_config.clone());
        assert_eq!(config, file_config);
    }
}
