//! Git branch listing and deletion
//!
//! These sit outside the checklist: they turn `git branch` output into
//! checklist items and act on the confirmed labels.

use crate::error::{Error, Result};
use crate::tui::Item;
use std::process::Command;
use tracing::{debug, info, warn};

/// Parse `git branch` output into checklist items
///
/// The current branch (`* `) and branches checked out in other worktrees
/// (`+ `) are locked. Protected names and parenthesised pseudo-entries
/// (detached HEAD, rebase or bisect in progress) are dropped.
pub fn parse_branches<S: AsRef<str>>(listing: &str, protected: &[S]) -> Vec<Item> {
    listing
        .lines()
        .filter_map(|line| {
            let line = line.trim_end();
            let (locked, name) = match line.get(..2) {
                Some("* ") | Some("+ ") => (true, line[2..].trim()),
                _ => (false, line.trim()),
            };

            if name.is_empty() || name.starts_with('(') {
                return None;
            }
            if protected.iter().any(|p| p.as_ref() == name) {
                return None;
            }

            Some(Item {
                label: name.to_string(),
                locked,
            })
        })
        .collect()
}

/// List local branches of the repository in the current directory
pub fn list_branches<S: AsRef<str>>(protected: &[S]) -> Result<Vec<Item>> {
    let output = Command::new("git")
        .args(["branch", "--no-color"])
        .output()
        .map_err(|e| Error::Git {
            message: format!("could not run git: {e}"),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() || stdout.starts_with("fatal") {
        let message = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(Error::Git { message });
    }

    let items = parse_branches(&stdout, protected);
    debug!(
        count = items.len(),
        locked = items.iter().filter(|i| i.locked).count(),
        "Listed branches"
    );
    Ok(items)
}

/// Result of deleting one branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub branch: String,
    /// git's error output when the deletion failed
    pub error: Option<String>,
}

/// Force-delete each branch with `git branch -D`
///
/// Failures are logged and reported per branch; one failure does not
/// stop the rest.
pub fn delete_branches(branches: &[String]) -> Vec<Deletion> {
    branches
        .iter()
        .map(|branch| {
            let error = match Command::new("git").args(["branch", "-D", branch.as_str()]).output() {
                Ok(output) if output.status.success() => None,
                Ok(output) => Some(String::from_utf8_lossy(&output.stderr).trim().to_string()),
                Err(e) => Some(e.to_string()),
            };

            match &error {
                None => info!(branch, "Deleted branch"),
                Some(e) => warn!(branch, error = %e, "Failed to delete branch"),
            }

            Deletion {
                branch: branch.clone(),
                error,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_PROTECTED: [&str; 2] = ["main", "master"];

    fn parse(listing: &str) -> Vec<Item> {
        parse_branches(listing, &DEFAULT_PROTECTED)
    }

    #[test]
    fn test_typical_output() {
        let listing = "* main\n  feature-1\n  feature-2\n  bugfix-123\n";
        assert_eq!(
            parse(listing),
            vec![
                Item::new("feature-1"),
                Item::new("feature-2"),
                Item::new("bugfix-123"),
            ]
        );
    }

    #[test]
    fn test_main_and_master_excluded() {
        assert_eq!(
            parse("* main\n  master\n  feature-a\n  feature-b"),
            vec![Item::new("feature-a"), Item::new("feature-b")]
        );
        assert!(parse("* main").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_current_branch_is_locked() {
        assert_eq!(
            parse("  develop\n* feature-x\n  main"),
            vec![Item::new("develop"), Item::locked("feature-x")]
        );
    }

    #[test]
    fn test_worktree_branches_are_locked_in_order() {
        let listing = "  develop\n* main\n+ worktree-feature\n  feature-1\n+ worktree-hotfix\n  feature-2";
        assert_eq!(
            parse(listing),
            vec![
                Item::new("develop"),
                Item::locked("worktree-feature"),
                Item::new("feature-1"),
                Item::locked("worktree-hotfix"),
                Item::new("feature-2"),
            ]
        );
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(
            parse("* main\n  feature/new-ui\n  bugfix/JIRA-123\n  release-1.0.0"),
            vec![
                Item::new("feature/new-ui"),
                Item::new("bugfix/JIRA-123"),
                Item::new("release-1.0.0"),
            ]
        );
    }

    #[test]
    fn test_detached_head_skipped() {
        assert_eq!(
            parse("* (HEAD detached at 1a2b3c4)\n  feature-1\n"),
            vec![Item::new("feature-1")]
        );
    }

    #[test]
    fn test_rebase_and_bisect_entries_skipped() {
        assert_eq!(
            parse("* (no branch, rebasing feature-x)\n  feature-x\n  bugfix-1"),
            vec![Item::new("feature-x"), Item::new("bugfix-1")]
        );
        assert_eq!(
            parse("* (no branch, bisect started on develop)\n+ develop"),
            vec![Item::locked("develop")]
        );
    }

    #[test]
    fn test_custom_protected_list() {
        let protected = vec!["develop".to_string()];
        assert_eq!(
            parse_branches("  develop\n* main\n  feature", &protected),
            vec![Item::locked("main"), Item::new("feature")]
        );
    }
}
