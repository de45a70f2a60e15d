//! Shared helpers for driving real git repositories in temp directories.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run a git command in `repo`, asserting it succeeds.
pub fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .env("GIT_EDITOR", "true")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "`git {}` failed:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Run a git command in `repo` and return its trimmed stdout.
pub fn git_stdout(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize a repository on a `main` branch with one commit.
pub fn init_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().to_path_buf();

    git(&repo, &["init"]);
    git(&repo, &["checkout", "-b", "main"]);
    git(&repo, &["config", "user.name", "Test User"]);
    git(&repo, &["config", "user.email", "test@example.com"]);
    git(&repo, &["config", "commit.gpgsign", "false"]);

    commit_file(&repo, "README.md", "# test\n", "Initial commit");
    (temp_dir, repo)
}

/// Write `name` with `content` and commit it.
pub fn commit_file(repo: &Path, name: &str, content: &str, message: &str) {
    std::fs::write(repo.join(name), content).unwrap();
    git(repo, &["add", name]);
    git(repo, &["commit", "-m", message]);
}

pub fn current_branch(repo: &Path) -> String {
    git_stdout(repo, &["rev-parse", "--abbrev-ref", "HEAD"])
}

pub fn stash_count(repo: &Path) -> usize {
    let list = git_stdout(repo, &["stash", "list"]);
    if list.is_empty() {
        0
    } else {
        list.lines().count()
    }
}

/// Whether git itself is mid-rebase in `repo`.
pub fn in_git_rebase(repo: &Path) -> bool {
    repo.join(".git/rebase-merge").exists() || repo.join(".git/rebase-apply").exists()
}
