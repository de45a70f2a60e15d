//! Happy-path tests for the whole-stack rebase: sequencing, the stash
//! wrapper, and the no-op / abort edges that never write a checkpoint.

mod common;

use common::*;
use git_stack::cli::commands::CommandContext;
use git_stack::errors::StackError;
use git_stack::stack::{
    RebaseCheckpoint, RebaseOptions, RebaseOrchestrator, RebaseStateFile, REBASE_STATE_FILE_NAME,
};

fn state_file(ctx: &CommandContext) -> RebaseStateFile {
    RebaseStateFile::new(ctx.git_dir.join(REBASE_STATE_FILE_NAME))
}

fn orchestrator(ctx: &CommandContext) -> RebaseOrchestrator<'_> {
    RebaseOrchestrator::new(&ctx.git, &ctx.store, state_file(ctx))
}

/// Build main -> feature-a -> feature-b, then advance main so the stack is
/// stale. Leaves the repo on feature-b.
fn build_stale_stack(repo: &std::path::Path) {
    git(repo, &["checkout", "-b", "feature-a"]);
    commit_file(repo, "feat_a.txt", "a\n", "Feature A");

    git(repo, &["checkout", "-b", "feature-b"]);
    commit_file(repo, "feat_b.txt", "b\n", "Feature B");

    git(repo, &["checkout", "main"]);
    commit_file(repo, "base.txt", "base moved on\n", "New work on main");

    git(repo, &["checkout", "feature-b"]);
}

#[test]
fn rebases_each_branch_onto_its_predecessor() {
    let (_tmp, repo) = init_repo();
    build_stale_stack(&repo);

    let ctx = CommandContext::discover_from(&repo).unwrap();
    for branch in ["main", "feature-a", "feature-b"] {
        ctx.store.push(branch).unwrap();
    }

    orchestrator(&ctx)
        .start(&RebaseOptions {
            pull_base: false,
            auto_stash: true,
        })
        .unwrap();

    // Back on the branch we started from, with main's new work underneath
    // the whole stack.
    assert_eq!(current_branch(&repo), "feature-b");
    git(&repo, &["merge-base", "--is-ancestor", "main", "feature-a"]);
    git(&repo, &["merge-base", "--is-ancestor", "feature-a", "feature-b"]);
    assert!(repo.join("base.txt").exists());

    assert!(matches!(
        state_file(&ctx).load(),
        Err(StackError::NoRebaseInProgress)
    ));
}

#[test]
fn restores_auto_stash_after_success() {
    let (_tmp, repo) = init_repo();
    build_stale_stack(&repo);

    let ctx = CommandContext::discover_from(&repo).unwrap();
    for branch in ["main", "feature-a", "feature-b"] {
        ctx.store.push(branch).unwrap();
    }

    std::fs::write(repo.join("README.md"), "# test\nwork in progress\n").unwrap();

    orchestrator(&ctx)
        .start(&RebaseOptions {
            pull_base: false,
            auto_stash: true,
        })
        .unwrap();

    assert_eq!(current_branch(&repo), "feature-b");
    assert_eq!(stash_count(&repo), 0);
    let readme = std::fs::read_to_string(repo.join("README.md")).unwrap();
    assert!(readme.contains("work in progress"));
}

#[test]
fn short_stack_is_a_noop_with_zero_git_operations() {
    let (_tmp, repo) = init_repo();
    let ctx = CommandContext::discover_from(&repo).unwrap();
    ctx.store.push("main").unwrap();

    // A dirty tree stays unstashed: nothing at all reached git. With a
    // remote-less repo, pull_base would also fail loudly if it ran.
    std::fs::write(repo.join("README.md"), "# test\ndirty\n").unwrap();

    orchestrator(&ctx)
        .start(&RebaseOptions {
            pull_base: true,
            auto_stash: true,
        })
        .unwrap();

    assert_eq!(current_branch(&repo), "main");
    assert_eq!(stash_count(&repo), 0);
    let readme = std::fs::read_to_string(repo.join("README.md")).unwrap();
    assert!(readme.contains("dirty"));
    assert!(matches!(
        state_file(&ctx).load(),
        Err(StackError::NoRebaseInProgress)
    ));
}

#[test]
fn base_pull_failure_aborts_without_checkpoint() {
    let (_tmp, repo) = init_repo();
    git(&repo, &["checkout", "-b", "feature-a"]);
    commit_file(&repo, "feat_a.txt", "a\n", "Feature A");

    let ctx = CommandContext::discover_from(&repo).unwrap();
    ctx.store.push("main").unwrap();
    ctx.store.push("feature-a").unwrap();

    std::fs::write(repo.join("feat_a.txt"), "uncommitted\n").unwrap();

    // No remote is configured, so pulling the base fails.
    let result = orchestrator(&ctx).start(&RebaseOptions {
        pull_base: true,
        auto_stash: true,
    });
    assert!(matches!(result, Err(StackError::Git { .. })));

    // The base step is not resumable: no checkpoint, and the stash stays
    // pending rather than being popped onto a half-done stack.
    assert!(matches!(
        state_file(&ctx).load(),
        Err(StackError::NoRebaseInProgress)
    ));
    assert_eq!(current_branch(&repo), "main");
    assert_eq!(stash_count(&repo), 1);
}

#[test]
fn start_discards_stale_checkpoint() {
    let (_tmp, repo) = init_repo();
    build_stale_stack(&repo);

    let ctx = CommandContext::discover_from(&repo).unwrap();
    for branch in ["main", "feature-a", "feature-b"] {
        ctx.store.push(branch).unwrap();
    }

    state_file(&ctx)
        .save(&RebaseCheckpoint {
            original_branch: "feature-b".to_string(),
            last_successful_index: 0,
            stashed: false,
        })
        .unwrap();

    orchestrator(&ctx)
        .start(&RebaseOptions {
            pull_base: false,
            auto_stash: false,
        })
        .unwrap();

    assert!(matches!(
        state_file(&ctx).load(),
        Err(StackError::NoRebaseInProgress)
    ));
}
