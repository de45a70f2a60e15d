use super::{restore_stash, stash_before_switch, CommandContext};
use crate::cli::output::Output;
use crate::errors::Result;

/// Push the current branch onto the stack, then check out `branch`.
pub fn run(branch: &str, stash: bool) -> Result<()> {
    let ctx = CommandContext::discover()?;
    run_in(&ctx, branch, stash)
}

pub fn run_in(ctx: &CommandContext, branch: &str, stash: bool) -> Result<()> {
    let current = ctx.git.current_branch()?;
    if current == branch {
        Output::info(format!("Already on '{current}'. Nothing to do."));
        return Ok(());
    }

    let stashed = stash_before_switch(ctx, stash)?;

    Output::progress(format!("Pushing '{current}' onto the stack"));
    ctx.store.push(&current)?;

    Output::progress(format!("Checking out '{branch}'"));
    ctx.git.checkout(branch)?;

    if stashed {
        restore_stash(ctx)?;
    }
    Ok(())
}
