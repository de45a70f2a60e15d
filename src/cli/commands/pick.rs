use super::{restore_stash, stash_before_switch, CommandContext};
use crate::cli::output::Output;
use crate::cli::picker;
use crate::errors::Result;

/// Interactively pick a branch from the stack to check out.
pub fn run(stash: bool) -> Result<()> {
    let ctx = CommandContext::discover()?;

    let stack = ctx.store.read()?;
    if stack.is_empty() {
        Output::info("Stack is empty. Nothing to pick.");
        return Ok(());
    }

    let Some(branch) = picker::select_branch(&stack)? else {
        Output::info("No branch selected.");
        return Ok(());
    };

    let current = ctx.git.current_branch()?;
    if current == branch {
        Output::info(format!("Already on '{current}'."));
        return Ok(());
    }

    let stashed = stash_before_switch(&ctx, stash)?;

    Output::progress(format!("Checking out '{branch}'"));
    ctx.git.checkout(&branch)?;

    if stashed {
        restore_stash(&ctx)?;
    }
    Ok(())
}
