use super::{restore_stash, stash_before_switch, CommandContext};
use crate::cli::output::Output;
use crate::errors::Result;

/// Pop the top branch from the stack and check it out.
pub fn run(stash: bool) -> Result<()> {
    let ctx = CommandContext::discover()?;
    run_in(&ctx, stash)
}

pub fn run_in(ctx: &CommandContext, stash: bool) -> Result<()> {
    if ctx.store.read()?.is_empty() {
        Output::info("Stack is empty. Nothing to pop.");
        return Ok(());
    }

    let stashed = stash_before_switch(ctx, stash)?;

    let branch = ctx.store.pop()?;
    Output::progress(format!("Popping '{branch}' from the stack"));
    ctx.git.checkout(&branch)?;

    if stashed {
        restore_stash(ctx)?;
    }
    Ok(())
}
