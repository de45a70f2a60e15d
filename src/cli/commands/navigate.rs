use super::{restore_stash, stash_before_switch, CommandContext};
use crate::cli::output::Output;
use crate::errors::{Result, StackError};

/// Direction to move relative to the current branch's position in the stack.
#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
}

/// Check out the adjacent branch in the stack, one entry toward the top
/// (`Up`) or the bottom (`Down`).
pub fn run(direction: Direction, stash: bool) -> Result<()> {
    let ctx = CommandContext::discover()?;
    run_in(&ctx, direction, stash)
}

pub fn run_in(ctx: &CommandContext, direction: Direction, stash: bool) -> Result<()> {
    let stack = ctx.store.read()?;
    if stack.len() < 2 {
        return Err(StackError::branch(
            "not enough branches in stack to navigate",
        ));
    }

    let current = ctx.git.current_branch()?;
    let position = stack
        .iter()
        .position(|branch| branch == &current)
        .ok_or_else(|| {
            StackError::branch(format!("current branch '{current}' not found in stack"))
        })?;

    let target = match direction {
        Direction::Up => {
            if position + 1 >= stack.len() {
                Output::info("Already at the top of the stack.");
                return Ok(());
            }
            position + 1
        }
        Direction::Down => {
            if position == 0 {
                Output::info("Already at the bottom of the stack.");
                return Ok(());
            }
            position - 1
        }
    };

    let stashed = stash_before_switch(ctx, stash)?;

    let branch = &stack[target];
    let action = match direction {
        Direction::Up => "up",
        Direction::Down => "down",
    };
    Output::progress(format!("Moving {action} to '{branch}'"));
    ctx.git.checkout(branch)?;

    if stashed {
        restore_stash(ctx)?;
    }
    Ok(())
}
