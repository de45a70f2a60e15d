use super::CommandContext;
use crate::cli::output::Output;
use crate::errors::Result;

/// Display all branches currently in the stack, bottom to top.
pub fn run() -> Result<()> {
    let ctx = CommandContext::discover()?;

    let stack = ctx.store.read()?;
    if stack.is_empty() {
        Output::info("Stack is empty.");
        return Ok(());
    }

    println!("Branch stack (bottom to top):");
    for (index, branch) in stack.iter().enumerate() {
        Output::numbered_item(index + 1, branch);
    }
    Ok(())
}
