use super::CommandContext;
use crate::cli::output::Output;
use crate::errors::Result;

/// Clear all branches from the stack.
pub fn run() -> Result<()> {
    let ctx = CommandContext::discover()?;
    if ctx.store.clear()? {
        Output::success("Stack has been cleared.");
    } else {
        Output::info("Stack is already empty.");
    }
    Ok(())
}
