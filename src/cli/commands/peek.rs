use super::CommandContext;
use crate::cli::output::Output;
use crate::errors::Result;

/// Show the branch at the top of the stack.
pub fn run() -> Result<()> {
    let ctx = CommandContext::discover()?;
    match ctx.store.read()?.last() {
        Some(top) => println!("Top of stack: {top}"),
        None => Output::info("Stack is empty."),
    }
    Ok(())
}
