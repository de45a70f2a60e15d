use crate::errors::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// Present the stack as a selectable list, defaulting to the top entry.
/// Returns `None` when the user cancels the prompt.
pub fn select_branch(branches: &[String]) -> Result<Option<String>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a branch to checkout")
        .items(branches)
        .default(branches.len().saturating_sub(1))
        .interact_opt()?;

    Ok(selection.map(|index| branches[index].clone()))
}
