use crate::cli::Cli;
use crate::errors::Result;
use clap::CommandFactory;
use clap_complete::Shell;

/// Generate shell completions on stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
