pub mod commands;
pub mod output;
pub mod picker;

use crate::errors::Result;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "git-stack")]
#[command(about = "Manage a stack of checked-out Git branches")]
#[command(version)]
pub struct Cli {
    /// Defaults to `list` when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Auto-stash local changes before switching branches
    #[arg(
        long,
        global = true,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub stash: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push the current branch onto the stack and check out <branch>
    Checkout {
        /// Branch to check out
        branch: String,
    },

    /// Pop the top branch from the stack and check it out
    Pop,

    /// Interactively pick a branch from the stack to check out
    Pick,

    /// Show the branch at the top of the stack
    Peek,

    /// Display all branches currently in the stack
    List,

    /// Clear all branches from the stack
    Clear,

    /// Check out the next branch up in the stack
    Up,

    /// Check out the previous branch down in the stack
    Down,

    /// Rebase the entire stack, bottom to top
    Rebase {
        /// Pull the base branch before rebasing
        #[arg(
            long,
            default_value_t = true,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        pull: bool,

        /// Continue an interrupted stack rebase after resolving conflicts
        #[arg(long = "continue")]
        resume: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.setup_logging();

        match self.command {
            Some(Commands::Checkout { branch }) => commands::checkout::run(&branch, self.stash),
            Some(Commands::Pop) => commands::pop::run(self.stash),
            Some(Commands::Pick) => commands::pick::run(self.stash),
            Some(Commands::Peek) => commands::peek::run(),
            Some(Commands::List) | None => commands::list::run(),
            Some(Commands::Clear) => commands::clear::run(),
            Some(Commands::Up) => {
                commands::navigate::run(commands::navigate::Direction::Up, self.stash)
            }
            Some(Commands::Down) => {
                commands::navigate::run(commands::navigate::Direction::Down, self.stash)
            }
            Some(Commands::Rebase { pull, resume }) => {
                commands::rebase::run(pull, resume, self.stash)
            }
            Some(Commands::Completions { shell }) => commands::completions::run(shell),
        }
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);

        if self.no_color {
            console::set_colors_enabled(false);
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}
