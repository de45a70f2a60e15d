/// git-stack error types
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    /// The working directory is not inside a Git repository
    #[error("not a git repository (or any of the parent directories): .git")]
    NotARepository,

    /// A git subprocess returned a non-zero exit status
    #[error("`git {args}` failed with exit code {code}")]
    Git { args: String, code: i32 },

    /// The branch stack has no entries to pop
    #[error("the branch stack is empty")]
    EmptyStack,

    /// `rebase --continue` was invoked without a checkpoint on disk
    #[error("no stack rebase in progress")]
    NoRebaseInProgress,

    /// The rebase checkpoint file exists but does not parse
    #[error("invalid rebase state file: {0}")]
    CorruptState(String),

    /// Branch lookup and navigation errors
    #[error("Branch error: {0}")]
    Branch(String),

    /// I/O errors on the stack or checkpoint files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl StackError {
    pub fn branch<S: Into<String>>(msg: S) -> Self {
        StackError::Branch(msg.into())
    }

    pub fn corrupt_state<S: Into<String>>(msg: S) -> Self {
        StackError::CorruptState(msg.into())
    }

    /// Build a `Git` error from the argument list and exit status of a
    /// finished subprocess. Signal termination reports as exit code -1.
    pub fn git_command(args: &[&str], status: std::process::ExitStatus) -> Self {
        StackError::Git {
            args: args.join(" "),
            code: status.code().unwrap_or(-1),
        }
    }
}

pub type Result<T> = std::result::Result<T, StackError>;
