//! The branch stack and the whole-stack rebase machinery.
//!
//! - Stack persistence (`store`): the ordered branch list, one name per line
//! - Rebase checkpointing (`state`): the durable record of an interrupted run
//! - Rebase orchestration (`rebase`): the sequential, resumable rebase loop

pub mod rebase;
pub mod state;
pub mod store;

pub use rebase::{RebaseOptions, RebaseOrchestrator};
pub use state::{RebaseCheckpoint, RebaseStateFile};
pub use store::StackStore;

/// Branch list file, relative to the git directory.
pub const STACK_FILE_NAME: &str = "git_branch_stack";

/// Rebase checkpoint file, relative to the git directory.
pub const REBASE_STATE_FILE_NAME: &str = "git_stack_rebase_state";
