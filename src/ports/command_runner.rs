use std::path::Path;

use crate::domain::{AppError, CommandSpec};

/// Result of running a command sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOutcome {
    /// Exit code of the last command that ran.
    pub exit_code: i32,
    /// The command that exited non-zero, if any.
    pub failed_command: Option<CommandSpec>,
}

impl SequenceOutcome {
    pub fn success() -> Self {
        Self { exit_code: 0, failed_command: None }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Port for running external commands.
pub trait CommandRunner {
    /// Run `commands` one after another in `cwd`, streaming their output.
    ///
    /// Stops at the first non-zero exit. A command that cannot be started at
    /// all is an `AppError::ExternalTool`.
    fn run_sequence(&self, commands: &[CommandSpec], cwd: &Path)
    -> Result<SequenceOutcome, AppError>;
}
