use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, CommandSpec};
use crate::ports::{CommandRunner, SequenceOutcome};

/// Records sequences instead of spawning them; a non-zero exit fails the first command.
pub struct RecordingRunner {
    exit_code: i32,
    pub runs: Mutex<Vec<(Vec<CommandSpec>, PathBuf)>>,
}

impl RecordingRunner {
    pub fn exiting_with(exit_code: i32) -> Self {
        Self { exit_code, runs: Mutex::new(Vec::new()) }
    }

    pub fn runs(&self) -> Vec<(Vec<CommandSpec>, PathBuf)> {
        self.runs.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_sequence(
        &self,
        commands: &[CommandSpec],
        cwd: &Path,
    ) -> Result<SequenceOutcome, AppError> {
        self.runs.lock().unwrap().push((commands.to_vec(), cwd.to_path_buf()));
        if self.exit_code == 0 {
            return Ok(SequenceOutcome::success());
        }
        Ok(SequenceOutcome { exit_code: self.exit_code, failed_command: commands.first().cloned() })
    }
}
