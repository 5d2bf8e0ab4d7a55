use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, CommandSpec};
use crate::ports::{CommandRunner, SequenceOutcome};

/// Exit code reported when a child is terminated by a signal.
const SIGNALLED_EXIT_CODE: i32 = 1;

/// Runs commands as child processes sharing this process's terminal.
///
/// Stdio is inherited, so output interleaves with ours as it is produced and
/// interactive prompts from the child reach the user directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl CommandRunner for ProcessCommandRunner {
    fn run_sequence(
        &self,
        commands: &[CommandSpec],
        cwd: &Path,
    ) -> Result<SequenceOutcome, AppError> {
        for spec in commands {
            debug!(command = %spec, cwd = %cwd.display(), "running");

            let status = Command::new(&spec.program)
                .args(&spec.args)
                .current_dir(cwd)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| AppError::ExternalTool {
                    tool: spec.program.clone(),
                    error: e.to_string(),
                })?;

            if !status.success() {
                let exit_code = status.code().unwrap_or(SIGNALLED_EXIT_CODE);
                return Ok(SequenceOutcome { exit_code, failed_command: Some(spec.clone()) });
            }
        }

        Ok(SequenceOutcome::success())
    }
}
