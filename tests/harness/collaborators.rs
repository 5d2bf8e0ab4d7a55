//! Test doubles for the interactive and subprocess ports.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use larapress::AppError;
use larapress::domain::CommandSpec;
use larapress::ports::{CommandRunner, Prompter, SequenceOutcome};

pub(crate) struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self { answers: Mutex::new(answers.iter().map(|answer| answer.to_string()).collect()) }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, _prompt: &str, default: &str) -> Result<String, AppError> {
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or_else(|| default.to_string()))
    }
}

#[derive(Default)]
pub(crate) struct RecordingRunner {
    pub(crate) runs: Mutex<Vec<(Vec<String>, PathBuf)>>,
}

impl RecordingRunner {
    pub(crate) fn commands(&self) -> Vec<String> {
        self.runs.lock().unwrap().iter().flat_map(|(commands, _)| commands.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_sequence(
        &self,
        commands: &[CommandSpec],
        cwd: &Path,
    ) -> Result<SequenceOutcome, AppError> {
        self.runs
            .lock()
            .unwrap()
            .push((commands.iter().map(ToString::to_string).collect(), cwd.to_path_buf()));
        Ok(SequenceOutcome::success())
    }
}
