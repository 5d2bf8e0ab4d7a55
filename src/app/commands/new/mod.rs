//! `new` command: scaffold a project from the published release archive.
//!
//! Stages run strictly in order, each one's postcondition being the next
//! one's precondition:
//!
//! 1. verify the target is free (skipped with `force`)
//! 2. fetch the archive for the requested channel
//! 3. extract it into the target
//! 4. normalize permissions (warning only)
//! 5. remove the temporary archive (silent)
//! 6. write `.env`
//! 7. merge `composer.json`
//! 8. run the install sequence
//!
//! Stages 1-3 abort without side effects on later stages. Failures in 6-8
//! leave the extracted files in place for manual recovery.

mod archive;
mod delegate;
mod environment;
mod manifest;
mod permissions;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, InstallerConfig, PipelineStage, ReleaseChannel};

pub use delegate::install_commands;
pub use environment::project_name;
pub use permissions::PERMISSION_WARNING;

/// Explicit inputs for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Directory relative names and `composer.phar` are resolved against.
    pub working_dir: PathBuf,
    /// Project directory name; `None` scaffolds into `working_dir` itself.
    pub name: Option<String>,
    pub channel: ReleaseChannel,
    /// Skip the target-absence check.
    pub force: bool,
    /// Append `--no-ansi` to every delegated command.
    pub no_ansi: bool,
}

impl ScaffoldRequest {
    pub fn new(working_dir: impl Into<PathBuf>, name: Option<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            name,
            channel: ReleaseChannel::Stable,
            force: false,
            no_ansi: false,
        }
    }

    pub fn target_dir(&self) -> PathBuf {
        match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => self.working_dir.join(name),
            None => self.working_dir.clone(),
        }
    }
}

/// Successful scaffold result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub target: PathBuf,
    /// Non-fatal problems reported along the way.
    pub warnings: Vec<String>,
}

/// Drives one scaffold run through its stages.
pub struct ScaffoldPipeline<'a> {
    ctx: &'a AppContext<'a>,
    config: &'a InstallerConfig,
    request: ScaffoldRequest,
    target: PathBuf,
    stage: PipelineStage,
    completed: PipelineStage,
    warnings: Vec<String>,
}

impl<'a> ScaffoldPipeline<'a> {
    pub fn new(
        ctx: &'a AppContext<'a>,
        config: &'a InstallerConfig,
        request: ScaffoldRequest,
    ) -> Self {
        let target = request.target_dir();
        Self {
            ctx,
            config,
            request,
            target,
            stage: PipelineStage::NotStarted,
            completed: PipelineStage::NotStarted,
            warnings: Vec::new(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Current stage; `Failed` once a fatal error occurred.
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Last stage that completed successfully.
    pub fn completed_stage(&self) -> PipelineStage {
        self.completed
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Run every remaining stage.
    pub fn run(&mut self) -> Result<ScaffoldOutcome, AppError> {
        if self.stage.is_terminal() {
            return Err(AppError::config_error(format!(
                "Scaffold pipeline already finished ({})",
                self.stage
            )));
        }

        match self.run_stages() {
            Ok(()) => {
                Ok(ScaffoldOutcome { target: self.target.clone(), warnings: self.warnings.clone() })
            }
            Err(err) => {
                debug!(completed = %self.completed, error = %err, "scaffold failed");
                self.stage = PipelineStage::Failed;
                Err(err)
            }
        }
    }

    fn run_stages(&mut self) -> Result<(), AppError> {
        verify_target(&self.target, &self.request.working_dir, self.request.force)?;
        self.advance(PipelineStage::Verified);

        let bytes = archive::fetch(self.ctx.fetcher(), self.config, self.request.channel)?;
        self.advance(PipelineStage::Fetched);

        let working_dir = self.request.working_dir.clone();
        let archive_path =
            archive::extract(self.ctx.extractor(), &bytes, &working_dir, &self.target)?;
        drop(bytes);
        self.advance(PipelineStage::Extracted);

        if let Some(warning) = permissions::normalize(self.ctx.permissions(), &self.target) {
            self.warnings.push(warning);
        }
        self.advance(PipelineStage::PermissionsSet);

        archive::clean_up(&archive_path);
        self.advance(PipelineStage::CleanedUp);

        environment::configure(&self.target, self.ctx.prompter())?;
        self.advance(PipelineStage::EnvConfigured);

        manifest::configure(&self.target)?;
        self.advance(PipelineStage::ManifestConfigured);

        let commands = delegate::install_commands(self.config, &working_dir, self.request.no_ansi);
        delegate::run(self.ctx.runner(), &commands, &self.target)?;
        self.advance(PipelineStage::Delegated);

        Ok(())
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert_eq!(self.stage.next(), Some(next), "stages must advance in order");
        self.stage = next;
        self.completed = next;
        debug!(stage = %next, project = %self.target.display(), "stage complete");
    }
}

/// Refuse to scaffold over an existing file or directory, unless it is the
/// working directory itself or `force` is set.
pub fn verify_target(target: &Path, working_dir: &Path, force: bool) -> Result<(), AppError> {
    if force {
        return Ok(());
    }
    if target.exists() && target != working_dir {
        return Err(AppError::TargetExists { path: target.to_path_buf() });
    }
    Ok(())
}
