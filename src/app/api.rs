//! API Facade for the application.
//!
//! Glues collaborator construction and command execution together.

use crate::adapters::{
    DialoguerPrompter, FilesystemPermissions, HttpArchiveFetcher, ProcessCommandRunner,
    ZipArchiveExtractor,
};
use crate::app::AppContext;
use crate::app::commands::new::ScaffoldPipeline;

pub use crate::app::commands::new::{ScaffoldOutcome, ScaffoldRequest};
pub use crate::domain::{AppError, InstallerConfig, PipelineStage, ReleaseChannel};

/// Scaffold a new project using the real network, filesystem, terminal and toolchain.
///
/// Configuration overrides are read from the process environment.
pub fn new_project(request: ScaffoldRequest) -> Result<ScaffoldOutcome, AppError> {
    let config = InstallerConfig::from_env()?;
    let fetcher = HttpArchiveFetcher::from_config(&config)?;
    let extractor = ZipArchiveExtractor::new();
    let permissions = FilesystemPermissions;
    let prompter = DialoguerPrompter;
    let runner = ProcessCommandRunner;

    let ctx = AppContext::new(&fetcher, &extractor, &permissions, &prompter, &runner);
    new_project_with(&ctx, &config, request)
}

/// Scaffold a new project with caller-supplied collaborators.
pub fn new_project_with(
    ctx: &AppContext<'_>,
    config: &InstallerConfig,
    request: ScaffoldRequest,
) -> Result<ScaffoldOutcome, AppError> {
    ScaffoldPipeline::new(ctx, config, request).run()
}
