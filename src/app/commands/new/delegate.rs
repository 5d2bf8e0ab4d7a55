//! Hand the prepared project to composer and artisan.

use std::path::Path;

use crate::domain::skeleton::COMPOSER_PHAR;
use crate::domain::{AppError, CommandSpec, InstallerConfig};
use crate::ports::CommandRunner;

const PUBLISH_PROVIDER: &str = "LaraPress\\Foundation\\Providers\\PublishServiceProvider";
const NO_ANSI: &str = "--no-ansi";

/// Install, lifecycle hooks, then asset publishing, in that order.
pub fn install_commands(
    config: &InstallerConfig,
    working_dir: &Path,
    no_ansi: bool,
) -> Vec<CommandSpec> {
    let composer = |args: &[&str]| composer_command(config, working_dir, args);

    let commands = vec![
        composer(&["install", "--no-scripts"]),
        composer(&["run-script", "post-root-package-install"]),
        composer(&["run-script", "post-create-project-cmd"]),
        composer(&["run-script", "post-autoload-dump"]),
        CommandSpec::new(
            config.php_binary.as_str(),
            [
                "artisan".to_string(),
                "vendor:publish".to_string(),
                format!("--provider={PUBLISH_PROVIDER}"),
                "--force".to_string(),
            ],
        ),
    ];

    if no_ansi {
        commands.into_iter().map(|command| command.arg(NO_ANSI)).collect()
    } else {
        commands
    }
}

/// Prefer a `composer.phar` next to the caller over the configured binary.
fn composer_command(config: &InstallerConfig, working_dir: &Path, args: &[&str]) -> CommandSpec {
    let phar = working_dir.join(COMPOSER_PHAR);
    if phar.is_file() {
        let mut full = vec![phar.to_string_lossy().into_owned()];
        full.extend(args.iter().map(|arg| arg.to_string()));
        CommandSpec::new(config.php_binary.as_str(), full)
    } else {
        CommandSpec::new(config.composer_binary.as_str(), args.iter().copied())
    }
}

/// Run the sequence in `target`; a non-zero exit becomes `DelegatedProcessFailure`.
pub fn run(
    runner: &dyn CommandRunner,
    commands: &[CommandSpec],
    target: &Path,
) -> Result<(), AppError> {
    let outcome = runner.run_sequence(commands, target)?;
    if outcome.is_success() {
        return Ok(());
    }

    let command = outcome
        .failed_command
        .map(|command| command.to_string())
        .unwrap_or_else(|| "install sequence".to_string());
    Err(AppError::DelegatedProcessFailure { command, exit_code: outcome.exit_code })
}
