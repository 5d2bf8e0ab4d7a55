//! Materialize the live `.env` from the skeleton's template.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::skeleton::{self, DatabaseCredentials, ENV_FILE, ENV_TEMPLATE_FILE};
use crate::ports::Prompter;
use crate::services::{EnvFileMerger, write_atomic};

pub fn configure(target: &Path, prompter: &dyn Prompter) -> Result<(), AppError> {
    let template = target.join(ENV_TEMPLATE_FILE);
    let live = target.join(ENV_FILE);

    let content =
        fs::read(&template).map_err(|source| AppError::EnvRead { path: template.clone(), source })?;
    write_atomic(&live, &content)?;

    let credentials = ask_credentials(prompter)?;
    let patch = skeleton::env_patch(&project_name(target), &credentials);

    EnvFileMerger::load(&live)?.update_all(&patch).publish_in_place()
}

fn ask_credentials(prompter: &dyn Prompter) -> Result<DatabaseCredentials, AppError> {
    Ok(DatabaseCredentials {
        database: prompter.ask("DB_DATABASE", "")?,
        username: prompter.ask("DB_USERNAME", "")?,
        password: prompter.ask("DB_PASSWORD", "")?,
    })
}

/// Base name of the project directory.
pub fn project_name(target: &Path) -> String {
    target.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
