//! New command implementation.

use tracing::debug;

use crate::app::api::{self, ScaffoldRequest};
use crate::domain::{AppError, ReleaseChannel};

pub struct NewArgs {
    pub name: Option<String>,
    pub dev: bool,
    pub force: bool,
    pub no_ansi: bool,
}

pub fn run_new(args: NewArgs) -> Result<(), AppError> {
    let request = ScaffoldRequest {
        working_dir: std::env::current_dir()?,
        name: args.name,
        channel: ReleaseChannel::from_dev_flag(args.dev),
        force: args.force,
        no_ansi: args.no_ansi,
    };

    println!("Crafting application...");
    let outcome = api::new_project(request)?;
    debug!(project = %outcome.target.display(), warnings = outcome.warnings.len(), "done");

    for warning in &outcome.warnings {
        eprintln!("⚠️  {}", warning);
    }
    println!("✅ Application ready! Build something amazing.");
    Ok(())
}
