//! larapress: scaffold LaraPress applications from the published release archive.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{new_project, new_project_with};
pub use app::commands::new::{ScaffoldOutcome, ScaffoldPipeline, ScaffoldRequest};
pub use domain::AppError;
