pub mod channel;
pub mod command;
pub mod config;
pub mod env_document;
pub mod error;
pub mod manifest;
pub mod patch;
pub mod skeleton;
pub mod stage;

pub use channel::ReleaseChannel;
pub use command::CommandSpec;
pub use config::InstallerConfig;
pub use env_document::EnvDocument;
pub use error::AppError;
pub use manifest::{ManifestDocument, ManifestError};
pub use patch::ConfigurationPatch;
pub use skeleton::DatabaseCredentials;
pub use stage::PipelineStage;
