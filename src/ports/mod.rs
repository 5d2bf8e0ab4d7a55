mod archive_extractor;
mod archive_fetcher;
mod command_runner;
mod permission_setter;
mod prompter;

pub use archive_extractor::ArchiveExtractor;
pub use archive_fetcher::ArchiveFetcher;
pub use command_runner::{CommandRunner, SequenceOutcome};
pub use permission_setter::PermissionSetter;
pub use prompter::Prompter;
