mod dialoguer_prompter;
mod filesystem_permissions;
mod http_archive_fetcher;
mod process_command_runner;
mod zip_archive_extractor;

pub use dialoguer_prompter::DialoguerPrompter;
pub use filesystem_permissions::FilesystemPermissions;
pub use http_archive_fetcher::HttpArchiveFetcher;
pub use process_command_runner::ProcessCommandRunner;
pub use zip_archive_extractor::ZipArchiveExtractor;
