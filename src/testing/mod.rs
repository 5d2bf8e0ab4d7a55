mod fake_extractor;
mod fake_fetcher;
mod fake_permissions;
mod recording_runner;
mod scripted_prompter;

pub use fake_extractor::FakeExtractor;
pub use fake_fetcher::FakeFetcher;
pub use fake_permissions::FakePermissions;
pub use recording_runner::RecordingRunner;
pub use scripted_prompter::ScriptedPrompter;
