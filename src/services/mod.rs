mod env_file_merger;
mod file_writer;
mod manifest_merger;

pub use env_file_merger::EnvFileMerger;
pub use file_writer::write_atomic;
pub use manifest_merger::ManifestMerger;
