use crate::ports::{ArchiveExtractor, ArchiveFetcher, CommandRunner, PermissionSetter, Prompter};

/// Application context holding the collaborators a scaffold run talks to.
pub struct AppContext<'a> {
    fetcher: &'a dyn ArchiveFetcher,
    extractor: &'a dyn ArchiveExtractor,
    permissions: &'a dyn PermissionSetter,
    prompter: &'a dyn Prompter,
    runner: &'a dyn CommandRunner,
}

impl<'a> AppContext<'a> {
    /// Create a new application context.
    pub fn new(
        fetcher: &'a dyn ArchiveFetcher,
        extractor: &'a dyn ArchiveExtractor,
        permissions: &'a dyn PermissionSetter,
        prompter: &'a dyn Prompter,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self { fetcher, extractor, permissions, prompter, runner }
    }

    pub fn fetcher(&self) -> &'a dyn ArchiveFetcher {
        self.fetcher
    }

    pub fn extractor(&self) -> &'a dyn ArchiveExtractor {
        self.extractor
    }

    pub fn permissions(&self) -> &'a dyn PermissionSetter {
        self.permissions
    }

    pub fn prompter(&self) -> &'a dyn Prompter {
        self.prompter
    }

    pub fn runner(&self) -> &'a dyn CommandRunner {
        self.runner
    }
}
