use std::fmt;

/// Position of a scaffold run in its linear stage sequence.
///
/// Stages advance strictly in declaration order; `Failed` is terminal and
/// reachable from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PipelineStage {
    #[default]
    NotStarted,
    Verified,
    Fetched,
    Extracted,
    PermissionsSet,
    CleanedUp,
    EnvConfigured,
    ManifestConfigured,
    Delegated,
    Failed,
}

impl PipelineStage {
    pub const SEQUENCE: [PipelineStage; 9] = [
        PipelineStage::NotStarted,
        PipelineStage::Verified,
        PipelineStage::Fetched,
        PipelineStage::Extracted,
        PipelineStage::PermissionsSet,
        PipelineStage::CleanedUp,
        PipelineStage::EnvConfigured,
        PipelineStage::ManifestConfigured,
        PipelineStage::Delegated,
    ];

    /// The stage that must directly follow this one, if any.
    pub fn next(self) -> Option<PipelineStage> {
        let idx = Self::SEQUENCE.iter().position(|stage| *stage == self)?;
        Self::SEQUENCE.get(idx + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Delegated | PipelineStage::Failed)
    }

    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::NotStarted => "not started",
            PipelineStage::Verified => "verified",
            PipelineStage::Fetched => "fetched",
            PipelineStage::Extracted => "extracted",
            PipelineStage::PermissionsSet => "permissions set",
            PipelineStage::CleanedUp => "cleaned up",
            PipelineStage::EnvConfigured => "environment configured",
            PipelineStage::ManifestConfigured => "manifest configured",
            PipelineStage::Delegated => "delegated",
            PipelineStage::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
