//! Release channel selection.

use std::fmt;

/// Which published skeleton archive to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseChannel {
    /// Latest tagged release.
    #[default]
    Stable,
    /// Latest development build.
    Prerelease,
}

impl ReleaseChannel {
    /// Resolve the channel from the `--dev` flag.
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev { ReleaseChannel::Prerelease } else { ReleaseChannel::Stable }
    }

    /// Archive file name published for this channel.
    pub fn archive_name(self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "latest.zip",
            ReleaseChannel::Prerelease => "latest-develop.zip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReleaseChannel::Stable => "stable",
            ReleaseChannel::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_flag_selects_prerelease_archive() {
        assert_eq!(ReleaseChannel::from_dev_flag(true).archive_name(), "latest-develop.zip");
        assert_eq!(ReleaseChannel::from_dev_flag(false).archive_name(), "latest.zip");
    }
}
