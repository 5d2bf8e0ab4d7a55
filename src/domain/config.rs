//! Installer configuration resolved once at startup.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use super::{AppError, ReleaseChannel};

pub const DEFAULT_ARCHIVE_BASE_URL: &str = "http://cabinet.laravel.com/";
pub const DEFAULT_PHP_BINARY: &str = "php";
pub const DEFAULT_COMPOSER_BINARY: &str = "composer";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

pub const ENV_ARCHIVE_URL: &str = "LARAPRESS_ARCHIVE_URL";
pub const ENV_PHP: &str = "LARAPRESS_PHP";
pub const ENV_COMPOSER: &str = "LARAPRESS_COMPOSER";

/// Where archives come from and which toolchain binaries the install sequence uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub archive_base_url: Url,
    pub php_binary: String,
    pub composer_binary: String,
    pub http_timeout: Duration,
}

impl InstallerConfig {
    /// Build from a snapshot of environment variables.
    ///
    /// Empty values fall back to the defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, AppError> {
        let lookup = |name: &str, default: &str| {
            vars.get(name)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        let base = lookup(ENV_ARCHIVE_URL, DEFAULT_ARCHIVE_BASE_URL);
        Ok(Self {
            archive_base_url: parse_base_url(&base)?,
            php_binary: lookup(ENV_PHP, DEFAULT_PHP_BINARY),
            composer_binary: lookup(ENV_COMPOSER, DEFAULT_COMPOSER_BINARY),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Build from the current process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Full archive URL for a release channel.
    pub fn archive_url(&self, channel: ReleaseChannel) -> Result<Url, AppError> {
        self.archive_base_url.join(channel.archive_name()).map_err(|e| {
            AppError::Configuration(format!(
                "Cannot resolve '{}' against {}: {}",
                channel.archive_name(),
                self.archive_base_url,
                e
            ))
        })
    }
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            archive_base_url: Url::parse(DEFAULT_ARCHIVE_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default archive URL is valid")),
            php_binary: DEFAULT_PHP_BINARY.to_string(),
            composer_binary: DEFAULT_COMPOSER_BINARY.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    // Url::join replaces the last path segment unless the base ends with '/'.
    let normalized = if raw.ends_with('/') { raw.to_string() } else { format!("{raw}/") };
    let url = Url::parse(&normalized)
        .map_err(|e| AppError::Configuration(format!("Invalid {ENV_ARCHIVE_URL} '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Configuration(format!(
            "Invalid {ENV_ARCHIVE_URL} '{raw}': not a base URL"
        )));
    }
    Ok(url)
}
