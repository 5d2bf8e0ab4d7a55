//! Release archive download using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::{AppError, InstallerConfig};
use crate::ports::ArchiveFetcher;

/// HTTP client for the release cabinet.
#[derive(Debug, Clone)]
pub struct HttpArchiveFetcher {
    client: Client,
}

impl HttpArchiveFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("larapress/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &InstallerConfig) -> Result<Self, AppError> {
        Self::new(config.http_timeout)
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let fetch_error = |details: String| AppError::Fetch { url: url.to_string(), details };

        debug!(url, "downloading release archive");
        let response = self.client.get(url).send().map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("server responded with {}", status)));
        }

        let bytes = response.bytes().map_err(|e| fetch_error(e.to_string()))?;
        debug!(url, size = bytes.len(), "release archive downloaded");
        Ok(bytes.to_vec())
    }
}
