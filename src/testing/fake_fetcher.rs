use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArchiveFetcher;

pub struct FakeFetcher {
    response: Result<Vec<u8>, String>,
    pub urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn returning(bytes: Vec<u8>) -> Self {
        Self { response: Ok(bytes), urls: Mutex::new(Vec::new()) }
    }

    pub fn failing(details: &str) -> Self {
        Self { response: Err(details.to_string()), urls: Mutex::new(Vec::new()) }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ArchiveFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        self.urls.lock().unwrap().push(url.to_string());
        self.response
            .clone()
            .map_err(|details| AppError::Fetch { url: url.to_string(), details })
    }
}
