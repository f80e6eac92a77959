//! Fetches remote thumbnails over HTTP(S).
//!
//! Requests are blocking and made once; there are no retries.

use quire_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct HttpResourceProvider {
    client: reqwest::blocking::Client,
}

impl HttpResourceProvider {
    pub fn new() -> Result<Self, ResourceError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ResourceError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("quire/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ResourceError::LoadFailed {
                path: String::new(),
                message: format!("HTTP client error: {}", e),
            })?;
        Ok(Self { client })
    }
}

impl ResourceProvider for HttpResourceProvider {
    fn load(&self, url: &str) -> Result<SharedResourceData, ResourceError> {
        let failed = |message: String| ResourceError::LoadFailed {
            path: url.to_string(),
            message,
        };

        log::debug!("Fetching remote image {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| failed(format!("download failed: {}", e)))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ResourceError::NotFound(url.to_string()));
        }
        if !response.status().is_success() {
            return Err(failed(format!("HTTP {}", response.status())));
        }
        let bytes = response
            .bytes()
            .map_err(|e| failed(format!("failed to read body: {}", e)))?;
        Ok(Arc::new(bytes.to_vec()))
    }

    fn exists(&self, url: &str) -> bool {
        self.client
            .head(url)
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn handles(&self, path: &str) -> bool {
        let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    fn name(&self) -> &'static str {
        "HttpResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_http_urls_only() {
        let provider = HttpResourceProvider::new().unwrap();
        assert!(provider.handles("https://cdn.example.com/a.png"));
        assert!(provider.handles("HTTP://cdn.example.com/a.png"));
        assert!(!provider.handles("thumbs/a.png"));
        assert!(!provider.handles("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_unreachable_host_is_load_failure() {
        let provider = HttpResourceProvider::with_timeout(Duration::from_millis(200)).unwrap();
        let result = provider.load("http://127.0.0.1:9/none.png");
        assert!(matches!(result, Err(ResourceError::LoadFailed { .. })));
    }
}
