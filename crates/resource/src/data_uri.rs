//! Inline images carried as `data:` URIs.

use base64::{Engine as _, engine::general_purpose};
use quire_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

/// Decodes `data:[<mediatype>][;base64],<payload>` references.
///
/// Payloads without the `;base64` marker are taken verbatim.
#[derive(Debug, Default, Clone)]
pub struct DataUriResourceProvider;

impl DataUriResourceProvider {
    pub fn new() -> Self {
        Self
    }

    fn decode(&self, uri: &str) -> Result<Vec<u8>, ResourceError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ResourceError::Unsupported(truncate(uri)))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ResourceError::InvalidFormat("data URI has no ',' separator".into()))?;

        if header.split(';').any(|param| param.eq_ignore_ascii_case("base64")) {
            // Line breaks are common in pasted payloads.
            let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            general_purpose::STANDARD
                .decode(compact.as_bytes())
                .map_err(|e| ResourceError::InvalidFormat(format!("bad base64 payload: {}", e)))
        } else {
            Ok(payload.as_bytes().to_vec())
        }
    }
}

fn truncate(uri: &str) -> String {
    uri.chars().take(48).collect()
}

impl ResourceProvider for DataUriResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        self.decode(path).map(Arc::new)
    }

    fn exists(&self, path: &str) -> bool {
        self.decode(path).is_ok()
    }

    fn handles(&self, path: &str) -> bool {
        path.get(..5).is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
    }

    fn name(&self) -> &'static str {
        "DataUriResourceProvider"
    }
}
