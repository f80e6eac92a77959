//! Dispatches image references to the provider that understands them.

use quire_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

/// Tries each registered provider in order and uses the first whose
/// [`ResourceProvider::handles`] accepts the reference.
#[derive(Debug, Default, Clone)]
pub struct RoutingResourceProvider {
    providers: Vec<Arc<dyn ResourceProvider>>,
}

impl RoutingResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn push(&mut self, provider: Arc<dyn ResourceProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn route(&self, path: &str) -> Option<&Arc<dyn ResourceProvider>> {
        self.providers.iter().find(|p| p.handles(path))
    }
}

impl ResourceProvider for RoutingResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let provider = self.route(path).ok_or_else(|| {
            log::debug!("No image provider handles '{}'", path);
            ResourceError::Unsupported(path.to_string())
        })?;
        provider.load(path)
    }

    fn exists(&self, path: &str) -> bool {
        self.route(path).is_some_and(|p| p.exists(path))
    }

    fn handles(&self, path: &str) -> bool {
        self.route(path).is_some()
    }

    fn name(&self) -> &'static str {
        "RoutingResourceProvider"
    }
}
