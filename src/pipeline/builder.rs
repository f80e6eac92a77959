// src/pipeline/builder.rs
use super::config::RenderConfig;
use super::renderer::InvoiceRenderer;
use crate::error::PipelineError;
use quire_executor::{Executor, ExecutorImpl};
use quire_layout::{LayoutEngine, TemplateStyle};
use quire_resource::{DataUriResourceProvider, FilesystemResourceProvider, RoutingResourceProvider};
use quire_traits::ResourceProvider;
use quire_types::Color;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating an `InvoiceRenderer`.
#[derive(Debug, Default)]
pub struct InvoiceRendererBuilder {
    config: RenderConfig,
    resources: Option<Arc<dyn ResourceProvider>>,
}

impl InvoiceRendererBuilder {
    /// Creates a new builder with the default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces every setting with `config`.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads settings from a JSON file. See [`RenderConfig`] for the format.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let config = RenderConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    pub fn with_template(mut self, template: TemplateStyle) -> Self {
        self.config.template = template;
        self
    }

    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.config.default_currency = code.into();
        self
    }

    pub fn with_accent_color(mut self, color: Color) -> Self {
        self.config.accent_color = Some(color);
        self
    }

    /// Resolves relative image paths against `dir`.
    pub fn with_asset_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.asset_dir = Some(dir.into());
        self
    }

    /// Allows `http(s)://` thumbnails. Requires the `remote` feature.
    pub fn with_remote_images(mut self, enabled: bool) -> Self {
        self.config.remote_images = enabled;
        self
    }

    /// Renders batches in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Uses a dedicated pool of `threads` workers for parallel batches.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.config.threads = Some(threads);
        self
    }

    /// Resolves every image reference through `provider` instead of the default routing.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Consumes the builder and creates the `InvoiceRenderer`.
    pub fn build(self) -> Result<InvoiceRenderer, PipelineError> {
        self.config.validate()?;

        let executor = self.select_executor()?;
        let resources = match self.resources.clone() {
            Some(provider) => {
                log::info!("Using caller-supplied resource provider '{}'.", provider.name());
                provider
            }
            None => self.default_resources()?,
        };

        log::info!(
            "Invoice renderer ready: {} template, {} executor.",
            self.config.template,
            executor.name()
        );

        Ok(InvoiceRenderer::new(
            LayoutEngine::new(self.config.layout_config()),
            self.config.template,
            resources,
            executor,
        ))
    }

    /// `data:` URIs, then remote URLs when enabled, then files under the asset directory.
    fn default_resources(&self) -> Result<Arc<dyn ResourceProvider>, PipelineError> {
        let mut routing =
            RoutingResourceProvider::new().with_provider(Arc::new(DataUriResourceProvider::new()));

        #[cfg(feature = "remote")]
        if self.config.remote_images {
            let http = quire_resource::HttpResourceProvider::new()
                .map_err(|e| PipelineError::Config(e.to_string()))?;
            routing.push(Arc::new(http));
            log::info!("Remote thumbnails enabled.");
        }

        let asset_dir = self.config.asset_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        log::info!("Resolving relative image paths against '{}'.", asset_dir.display());
        routing.push(Arc::new(FilesystemResourceProvider::new(asset_dir)));

        Ok(Arc::new(routing))
    }

    fn select_executor(&self) -> Result<ExecutorImpl, PipelineError> {
        if !self.config.parallel {
            return Ok(ExecutorImpl::default());
        }
        match self.config.threads {
            Some(threads) => Ok(ExecutorImpl::with_threads(threads)?),
            None => Ok(ExecutorImpl::parallel()),
        }
    }
}
