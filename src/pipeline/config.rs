// src/pipeline/config.rs
use crate::error::PipelineError;
use quire_layout::{LayoutConfig, TemplateStyle, format_currency};
use quire_types::Color;
use quire_types::document::DEFAULT_CURRENCY;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Renderer settings, loadable from a JSON file.
///
/// Every field is optional in the file; missing fields take the defaults below.
///
/// ```json
/// {
///   "template": "classic",
///   "defaultCurrency": "EUR",
///   "accentColor": "#0f766e",
///   "assetDir": "./thumbnails",
///   "remoteImages": false,
///   "parallel": true,
///   "threads": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub template: TemplateStyle,
    /// Used for documents without a `currency`. Defaults to `"USD"`.
    pub default_currency: String,
    pub accent_color: Option<Color>,
    /// Base directory for relative image paths. Defaults to the working directory.
    pub asset_dir: Option<PathBuf>,
    /// Fetch `http(s)://` thumbnails. Requires the `remote` feature.
    pub remote_images: bool,
    /// Render batches on the parallel executor.
    pub parallel: bool,
    /// Size of a dedicated worker pool for parallel batches. `None` shares the global pool.
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: TemplateStyle::default(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            accent_color: None,
            asset_dir: None,
            remote_images: false,
            parallel: false,
            threads: None,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    /// Rejects settings that would only fail later, mid-render.
    pub fn validate(&self) -> Result<(), PipelineError> {
        format_currency(Decimal::ZERO, &self.default_currency)
            .map_err(|e| PipelineError::Config(format!("defaultCurrency: {}", e)))?;
        if self.threads == Some(0) {
            return Err(PipelineError::Config("threads must be at least 1".to_string()));
        }
        if self.remote_images && !cfg!(feature = "remote") {
            return Err(PipelineError::Config(
                "remoteImages requires quire to be built with the `remote` feature".to_string(),
            ));
        }
        Ok(())
    }

    pub fn layout_config(&self) -> LayoutConfig {
        let layout = LayoutConfig::default().with_default_currency(self.default_currency.clone());
        match self.accent_color {
            Some(color) => layout.with_accent_color(color),
            None => layout,
        }
    }
}
