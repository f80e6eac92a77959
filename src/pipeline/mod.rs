//! Invoice rendering pipeline.
//!
//! - [`InvoiceRendererBuilder`]: Fluent builder that wires template, resources and executor
//! - [`InvoiceRenderer`]: Renders single invoices or batches to PDF
//! - [`RenderConfig`]: Serializable settings, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use quire::{InvoiceRendererBuilder, TemplateStyle};
//!
//! let renderer = InvoiceRendererBuilder::new()
//!     .with_template(TemplateStyle::Classic)
//!     .with_asset_dir("thumbnails")
//!     .build()?;
//!
//! let rendered = renderer.render_json(&std::fs::read_to_string("invoice.json")?)?;
//! std::fs::write("invoice.pdf", &rendered.bytes)?;
//! ```

mod builder;
pub mod config;
mod renderer;

pub use builder::InvoiceRendererBuilder;
pub use config::RenderConfig;
pub use renderer::InvoiceRenderer;
