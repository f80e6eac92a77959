//! quire renders invoices as single-page A4 PDFs.
//!
//! The layout engine and its templates live in `quire-layout`; the PDF surface in
//! `quire-render-lopdf`. This crate wires them to resource providers and an
//! executor and exposes the [`InvoiceRendererBuilder`] entry point.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{InvoiceRenderer, InvoiceRendererBuilder, RenderConfig};

pub use quire_layout::{
    DrawCommand, LayoutConfig, LayoutEngine, LayoutError, RenderedDocument, RowGroup,
    TemplateStyle, Thumbnail, ValidationError, validate,
};
pub use quire_types::{Color, InvoiceDocument, LineItem, Party};
