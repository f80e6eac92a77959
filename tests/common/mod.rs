#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use quire::{InvoiceDocument, InvoiceRendererBuilder, PipelineError, RenderedDocument, TemplateStyle};
use quire_traits::InMemoryResourceProvider;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render with images served from `provider`.
pub fn render_with_provider(
    doc: &InvoiceDocument,
    template: TemplateStyle,
    provider: InMemoryResourceProvider,
) -> Result<RenderedDocument, PipelineError> {
    InvoiceRendererBuilder::new()
        .with_template(template)
        .with_resource_provider(Arc::new(provider))
        .build()?
        .render(doc)
}

/// Render with no images available.
pub fn render(doc: &InvoiceDocument, template: TemplateStyle) -> Result<RenderedDocument, PipelineError> {
    render_with_provider(doc, template, InMemoryResourceProvider::new())
}

pub fn render_pdf(doc: &InvoiceDocument, template: TemplateStyle) -> Result<(RenderedDocument, GeneratedPdf), Box<dyn std::error::Error>> {
    let rendered = render(doc, template)?;
    let pdf = GeneratedPdf::from_bytes(rendered.bytes.clone())?;
    Ok((rendered, pdf))
}
