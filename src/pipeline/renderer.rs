// src/pipeline/renderer.rs
use crate::error::PipelineError;
use quire_executor::{Executor, ExecutorImpl};
use quire_layout::{LayoutEngine, RenderedDocument, TemplateStyle};
use quire_render_lopdf::LopdfSurface;
use quire_traits::ResourceProvider;
use quire_types::InvoiceDocument;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Turns invoices into one-page A4 PDFs. Built by [`InvoiceRendererBuilder`](super::InvoiceRendererBuilder).
///
/// Cheap to clone; clones share the resource provider.
#[derive(Debug, Clone)]
pub struct InvoiceRenderer {
    engine: LayoutEngine,
    template: TemplateStyle,
    resources: Arc<dyn ResourceProvider>,
    executor: ExecutorImpl,
}

impl InvoiceRenderer {
    pub(crate) fn new(
        engine: LayoutEngine,
        template: TemplateStyle,
        resources: Arc<dyn ResourceProvider>,
        executor: ExecutorImpl,
    ) -> Self {
        Self {
            engine,
            template,
            resources,
            executor,
        }
    }

    pub fn template(&self) -> TemplateStyle {
        self.template
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn resources(&self) -> &Arc<dyn ResourceProvider> {
        &self.resources
    }

    pub fn executor(&self) -> &ExecutorImpl {
        &self.executor
    }

    /// Renders with the configured template.
    pub fn render(&self, doc: &InvoiceDocument) -> Result<RenderedDocument, PipelineError> {
        self.render_with(doc, self.template)
    }

    pub fn render_with(
        &self,
        doc: &InvoiceDocument,
        template: TemplateStyle,
    ) -> Result<RenderedDocument, PipelineError> {
        render_one(&self.engine, &self.resources, doc, template)
    }

    /// Parses an invoice from JSON and renders it.
    pub fn render_json(&self, json: &str) -> Result<RenderedDocument, PipelineError> {
        let doc: InvoiceDocument = serde_json::from_str(json)?;
        self.render(&doc)
    }

    /// Renders `doc` and writes the PDF to `path`. Nothing is written if rendering fails.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        doc: &InvoiceDocument,
        path: P,
    ) -> Result<RenderedDocument, PipelineError> {
        let rendered = self.render(doc)?;
        fs::write(path.as_ref(), &rendered.bytes)?;
        log::info!("Wrote {} bytes to {}", rendered.bytes.len(), path.as_ref().display());
        Ok(rendered)
    }

    /// Renders every document on the configured executor.
    ///
    /// Results are in input order. A failed document does not affect the others.
    pub fn render_batch(
        &self,
        docs: Vec<InvoiceDocument>,
    ) -> Vec<Result<RenderedDocument, PipelineError>> {
        let start = Instant::now();
        let count = docs.len();
        let engine = self.engine.clone();
        let resources = Arc::clone(&self.resources);
        let template = self.template;

        let results = self.executor.execute_all_fallible(docs, move |doc| {
            render_one(&engine, &resources, &doc, template)
        });

        let failed = results.iter().filter(|r| r.is_err()).count();
        log::info!(
            "Rendered batch of {} invoice(s) on {} in {:?} ({} failed)",
            count,
            self.executor.name(),
            start.elapsed(),
            failed
        );
        results
    }
}

/// One document, one surface.
fn render_one(
    engine: &LayoutEngine,
    resources: &Arc<dyn ResourceProvider>,
    doc: &InvoiceDocument,
    template: TemplateStyle,
) -> Result<RenderedDocument, PipelineError> {
    let mut surface = LopdfSurface::a4(Arc::clone(resources));
    let rendered = engine.render(doc, template, &mut surface).map_err(|e| {
        log::warn!("Invoice '{}' failed to render: {}", doc.invoice_number, e);
        e
    })?;
    log::info!(
        "Rendered invoice '{}' ({} template, {} item(s), {} image(s))",
        doc.invoice_number,
        template,
        doc.items.len(),
        surface.image_count()
    );
    Ok(rendered)
}
