use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::strategy::{RowGroup, TemplateStyle};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quire_render_core::{DrawCommand, DrawingSurface};
use quire_types::InvoiceDocument;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invoice number is missing")]
    MissingInvoiceNumber,
    #[error("{party} party has no name")]
    MissingPartyName { party: &'static str },
    #[error("line item {item} amount is out of range")]
    AmountOutOfRange { item: usize },
}

/// Checks the fields every template prints unconditionally.
pub fn validate(doc: &InvoiceDocument) -> Result<(), ValidationError> {
    if doc.invoice_number.trim().is_empty() {
        return Err(ValidationError::MissingInvoiceNumber);
    }
    if doc.from.name.trim().is_empty() {
        return Err(ValidationError::MissingPartyName { party: "from" });
    }
    if doc.to.name.trim().is_empty() {
        return Err(ValidationError::MissingPartyName { party: "to" });
    }
    if let Some(item) = doc.items.iter().position(|item| item.line_total().is_none()) {
        return Err(ValidationError::AmountOutOfRange { item });
    }
    Ok(())
}

/// A finished single-page invoice.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    /// Every state change and paint, in the order the template issued them.
    pub commands: Vec<DrawCommand>,
    pub rows: Vec<RowGroup>,
    pub template: TemplateStyle,
}

impl RenderedDocument {
    /// The PDF as a `data:` URI, suitable for an `<iframe>` or a download link.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:application/pdf;filename=generated.pdf;base64,{}",
            STANDARD.encode(&self.bytes)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Validates `doc`, draws it with `template` and exports the surface.
    ///
    /// Nothing is drawn if validation fails. Any error means no bytes.
    pub fn render(
        &self,
        doc: &InvoiceDocument,
        template: TemplateStyle,
        surface: &mut dyn DrawingSurface,
    ) -> Result<RenderedDocument, LayoutError> {
        validate(doc)?;

        let start = Instant::now();
        let strategy = template.strategy(&self.config);
        let layout = strategy.render(doc, surface)?;
        let bytes = surface.export_bytes()?;

        log::debug!(
            "Rendered invoice '{}' with {} template: {} commands, {} rows, {} bytes in {:?}",
            doc.invoice_number,
            strategy.name(),
            layout.commands.len(),
            layout.rows.len(),
            bytes.len(),
            start.elapsed()
        );

        Ok(RenderedDocument {
            bytes,
            commands: layout.commands,
            rows: layout.rows,
            template,
        })
    }
}
