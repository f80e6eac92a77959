use quire_render_core::utils::pt_to_mm;
use quire_render_core::{DrawingSurface, ImageError, PaintMode, SurfaceError};
use quire_style::{FontSpec, TextAlign};
use quire_traits::ResourceError;
use quire_types::{Color, InvoiceDocument, LineItem, Party, Rect};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;

/// An A4 surface that measures with the standard font metrics and draws nothing.
///
/// Only image references registered with [`MockSurface::with_image`] can be drawn.
#[derive(Debug, Default)]
pub struct MockSurface {
    images: HashSet<String>,
    pub fail_export: bool,
    pub paints: usize,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, src: &str) -> Self {
        self.images.insert(src.to_string());
        self
    }
}

impl DrawingSurface for MockSurface {
    fn page_width(&self) -> f32 {
        210.0
    }

    fn page_height(&self) -> f32 {
        297.0
    }

    fn set_fill_color(&mut self, _color: Color) {}

    fn set_draw_color(&mut self, _color: Color) {}

    fn set_text_color(&mut self, _color: Color) {}

    fn set_line_width(&mut self, _width: f32) {}

    fn set_font(&mut self, _font: FontSpec) {}

    fn draw_rect(&mut self, _rect: Rect, _mode: PaintMode) {
        self.paints += 1;
    }

    fn draw_line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32) {
        self.paints += 1;
    }

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _align: TextAlign) {
        self.paints += 1;
    }

    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        pt_to_mm(font.text_width_pt(text))
    }

    fn draw_image(&mut self, src: &str, _rect: Rect) -> Result<(), ImageError> {
        if self.images.contains(src) {
            self.paints += 1;
            Ok(())
        } else {
            Err(ImageError::Resource(ResourceError::NotFound(src.to_string())))
        }
    }

    fn export_bytes(&self) -> Result<Vec<u8>, SurfaceError> {
        if self.fail_export {
            Err(SurfaceError::Other("disk full".into()))
        } else {
            Ok(b"%PDF-mock".to_vec())
        }
    }
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn item(description: &str, quantity: &str, unit_price: &str) -> LineItem {
    LineItem {
        description: description.to_string(),
        quantity: dec(quantity),
        unit_price: dec(unit_price),
        ..Default::default()
    }
}

/// A small, valid invoice: two items, 10% tax, full contact details on both sides.
pub fn sample_invoice() -> InvoiceDocument {
    InvoiceDocument {
        invoice_number: "INV-2024-001".into(),
        issue_date: "2024-01-15".into(),
        due_date: "2024-02-14".into(),
        from: Party {
            name: "Acme Studio".into(),
            address: Some("12 Market Street".into()),
            city: Some("Springfield".into()),
            zip: Some("12345".into()),
            country: Some("USA".into()),
            email: Some("billing@acme.test".into()),
            phone: Some("+1 555 0100".into()),
            tax_id: Some("US-99-1234567".into()),
        },
        to: Party {
            name: "Globex Corporation".into(),
            address: Some("1 Corporate Plaza".into()),
            city: Some("Cypress Creek".into()),
            zip: None,
            country: Some("USA".into()),
            email: Some("ap@globex.test".into()),
            phone: None,
            tax_id: None,
        },
        items: vec![item("Website design", "1", "6000"), item("Hosting (12 months)", "12", "250")],
        subtotal: dec("9000"),
        tax: Some(dec("900")),
        tax_rate: Some(dec("10")),
        total: dec("9900"),
        currency: None,
        notes: Some("Thank you for choosing Acme.".into()),
        payment_terms: Some("Net 30".into()),
    }
}
