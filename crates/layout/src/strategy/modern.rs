use super::{PageLayout, RenderStrategy, RowGroup};
use crate::LayoutError;
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::cursor::Cursor;
use crate::format::{format_amount, format_date, format_number};
use crate::painting::paint_thumbnail;
use crate::text::measure_wrapped_height;
use quire_render_core::DrawingSurface;
use quire_style::{FontFamily, FontSpec, FontStyle, TextAlign};
use quire_types::{Color, InvoiceDocument, Party, Rect};

const MARGIN: f32 = 20.0;
const HEADER_HEIGHT: f32 = 60.0;
const ACCENT_BAR_WIDTH: f32 = 5.0;
const BODY_TOP: f32 = 75.0;
const LINE_HEIGHT: f32 = 5.0;
const ROW_GAP: f32 = 2.0;
const IMAGE_COLUMN_WIDTH: f32 = 15.0;
const THUMBNAIL_SIZE: f32 = 12.0;
/// Horizontal extent of the description column from the table's left edge.
const DESCRIPTION_SPAN: f32 = 95.0;
const TOTALS_WIDTH: f32 = 60.0;

const HEADER_FILL: Color = Color::rgb(45, 55, 72);
const DEFAULT_ACCENT: Color = Color::rgb(99, 102, 241);
const INK: Color = Color::rgb(30, 41, 59);
const TABLE_HEADER_FILL: Color = Color::rgb(241, 245, 249);
const RULE: Color = Color::rgb(226, 232, 240);
const FOOTER_INK: Color = Color::rgb(148, 163, 184);

fn sans(style: FontStyle, size: f32) -> FontSpec {
    FontSpec::new(FontFamily::Helvetica, style, size)
}

/// Where the description column sits, which depends on whether the table
/// carries an image column.
#[derive(Debug, Clone, Copy)]
struct ItemColumns {
    images: bool,
    description_x: f32,
    description_width: f32,
}

impl ItemColumns {
    fn for_document(doc: &InvoiceDocument) -> Self {
        if doc.has_item_images() {
            Self {
                images: true,
                description_x: MARGIN + IMAGE_COLUMN_WIDTH + 4.0,
                description_width: DESCRIPTION_SPAN - IMAGE_COLUMN_WIDTH - 4.0,
            }
        } else {
            Self {
                images: false,
                description_x: MARGIN + 2.0,
                description_width: DESCRIPTION_SPAN - 4.0,
            }
        }
    }

    fn row_height(&self, line_count: usize) -> f32 {
        let text_height = line_count as f32 * LINE_HEIGHT;
        if self.images {
            (THUMBNAIL_SIZE + 4.0).max(text_height + 4.0)
        } else {
            text_height.max(8.0)
        }
    }
}

/// Dark header band with an accent bar, sans-serif type and item thumbnails.
#[derive(Debug, Clone)]
pub struct ModernStrategy {
    accent: Color,
    default_currency: String,
}

impl ModernStrategy {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            accent: config.accent_color.unwrap_or(DEFAULT_ACCENT),
            default_currency: config.default_currency.clone(),
        }
    }

    fn draw_header(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument) {
        let page_width = canvas.page_width();
        canvas.set_fill_color(HEADER_FILL);
        canvas.fill_rect(Rect::new(0.0, 0.0, page_width, HEADER_HEIGHT));
        canvas.set_fill_color(self.accent);
        canvas.fill_rect(Rect::new(0.0, 0.0, ACCENT_BAR_WIDTH, HEADER_HEIGHT));

        canvas.set_text_color(Color::WHITE);
        canvas.set_font(sans(FontStyle::Bold, 28.0));
        canvas.text("INVOICE", MARGIN + 15.0, 25.0);

        let right = page_width - MARGIN;
        canvas.set_font(sans(FontStyle::Normal, 10.0));
        canvas.text_right(&format!("Invoice #{}", doc.invoice_number), right, 20.0);
        canvas.text_right(&format!("Issue Date: {}", format_date(&doc.issue_date)), right, 26.0);
        canvas.text_right(&format!("Due Date: {}", format_date(&doc.due_date)), right, 32.0);
    }

    /// FROM and TO columns, each with its own cursor. Continues 15mm below the longer one.
    fn draw_parties(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, cursor: &mut Cursor) {
        let to_x = canvas.page_width() / 2.0 + 10.0;

        canvas.set_text_color(INK);
        canvas.set_font(sans(FontStyle::Bold, 11.0));
        canvas.text("FROM", MARGIN, cursor.y());
        canvas.text("TO", to_x, cursor.y());

        let names_y = cursor.advance(8.0);
        canvas.set_font(sans(FontStyle::Normal, 9.0));
        let from_bottom = draw_party_column(canvas, &doc.from, MARGIN, names_y);
        let to_bottom = draw_party_column(canvas, &doc.to, to_x, names_y);

        cursor.move_to(from_bottom.max(to_bottom) + 15.0);
    }

    fn draw_table_header(&self, canvas: &mut Canvas<'_>, columns: &ItemColumns, cursor: &mut Cursor) {
        let page_width = canvas.page_width();
        let y = cursor.y();

        canvas.set_fill_color(TABLE_HEADER_FILL);
        canvas.fill_rect(Rect::new(MARGIN, y - 7.0, page_width - 2.0 * MARGIN, 8.0));
        canvas.set_draw_color(RULE);
        canvas.set_line_width(0.5);
        canvas.line(MARGIN, y - 7.0, page_width - MARGIN, y - 7.0);
        canvas.line(MARGIN, y + 1.0, page_width - MARGIN, y + 1.0);

        canvas.set_text_color(INK);
        canvas.set_font(sans(FontStyle::Bold, 9.0));
        let label_y = y - 2.0;
        if columns.images {
            canvas.text("Image", MARGIN + 2.0, label_y);
        }
        canvas.text("Description", columns.description_x, label_y);
        canvas.text("Qty", MARGIN + 95.0, label_y);
        canvas.text("Price", MARGIN + 110.0, label_y);
        canvas.text_right("Amount", page_width - MARGIN - 2.0, label_y);

        // Leave room for the first thumbnail, which rises above its row.
        let header_bottom = y + 1.0;
        cursor.move_to(header_bottom + if columns.images { 10.0 } else { 6.0 });
    }

    fn draw_items(
        &self,
        canvas: &mut Canvas<'_>,
        doc: &InvoiceDocument,
        columns: &ItemColumns,
        currency: &str,
        cursor: &mut Cursor,
    ) -> Vec<RowGroup> {
        let amount_x = canvas.page_width() - MARGIN - 2.0;
        let body = sans(FontStyle::Normal, 9.0);
        canvas.set_font(body);

        let mut rows = Vec::with_capacity(doc.items.len());
        for (item_index, item) in doc.items.iter().enumerate() {
            let top = cursor.y();
            let lines = canvas.wrap(&item.description, columns.description_width, &body);
            let height = columns.row_height(lines.len());

            // Centred on the first text line, but never more than half above the row.
            let thumbnail = columns.images.then(|| {
                let image_y = top - THUMBNAIL_SIZE / 2.0;
                let rect = Rect::square(MARGIN + 2.0, image_y, THUMBNAIL_SIZE);
                paint_thumbnail(canvas, item.image_ref(), rect)
            });

            for (line_index, line) in lines.iter().enumerate() {
                let y = top + line_index as f32 * LINE_HEIGHT;
                if !line.is_empty() {
                    canvas.text(line, columns.description_x, y);
                }
                if line_index == 0 {
                    canvas.text(&format_number(item.quantity), MARGIN + 95.0, y);
                    canvas.text(&format_amount(item.unit_price, currency), MARGIN + 110.0, y);
                    if let Some(total) = item.line_total() {
                        canvas.text_right(&format_amount(total, currency), amount_x, y);
                    }
                }
            }
            log::debug!(
                "Modern row {}: {} line(s), top {:.1}mm, height {:.1}mm",
                item_index,
                lines.len(),
                top,
                height
            );

            rows.push(RowGroup {
                item_index,
                top,
                height,
                thumbnail,
            });
            cursor.advance(height + ROW_GAP);
        }
        rows
    }

    fn draw_totals(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, currency: &str, cursor: &mut Cursor) {
        let page_width = canvas.page_width();
        let totals_x = page_width - MARGIN - TOTALS_WIDTH;
        let right = page_width - MARGIN - 2.0;

        let rule_y = cursor.advance(5.0);
        canvas.set_draw_color(RULE);
        canvas.set_line_width(0.5);
        canvas.line(MARGIN, rule_y, right, rule_y);

        let y = cursor.advance(10.0);
        canvas.set_text_color(INK);
        canvas.set_font(sans(FontStyle::Normal, 9.0));
        canvas.text("Subtotal:", totals_x, y);
        canvas.text_right(&format_amount(doc.subtotal, currency), right, y);

        if doc.tax_amount() > rust_decimal::Decimal::ZERO {
            let y = cursor.advance(7.0);
            canvas.text(&format!("Tax ({}%):", format_number(doc.tax_rate_percent())), totals_x, y);
            canvas.text_right(&format_amount(doc.tax_amount(), currency), right, y);
        }

        let y = cursor.advance(10.0);
        let band_x = totals_x - 5.0;
        canvas.set_fill_color(self.accent);
        canvas.fill_rect(Rect::new(band_x, y - 8.0, right + 3.0 - band_x, 10.0));

        canvas.set_text_color(Color::WHITE);
        canvas.set_font(sans(FontStyle::Bold, 11.0));
        canvas.text("Total:", totals_x, y);
        canvas.text_right(&format_amount(doc.total, currency), right, y);
    }

    fn draw_notes(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, cursor: &mut Cursor) {
        let width = canvas.page_width() - 2.0 * MARGIN;
        if let Some(notes) = doc.notes_text() {
            cursor.advance(20.0);
            draw_paragraph(canvas, "Notes:", notes, width, cursor);
        }
        if let Some(terms) = doc.payment_terms_text() {
            cursor.advance(5.0);
            draw_paragraph(canvas, "Payment Terms:", terms, width, cursor);
        }
    }

    fn draw_footer(&self, canvas: &mut Canvas<'_>) {
        let page_width = canvas.page_width();
        let footer_y = canvas.page_height() - 15.0;
        canvas.set_draw_color(RULE);
        canvas.set_line_width(0.5);
        canvas.line(MARGIN, footer_y, page_width - MARGIN, footer_y);
        canvas.set_text_color(FOOTER_INK);
        canvas.set_font(sans(FontStyle::Italic, 7.0));
        canvas.text_aligned(
            "Thank you for your business!",
            page_width / 2.0,
            footer_y + 5.0,
            TextAlign::Center,
        );
    }
}

/// Name then each present contact line, 5mm apart. Returns the last baseline.
fn draw_party_column(canvas: &mut Canvas<'_>, party: &Party, x: f32, top: f32) -> f32 {
    let mut y = top;
    canvas.text(&party.name, x, y);
    for line in party.contact_lines() {
        y += LINE_HEIGHT;
        canvas.text(&line, x, y);
    }
    y
}

/// Bold label, then the wrapped body 6mm below it. Leaves the cursor one line
/// below the last body line.
fn draw_paragraph(canvas: &mut Canvas<'_>, label: &str, body: &str, width: f32, cursor: &mut Cursor) {
    canvas.set_text_color(INK);
    canvas.set_font(sans(FontStyle::Bold, 9.0));
    canvas.text(label, MARGIN, cursor.y());
    cursor.advance(6.0);

    let font = sans(FontStyle::Normal, 9.0);
    canvas.set_font(font);
    let lines = canvas.wrap(body, width, &font);
    for line in &lines {
        canvas.text(line, MARGIN, cursor.y());
        cursor.advance(LINE_HEIGHT);
    }
    log::debug!(
        "'{}' paragraph: {} line(s), {:.1}mm",
        label,
        lines.len(),
        measure_wrapped_height(&lines, LINE_HEIGHT)
    );
}

impl RenderStrategy for ModernStrategy {
    fn render(
        &self,
        doc: &InvoiceDocument,
        surface: &mut dyn DrawingSurface,
    ) -> Result<PageLayout, LayoutError> {
        let mut canvas = Canvas::new(surface);
        let currency = doc.currency_or(&self.default_currency);
        let columns = ItemColumns::for_document(doc);

        self.draw_header(&mut canvas, doc);

        let mut cursor = Cursor::at(BODY_TOP);
        self.draw_parties(&mut canvas, doc, &mut cursor);
        self.draw_table_header(&mut canvas, &columns, &mut cursor);
        let rows = self.draw_items(&mut canvas, doc, &columns, currency, &mut cursor);
        self.draw_totals(&mut canvas, doc, currency, &mut cursor);
        self.draw_notes(&mut canvas, doc, &mut cursor);

        if cursor.y() > canvas.page_height() - 15.0 {
            log::debug!(
                "Invoice {} content ends at {:.1}mm, past the footer rule",
                doc.invoice_number,
                cursor.y()
            );
        }
        self.draw_footer(&mut canvas);

        Ok(PageLayout {
            commands: canvas.into_commands(),
            rows,
        })
    }

    fn name(&self) -> &'static str {
        "modern"
    }
}
