use super::{PageLayout, RenderStrategy, RowGroup};
use crate::LayoutError;
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::cursor::Cursor;
use crate::format::{format_amount, format_date, format_number};
use crate::text::measure_wrapped_height;
use quire_render_core::DrawingSurface;
use quire_style::{FontFamily, FontSpec, FontStyle, TextAlign};
use quire_types::{Color, InvoiceDocument, Party, Rect};
use rust_decimal::Decimal;

const MARGIN: f32 = 25.0;
const HEADER_HEIGHT: f32 = 40.0;
const PARTY_BOX_HEIGHT: f32 = 50.0;
const LINE_HEIGHT: f32 = 5.0;
const TABLE_HEADER_HEIGHT: f32 = 8.0;
const ROW_PADDING: f32 = 3.0;
const DESCRIPTION_WIDTH: f32 = 70.0;
/// Column dividers, measured from the left margin.
const COLUMN_DIVIDERS: [f32; 3] = [80.0, 95.0, 120.0];
const TOTALS_WIDTH: f32 = 60.0;
const NOTES_MIN_HEIGHT: f32 = 40.0;

const BOX_BORDER: Color = Color::gray(200);
const TABLE_HEADER_FILL: Color = Color::gray(240);
const FOOTER_INK: Color = Color::gray(100);

fn serif(style: FontStyle, size: f32) -> FontSpec {
    FontSpec::new(FontFamily::Times, style, size)
}

/// Ruled boxes and serif type, in the manner of a printed form. No thumbnails.
#[derive(Debug, Clone)]
pub struct ClassicStrategy {
    default_currency: String,
}

impl ClassicStrategy {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            default_currency: config.default_currency.clone(),
        }
    }

    fn draw_header(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, cursor: &mut Cursor) {
        let page_width = canvas.page_width();
        let top = cursor.y();

        canvas.set_draw_color(Color::BLACK);
        canvas.set_line_width(0.5);
        canvas.stroke_rect(Rect::new(MARGIN, top, page_width - 2.0 * MARGIN, HEADER_HEIGHT));

        canvas.set_text_color(Color::BLACK);
        canvas.set_font(serif(FontStyle::Bold, 32.0));
        canvas.text("INVOICE", MARGIN + 5.0, top + 20.0);

        let right = page_width - MARGIN - 5.0;
        canvas.set_font(serif(FontStyle::Normal, 10.0));
        canvas.text_right(&format!("Invoice Number: {}", doc.invoice_number), right, top + 10.0);
        canvas.text_right(&format!("Issue Date: {}", format_date(&doc.issue_date)), right, top + 16.0);
        canvas.text_right(&format!("Due Date: {}", format_date(&doc.due_date)), right, top + 22.0);

        cursor.advance(HEADER_HEIGHT + 10.0);
    }

    fn draw_parties(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, cursor: &mut Cursor) {
        let box_width = (canvas.page_width() - 2.0 * MARGIN) / 2.0 - 10.0;
        let top = cursor.y();
        draw_party_box(canvas, "FROM", &doc.from, Rect::new(MARGIN, top, box_width, PARTY_BOX_HEIGHT));
        draw_party_box(
            canvas,
            "TO",
            &doc.to,
            Rect::new(MARGIN + box_width + 20.0, top, box_width, PARTY_BOX_HEIGHT),
        );
        cursor.advance(PARTY_BOX_HEIGHT + 10.0);
    }

    /// Header band, outer border and dividers sized to enclose every row, then the rows.
    fn draw_items(
        &self,
        canvas: &mut Canvas<'_>,
        doc: &InvoiceDocument,
        currency: &str,
        cursor: &mut Cursor,
    ) -> Vec<RowGroup> {
        let page_width = canvas.page_width();
        let table_width = page_width - 2.0 * MARGIN;
        let amount_x = page_width - MARGIN - 5.0;
        let table_y = cursor.y();
        let body = serif(FontStyle::Normal, 9.0);

        let wrapped: Vec<Vec<String>> = doc
            .items
            .iter()
            .map(|item| canvas.wrap(&item.description, DESCRIPTION_WIDTH, &body))
            .collect();
        let rows_height: f32 = wrapped
            .iter()
            .map(|lines| measure_wrapped_height(lines, LINE_HEIGHT) + ROW_PADDING)
            .sum();
        let table_height = TABLE_HEADER_HEIGHT + rows_height;

        canvas.set_fill_color(TABLE_HEADER_FILL);
        canvas.fill_rect(Rect::new(MARGIN, table_y, table_width, TABLE_HEADER_HEIGHT));
        canvas.set_draw_color(Color::BLACK);
        canvas.set_line_width(0.3);
        canvas.stroke_rect(Rect::new(MARGIN, table_y, table_width, table_height));
        for offset in COLUMN_DIVIDERS {
            canvas.line(MARGIN + offset, table_y, MARGIN + offset, table_y + table_height);
        }
        let header_bottom = table_y + TABLE_HEADER_HEIGHT;
        canvas.line(MARGIN, header_bottom, page_width - MARGIN, header_bottom);

        canvas.set_font(serif(FontStyle::Bold, 9.0));
        let label_y = table_y + 6.0;
        canvas.text("Description", MARGIN + 5.0, label_y);
        canvas.text("Qty", MARGIN + 82.0, label_y);
        canvas.text("Price", MARGIN + 97.0, label_y);
        canvas.text_right("Amount", amount_x, label_y);

        canvas.set_font(body);
        cursor.move_to(header_bottom);
        let mut rows = Vec::with_capacity(doc.items.len());
        for (item_index, (item, lines)) in doc.items.iter().zip(&wrapped).enumerate() {
            let top = cursor.y();
            if item_index > 0 {
                canvas.line(MARGIN, top, page_width - MARGIN, top);
            }
            for (line_index, line) in lines.iter().enumerate() {
                let y = top + LINE_HEIGHT + line_index as f32 * LINE_HEIGHT;
                if !line.is_empty() {
                    canvas.text(line, MARGIN + 5.0, y);
                }
                if line_index == 0 {
                    canvas.text(&format_number(item.quantity), MARGIN + 82.0, y);
                    canvas.text(&format_amount(item.unit_price, currency), MARGIN + 97.0, y);
                    if let Some(total) = item.line_total() {
                        canvas.text_right(&format_amount(total, currency), amount_x, y);
                    }
                }
            }

            let height = measure_wrapped_height(lines, LINE_HEIGHT) + ROW_PADDING;
            rows.push(RowGroup {
                item_index,
                top,
                height,
                thumbnail: None,
            });
            cursor.advance(height);
        }
        log::debug!(
            "Classic table: {} row(s), {:.1}mm tall",
            rows.len(),
            table_height
        );

        cursor.advance(10.0);
        rows
    }

    fn draw_totals(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, currency: &str, cursor: &mut Cursor) {
        let page_width = canvas.page_width();
        let totals_x = page_width - MARGIN - TOTALS_WIDTH;
        let right = page_width - MARGIN - 5.0;

        canvas.set_draw_color(Color::BLACK);
        canvas.set_font(serif(FontStyle::Normal, 9.0));
        let y = cursor.y();
        canvas.text("Subtotal:", totals_x, y);
        canvas.text_right(&format_amount(doc.subtotal, currency), right, y);

        if doc.tax_amount() > Decimal::ZERO {
            let y = cursor.advance(7.0);
            canvas.text(&format!("Tax ({}%):", format_number(doc.tax_rate_percent())), totals_x, y);
            canvas.text_right(&format_amount(doc.tax_amount(), currency), right, y);
        }

        let y = cursor.advance(10.0);
        canvas.set_line_width(1.0);
        canvas.line(totals_x - 5.0, y - 5.0, right, y - 5.0);
        canvas.set_line_width(0.3);
        canvas.line(totals_x - 5.0, y - 6.0, right, y - 6.0);

        canvas.set_font(serif(FontStyle::Bold, 11.0));
        canvas.text("Total:", totals_x, y);
        canvas.text_right(&format_amount(doc.total, currency), right, y);
    }

    /// One box holding notes then payment terms, grown to fit both.
    fn draw_notes(&self, canvas: &mut Canvas<'_>, doc: &InvoiceDocument, cursor: &mut Cursor) {
        let notes = doc.notes_text();
        let terms = doc.payment_terms_text();
        if notes.is_none() && terms.is_none() {
            return;
        }

        let page_width = canvas.page_width();
        let text_width = page_width - 2.0 * MARGIN - 10.0;
        let body = serif(FontStyle::Normal, 9.0);
        let y = cursor.advance(20.0);

        let mut sections: Vec<(&str, f32, Vec<String>)> = Vec::new();
        let mut label_y = y;
        if let Some(notes) = notes {
            let lines = canvas.wrap(notes, text_width, &body);
            let next = label_y + 15.0 + measure_wrapped_height(&lines, LINE_HEIGHT);
            sections.push(("Notes:", label_y, lines));
            label_y = next;
        }
        if let Some(terms) = terms {
            let lines = canvas.wrap(terms, text_width, &body);
            sections.push(("Payment Terms:", label_y, lines));
        }

        let last_baseline = sections
            .iter()
            .map(|(_, label_y, lines)| label_y + 8.0 + (lines.len().saturating_sub(1)) as f32 * LINE_HEIGHT)
            .fold(y, f32::max);
        let box_top = y - 5.0;
        let box_height = (last_baseline + 5.0 - box_top).max(NOTES_MIN_HEIGHT);

        canvas.set_draw_color(BOX_BORDER);
        canvas.set_line_width(0.3);
        canvas.stroke_rect(Rect::new(MARGIN, box_top, page_width - 2.0 * MARGIN, box_height));

        for (label, label_y, lines) in &sections {
            canvas.set_font(serif(FontStyle::Bold, 9.0));
            canvas.text(label, MARGIN + 5.0, *label_y);
            canvas.set_font(body);
            for (index, line) in lines.iter().enumerate() {
                canvas.text(line, MARGIN + 5.0, label_y + 8.0 + index as f32 * LINE_HEIGHT);
            }
        }

        cursor.move_to(box_top + box_height);
    }

    fn draw_footer(&self, canvas: &mut Canvas<'_>) {
        let page_width = canvas.page_width();
        let footer_y = canvas.page_height() - 20.0;
        canvas.set_draw_color(BOX_BORDER);
        canvas.set_line_width(0.3);
        canvas.line(MARGIN, footer_y, page_width - MARGIN, footer_y);
        canvas.set_text_color(FOOTER_INK);
        canvas.set_font(serif(FontStyle::Italic, 8.0));
        canvas.text_aligned(
            "This is a computer-generated invoice. No signature required.",
            page_width / 2.0,
            footer_y + 5.0,
            TextAlign::Center,
        );
    }
}

fn draw_party_box(canvas: &mut Canvas<'_>, label: &str, party: &Party, bounds: Rect) {
    canvas.set_draw_color(BOX_BORDER);
    canvas.stroke_rect(bounds);

    let x = bounds.x + 5.0;
    canvas.set_font(serif(FontStyle::Bold, 10.0));
    canvas.text(label, x, bounds.y + 8.0);

    canvas.set_font(serif(FontStyle::Normal, 9.0));
    let mut y = bounds.y + 15.0;
    canvas.text(&party.name, x, y);
    for line in party.contact_lines() {
        y += LINE_HEIGHT;
        canvas.text(&line, x, y);
    }
    if y > bounds.bottom() {
        log::debug!("Party '{}' overflows its {:.0}mm box", party.name, bounds.height);
    }
}

impl RenderStrategy for ClassicStrategy {
    fn render(
        &self,
        doc: &InvoiceDocument,
        surface: &mut dyn DrawingSurface,
    ) -> Result<PageLayout, LayoutError> {
        let mut canvas = Canvas::new(surface);
        let currency = doc.currency_or(&self.default_currency);

        let mut cursor = Cursor::at(MARGIN);
        self.draw_header(&mut canvas, doc, &mut cursor);
        self.draw_parties(&mut canvas, doc, &mut cursor);
        let rows = self.draw_items(&mut canvas, doc, currency, &mut cursor);
        self.draw_totals(&mut canvas, doc, currency, &mut cursor);
        self.draw_notes(&mut canvas, doc, &mut cursor);
        self.draw_footer(&mut canvas);

        Ok(PageLayout {
            commands: canvas.into_commands(),
            rows,
        })
    }

    fn name(&self) -> &'static str {
        "classic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockSurface, dec, sample_invoice};
    use quire_render_core::{DrawCommand, PaintMode};

    fn render(doc: &InvoiceDocument) -> PageLayout {
        ClassicStrategy::new(&LayoutConfig::default())
            .render(doc, &mut MockSurface::new())
            .unwrap()
    }

    fn texts(layout: &PageLayout) -> Vec<&str> {
        layout.commands.iter().filter_map(DrawCommand::as_text).collect()
    }

    fn text_y(layout: &PageLayout, text: &str) -> f32 {
        layout
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text: t, y, .. } if t == text => Some(*y),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no text run '{}'", text))
    }

    fn stroked(layout: &PageLayout) -> Vec<Rect> {
        layout
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, mode: PaintMode::Stroke } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_header_and_party_boxes() {
        let layout = render(&sample_invoice());
        let boxes = stroked(&layout);
        assert_eq!(boxes[0], Rect::new(25.0, 25.0, 160.0, 40.0));
        assert_eq!(boxes[1], Rect::new(25.0, 75.0, 70.0, 50.0));
        assert_eq!(boxes[2], Rect::new(115.0, 75.0, 70.0, 50.0));

        assert_eq!(text_y(&layout, "INVOICE"), 45.0);
        assert_eq!(text_y(&layout, "Invoice Number: INV-2024-001"), 35.0);
        assert_eq!(text_y(&layout, "FROM"), 83.0);
        assert_eq!(text_y(&layout, "Acme Studio"), 90.0);
        // Phone is a present optional line, so it is printed
        assert_eq!(text_y(&layout, "+1 555 0100"), 115.0);
    }

    #[test]
    fn test_no_thumbnails_or_images() {
        let mut doc = sample_invoice();
        doc.items[0].image_url = Some("thumb.png".into());
        let layout = render(&doc);
        assert!(layout.rows.iter().all(|r| r.thumbnail.is_none()));
        assert!(!layout.commands.iter().any(|c| matches!(c, DrawCommand::Image { .. })));
        assert!(!texts(&layout).contains(&"Image"));
    }

    #[test]
    fn test_table_border_encloses_wrapped_rows() {
        let mut doc = sample_invoice();
        doc.items[0].description = "Brand identity refresh covering logo revisions, colour palette, \
                                    typography guidelines and stationery templates"
            .into();
        let layout = render(&doc);

        let table = stroked(&layout)[3];
        assert_eq!(table.y, 135.0);
        let last = layout.rows.last().unwrap();
        assert!(layout.rows[0].height > 8.0);
        assert!((table.bottom() - last.bottom()).abs() < 1e-3);
        assert_eq!(layout.rows[0].top, 143.0);
        assert_eq!(layout.rows[1].top, layout.rows[0].bottom());
    }

    #[test]
    fn test_totals_double_rule_and_values() {
        let layout = render(&sample_invoice());
        let texts = texts(&layout);
        assert!(texts.contains(&"Tax (10%):"));
        assert!(texts.contains(&"$9,900.00"));

        let total_y = text_y(&layout, "Total:");
        let rules: Vec<f32> = layout
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { x1, y1, y2, .. } if *x1 == 120.0 && y1 == y2 => Some(*y1),
                _ => None,
            })
            .collect();
        assert_eq!(rules, vec![total_y - 5.0, total_y - 6.0]);
    }

    #[test]
    fn test_zero_tax_hides_tax_line() {
        let mut doc = sample_invoice();
        doc.tax = None;
        let layout = render(&doc);
        assert!(texts(&layout).iter().all(|t| !t.starts_with("Tax")));
    }

    #[test]
    fn test_notes_box_grows_with_content() {
        let mut doc = sample_invoice();
        let short = stroked(&render(&doc)).last().copied().unwrap();
        assert_eq!(short.height, 40.0);

        doc.notes = Some("Line one\nLine two\nLine three\nLine four\nLine five\nLine six".into());
        doc.payment_terms = Some("Net 30\nLate fee 2% per month".into());
        let layout = render(&doc);
        let tall = stroked(&layout).last().copied().unwrap();
        assert!(tall.height > 40.0);

        let terms_y = text_y(&layout, "Payment Terms:");
        assert_eq!(terms_y, text_y(&layout, "Notes:") + 15.0 + 30.0);
        assert!(text_y(&layout, "Late fee 2% per month") < tall.bottom());
    }

    #[test]
    fn test_no_notes_box_without_notes_or_terms() {
        let mut doc = sample_invoice();
        doc.notes = None;
        doc.payment_terms = Some("   ".into());
        let layout = render(&doc);
        // header, two party boxes, table
        assert_eq!(stroked(&layout).len(), 4);
    }

    #[test]
    fn test_footer_disclaimer() {
        let layout = render(&sample_invoice());
        let footer = "This is a computer-generated invoice. No signature required.";
        assert_eq!(text_y(&layout, footer), 282.0);
    }

    #[test]
    fn test_default_currency_from_config() {
        let config = LayoutConfig::default().with_default_currency("EUR");
        let mut doc = sample_invoice();
        doc.subtotal = dec("100");
        let layout = ClassicStrategy::new(&config)
            .render(&doc, &mut MockSurface::new())
            .unwrap();
        assert!(texts(&layout).contains(&"€100.00"));
    }
}
