use crate::helpers::{self, EncodedImage};
use crate::writer::StreamingPdfWriter;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use quire_render_core::utils::{flip_y, mm_to_pt, pt_to_mm};
use quire_render_core::{DrawingSurface, ImageError, PaintMode, SurfaceError};
use quire_style::{FontSpec, TextAlign};
use quire_traits::ResourceProvider;
use quire_types::{Color, PageSize, Rect, Size};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

/// Graphics state as last emitted into the content stream.
#[derive(Debug, Clone, Default, PartialEq)]
struct EmittedState {
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
    font: Option<(String, f32)>,
}

/// A single-page PDF drawing surface.
///
/// Operations are buffered in PDF user space (points, origin bottom-left) and
/// written out by [`DrawingSurface::export_bytes`]. Images are fetched through
/// the configured [`ResourceProvider`] the first time a reference is drawn and
/// embedded once per reference.
pub struct LopdfSurface {
    page: Size,
    resources: Arc<dyn ResourceProvider>,
    operations: Vec<Operation>,
    fill_color: Color,
    draw_color: Color,
    text_color: Color,
    line_width: f32,
    font: FontSpec,
    emitted: EmittedState,
    images: Vec<EncodedImage>,
    image_names: HashMap<String, usize>,
}

impl LopdfSurface {
    pub fn new(page_size: PageSize, resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            page: page_size.size(),
            resources,
            operations: Vec::new(),
            fill_color: Color::BLACK,
            draw_color: Color::BLACK,
            text_color: Color::BLACK,
            line_width: 0.2,
            font: FontSpec::default(),
            emitted: EmittedState::default(),
            images: Vec::new(),
            image_names: HashMap::new(),
        }
    }

    /// An A4 portrait surface.
    pub fn a4(resources: Arc<dyn ResourceProvider>) -> Self {
        Self::new(PageSize::A4, resources)
    }

    /// Number of distinct images embedded so far.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn emit_fill(&mut self, color: Color) {
        if self.emitted.fill != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.emitted.fill = Some(color);
        }
    }

    fn emit_stroke(&mut self) {
        let color = self.draw_color;
        if self.emitted.stroke != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.emitted.stroke = Some(color);
        }
        let width = mm_to_pt(self.line_width);
        if self.emitted.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.emitted.line_width = Some(width);
        }
    }

    fn emit_font(&mut self) {
        let name = helpers::font_resource_name(&self.font);
        let size = self.font.size;
        if self.emitted.font.as_ref() != Some(&(name.clone(), size)) {
            self.push("Tf", vec![Object::Name(name.clone().into_bytes()), size.into()]);
            self.emitted.font = Some((name, size));
        }
    }

    fn page_height_pt(&self) -> f32 {
        mm_to_pt(self.page.height)
    }

    fn embed(&mut self, src: &str) -> Result<usize, ImageError> {
        if let Some(index) = self.image_names.get(src) {
            return Ok(*index);
        }
        let data = self.resources.load(src)?;
        let encoded = helpers::encode_image_xobject(src, &data)?;
        log::debug!(
            "Embedded image '{}' ({}x{}) via {}",
            src,
            encoded.width,
            encoded.height,
            self.resources.name()
        );
        let index = self.images.len();
        self.images.push(encoded);
        self.image_names.insert(src.to_string(), index);
        Ok(index)
    }

    fn resource_dictionary(&self, image_ids: &[lopdf::ObjectId]) -> Dictionary {
        let mut resources = dictionary! { "Font" => helpers::standard_font_dictionary() };
        if !image_ids.is_empty() {
            let mut xobjects = Dictionary::new();
            for (i, id) in image_ids.iter().enumerate() {
                xobjects.set(format!("Im{}", i + 1).into_bytes(), Object::Reference(*id));
            }
            resources.set("XObject", xobjects);
        }
        resources
    }
}

impl std::fmt::Debug for LopdfSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfSurface")
            .field("page", &self.page)
            .field("operations", &self.operations.len())
            .field("images", &self.images.len())
            .finish()
    }
}

impl DrawingSurface for LopdfSurface {
    fn page_width(&self) -> f32 {
        self.page.width
    }

    fn page_height(&self) -> f32 {
        self.page.height
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode) {
        match mode {
            PaintMode::Fill => self.emit_fill(self.fill_color),
            PaintMode::Stroke => self.emit_stroke(),
        }
        let x = mm_to_pt(rect.x);
        let y = flip_y(mm_to_pt(rect.bottom()), self.page_height_pt());
        self.push(
            "re",
            vec![x.into(), y.into(), mm_to_pt(rect.width).into(), mm_to_pt(rect.height).into()],
        );
        self.push(if mode == PaintMode::Fill { "f" } else { "S" }, vec![]);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.emit_stroke();
        let page_height = self.page_height_pt();
        self.push("m", vec![mm_to_pt(x1).into(), flip_y(mm_to_pt(y1), page_height).into()]);
        self.push("l", vec![mm_to_pt(x2).into(), flip_y(mm_to_pt(y2), page_height).into()]);
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        if text.is_empty() {
            return;
        }
        let width = self.text_width(text, &self.font);
        let start_x = mm_to_pt(align.start_x(x, width));
        let baseline = flip_y(mm_to_pt(y), self.page_height_pt());

        self.push("BT", vec![]);
        self.emit_font();
        self.emit_fill(self.text_color);
        self.push("Td", vec![start_x.into(), baseline.into()]);
        self.push(
            "Tj",
            vec![Object::String(helpers::to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        pt_to_mm(font.text_width_pt(text))
    }

    fn draw_image(&mut self, src: &str, rect: Rect) -> Result<(), ImageError> {
        let index = self.embed(src)?;
        let x = mm_to_pt(rect.x);
        let y = flip_y(mm_to_pt(rect.bottom()), self.page_height_pt());
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                mm_to_pt(rect.width).into(),
                Object::Integer(0),
                Object::Integer(0),
                mm_to_pt(rect.height).into(),
                x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(format!("Im{}", index + 1).into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn export_bytes(&self) -> Result<Vec<u8>, SurfaceError> {
        let image_objects: Vec<Object> = self.images.iter().map(EncodedImage::to_xobject).collect();

        // Images are numbered after the fixed resources/pages/catalog objects.
        let first_image_id = 4;
        let image_ids: Vec<lopdf::ObjectId> = (0..image_objects.len())
            .map(|i| (first_image_id + i as u32, 0))
            .collect();

        let mut writer = StreamingPdfWriter::new(
            Cursor::new(Vec::new()),
            "1.7",
            self.resource_dictionary(&image_ids),
        )?;
        for (id, object) in image_ids.iter().zip(image_objects) {
            writer.buffer_object_at_id(*id, object);
        }

        let content = Content {
            operations: self.operations.clone(),
        };
        let content_id = writer.buffer_content_stream(content)?;
        writer.buffer_page(content_id, mm_to_pt(self.page.width), self.page_height_pt());
        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
