use crate::text::wrap_text;
use quire_render_core::{DrawCommand, DrawingSurface, ImageError, PaintMode};
use quire_style::{FontSpec, TextAlign};
use quire_types::{Color, Rect};

/// A recording wrapper around a drawing surface.
///
/// Every call is forwarded to the surface and appended to the command list in
/// issue order. A failed image draw leaves no command behind.
pub struct Canvas<'a> {
    surface: &'a mut dyn DrawingSurface,
    commands: Vec<DrawCommand>,
}

impl<'a> Canvas<'a> {
    pub fn new(surface: &'a mut dyn DrawingSurface) -> Self {
        Self {
            surface,
            commands: Vec::new(),
        }
    }

    pub fn page_width(&self) -> f32 {
        self.surface.page_width()
    }

    pub fn page_height(&self) -> f32 {
        self.surface.page_height()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.surface.set_fill_color(color);
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.surface.set_draw_color(color);
        self.commands.push(DrawCommand::SetDrawColor(color));
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.surface.set_text_color(color);
        self.commands.push(DrawCommand::SetTextColor(color));
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.surface.set_line_width(width);
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.surface.set_font(font);
        self.commands.push(DrawCommand::SetFont(font));
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        self.draw_rect(rect, PaintMode::Fill);
    }

    pub fn stroke_rect(&mut self, rect: Rect) {
        self.draw_rect(rect, PaintMode::Stroke);
    }

    pub fn draw_rect(&mut self, rect: Rect, mode: PaintMode) {
        self.surface.draw_rect(rect, mode);
        self.commands.push(DrawCommand::Rect { rect, mode });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.surface.draw_line(x1, y1, x2, y2);
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    pub fn text(&mut self, text: &str, x: f32, y: f32) {
        self.text_aligned(text, x, y, TextAlign::Left);
    }

    pub fn text_right(&mut self, text: &str, x: f32, y: f32) {
        self.text_aligned(text, x, y, TextAlign::Right);
    }

    pub fn text_aligned(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.surface.draw_text(text, x, y, align);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            align,
        });
    }

    pub fn image(&mut self, src: &str, rect: Rect) -> Result<(), ImageError> {
        self.surface.draw_image(src, rect)?;
        self.commands.push(DrawCommand::Image {
            src: src.to_string(),
            rect,
        });
        Ok(())
    }

    /// Wraps `text` with the surface's metrics. Records nothing.
    pub fn wrap(&self, text: &str, max_width: f32, font: &FontSpec) -> Vec<String> {
        wrap_text(&*self.surface, text, max_width, font)
    }
}
