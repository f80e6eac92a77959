use crate::error::{ImageError, SurfaceError};
use crate::types::PaintMode;
use crate::utils::split_text_to_size;
use quire_style::{FontSpec, TextAlign};
use quire_types::{Color, Rect};

/// The page-description primitives a template draws with.
///
/// Units are millimetres with the origin at the top-left of the page and y
/// growing downwards. `draw_text` places the baseline at `y`. Colour, font and
/// line width are sticky state, applied to every subsequent paint.
pub trait DrawingSurface {
    fn page_width(&self) -> f32;

    fn page_height(&self) -> f32;

    fn set_fill_color(&mut self, color: Color);

    fn set_draw_color(&mut self, color: Color);

    fn set_text_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_font(&mut self, font: FontSpec);

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Draws `text` in the current font, anchored at `x` according to `align`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Width of `text` set in `font`, in millimetres. Does not touch surface state.
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;

    /// Greedy word wrap of `text` into lines no wider than `max_width` where possible.
    fn measure_wrapped_lines(&self, text: &str, max_width: f32, font: &FontSpec) -> Vec<String> {
        split_text_to_size(text, max_width, |s| self.text_width(s, font))
    }

    /// Places the image referenced by `src` scaled into `rect`.
    ///
    /// On error nothing is drawn and the caller decides what to put there instead.
    fn draw_image(&mut self, src: &str, rect: Rect) -> Result<(), ImageError>;

    /// Serializes everything drawn so far. May be called more than once.
    fn export_bytes(&self) -> Result<Vec<u8>, SurfaceError>;
}
