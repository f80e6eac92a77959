use crate::canvas::Canvas;
use crate::strategy::Thumbnail;
use quire_types::{Color, Rect};

const PLACEHOLDER_FILL: Color = Color::rgb(241, 245, 249);
const PLACEHOLDER_BORDER: Color = Color::rgb(226, 232, 240);
const PLACEHOLDER_ICON: Color = Color::rgb(200, 205, 210);

/// Draws the "no image" glyph filling `rect`: a tinted, bordered box holding a
/// small framed square crossed by one diagonal.
pub fn paint_image_placeholder(canvas: &mut Canvas<'_>, rect: Rect) {
    canvas.set_fill_color(PLACEHOLDER_FILL);
    canvas.fill_rect(rect);

    canvas.set_draw_color(PLACEHOLDER_BORDER);
    canvas.set_line_width(0.3);
    canvas.stroke_rect(rect);

    let icon = rect.centered_square(rect.width * 0.3);
    canvas.set_draw_color(PLACEHOLDER_ICON);
    canvas.set_line_width(0.5);
    canvas.stroke_rect(icon);
    canvas.line(icon.x, icon.y, icon.right(), icon.bottom());
}

/// Draws the image referenced by `src` into `rect`, or the placeholder when
/// there is no reference or the image cannot be drawn.
pub fn paint_thumbnail(canvas: &mut Canvas<'_>, src: Option<&str>, rect: Rect) -> Thumbnail {
    if let Some(src) = src {
        match canvas.image(src, rect) {
            Ok(()) => return Thumbnail::Image,
            Err(e) => log::warn!("Line item image '{}' replaced by placeholder: {}", src, e),
        }
    }
    paint_image_placeholder(canvas, rect);
    Thumbnail::Placeholder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockSurface;
    use quire_render_core::{DrawCommand, PaintMode};

    #[test]
    fn test_placeholder_geometry() {
        let mut surface = MockSurface::new();
        let mut canvas = Canvas::new(&mut surface);
        let rect = Rect::square(22.0, 100.0, 12.0);
        paint_image_placeholder(&mut canvas, rect);

        let rects: Vec<(Rect, PaintMode)> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, mode } => Some((*rect, *mode)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], (rect, PaintMode::Fill));
        assert_eq!(rects[1], (rect, PaintMode::Stroke));
        let icon = rects[2].0;
        assert!((icon.width - 3.6).abs() < 1e-4);
        let (ix, iy) = icon.center();
        let (rx, ry) = rect.center();
        assert!((ix - rx).abs() < 1e-4 && (iy - ry).abs() < 1e-4);
    }

    #[test]
    fn test_thumbnail_falls_back_on_failure() {
        let mut surface = MockSurface::new().with_image("good.png");
        let mut canvas = Canvas::new(&mut surface);
        let rect = Rect::square(22.0, 100.0, 12.0);

        assert_eq!(paint_thumbnail(&mut canvas, Some("good.png"), rect), Thumbnail::Image);
        assert_eq!(paint_thumbnail(&mut canvas, Some("broken.png"), rect), Thumbnail::Placeholder);
        assert_eq!(paint_thumbnail(&mut canvas, None, rect), Thumbnail::Placeholder);

        let images = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count();
        assert_eq!(images, 1);
    }
}
