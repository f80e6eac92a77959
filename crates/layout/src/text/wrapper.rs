use quire_render_core::DrawingSurface;
use quire_style::FontSpec;

/// Greedily wraps `text` to `max_width` millimetres as set in `font`.
///
/// Embedded newlines force a break. Words are never split, so a single word
/// wider than `max_width` overflows on a line of its own. Always returns at
/// least one line, which is empty for blank input.
pub fn wrap_text(
    surface: &dyn DrawingSurface,
    text: &str,
    max_width: f32,
    font: &FontSpec,
) -> Vec<String> {
    let mut lines = surface.measure_wrapped_lines(text, max_width, font);
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub fn measure_wrapped_height(lines: &[String], line_height: f32) -> f32 {
    lines.len() as f32 * line_height
}
