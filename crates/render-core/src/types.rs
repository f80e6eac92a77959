use quire_style::{FontSpec, TextAlign};
use quire_types::{Color, Rect};

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// One discrete operation issued against a drawing surface.
///
/// Coordinates are millimetres from the top-left corner; text `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFillColor(Color),
    SetDrawColor(Color),
    SetTextColor(Color),
    SetLineWidth(f32),
    SetFont(FontSpec),
    Rect {
        rect: Rect,
        mode: PaintMode,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
    },
    Image {
        src: String,
        rect: Rect,
    },
}

impl DrawCommand {
    /// True for commands that put marks on the page, false for state changes.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::Rect { .. }
                | DrawCommand::Line { .. }
                | DrawCommand::Text { .. }
                | DrawCommand::Image { .. }
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
