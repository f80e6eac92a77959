use quire_render_core::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid invoice: {0}")]
    Validation(#[from] ValidationError),
    #[error("Drawing surface failed: {0}")]
    Surface(#[from] SurfaceError),
}

pub mod canvas;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod format;
pub mod painting;
pub mod strategy;
pub mod text;

pub use self::canvas::Canvas;
pub use self::config::LayoutConfig;
pub use self::cursor::Cursor;
pub use self::engine::{validate, LayoutEngine, RenderedDocument, ValidationError};
pub use self::format::{format_amount, format_currency, format_date, FormatError};
pub use self::strategy::{
    ClassicStrategy, ModernStrategy, PageLayout, RenderStrategy, RowGroup, TemplateStyle, Thumbnail,
};
pub use self::text::{measure_wrapped_height, wrap_text};

// Re-export the drawing vocabulary so callers need only this crate
pub use quire_render_core::{DrawCommand, DrawingSurface, PaintMode};

#[cfg(test)]
mod test_utils;
