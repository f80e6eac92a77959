pub mod color;
pub mod document;
pub mod geometry;

pub use color::Color;
pub use document::{InvoiceDocument, LineItem, Party};
pub use geometry::{PageSize, Rect, Size};
