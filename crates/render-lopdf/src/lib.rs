//! PDF drawing surface built on lopdf.
//!
//! `LopdfSurface` buffers a single page of drawing operations in PDF user
//! space and serializes them on demand through a deterministic writer, so the
//! same sequence of calls always yields the same bytes.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{encode_image_xobject, to_win_ansi, EncodedImage, STANDARD_FONTS};
pub use renderer::LopdfSurface;
pub use writer::StreamingPdfWriter;
