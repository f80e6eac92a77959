//! Core rendering abstractions for invoice output.
//!
//! This crate provides the seam between layout and output backends:
//! - `DrawingSurface` trait for the page-description primitives a template issues
//! - `DrawCommand`, the recorded form of one of those primitives
//! - Error types for image placement and document export
//! - Shared utility functions for unit conversion and greedy line splitting

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::{ImageError, SurfaceError};
pub use traits::DrawingSurface;
pub use types::{DrawCommand, PaintMode};
