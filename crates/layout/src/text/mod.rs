//! Text wrapping and measurement against a drawing surface's font metrics.

mod wrapper;

pub use wrapper::{measure_wrapped_height, wrap_text};
