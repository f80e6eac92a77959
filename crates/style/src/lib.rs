pub mod font;
pub mod metrics;
pub mod text;

pub use font::{FontFamily, FontSpec, FontStyle};
pub use metrics::text_width_units;
pub use text::TextAlign;
