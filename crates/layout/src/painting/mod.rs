mod placeholder;

pub use placeholder::{paint_image_placeholder, paint_thumbnail};
