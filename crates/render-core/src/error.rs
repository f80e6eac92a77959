use quire_traits::ResourceError;
use thiserror::Error;

/// Failure to export the finished page as a binary document.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Internal PDF library error: {0}")]
    PdfLibError(String),
    #[error("Other surface error: {0}")]
    Other(String),
}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError::Other(s.to_string())
    }
}

/// Failure to place an image. Layout recovers from these by drawing a placeholder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    #[error("failed to load image: {0}")]
    Resource(#[from] ResourceError),
    #[error("failed to decode image '{src}': {message}")]
    Decode { src: String, message: String },
    #[error("image '{0}' has zero width or height")]
    Empty(String),
    #[error("this surface cannot draw images")]
    Unsupported,
}
