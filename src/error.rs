// src/error.rs
use quire_executor::ExecutorError;
use quire_layout::LayoutError;
use thiserror::Error;

/// Everything that can go wrong between reading an invoice and writing its PDF.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Executor failed: {0}")]
    Executor(#[from] ExecutorError),
}
