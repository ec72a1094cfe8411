//! Error types for the gridrow reconstruction core.

use thiserror::Error;

/// Primary error type for table reconstruction.
///
/// The reconstruction pipeline itself is a pure in-memory transformation and
/// cannot fail; errors only arise at the fragment-acquisition boundary. A
/// layout-extraction fault is fatal and non-retryable for the affected page.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("document layout error: {0}")]
    DocumentLayout(String),

    #[error("malformed layout input: {0}")]
    MalformedLayout(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for GridError.
pub type Result<T> = std::result::Result<T, GridError>;
