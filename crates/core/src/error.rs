//! Error types shared across the deck generation crates.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serializing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error (for the PPTX package).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML serialization error (for PPTX parts).
    #[error("XML error: {0}")]
    XmlError(String),

    /// HTTP error while fetching a remote image.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Failed to decode or identify an image payload.
    #[error("Image error: {0}")]
    ImageError(String),

    /// Failed to render a chart image.
    #[error("Chart rendering error: {0}")]
    ChartError(String),
}
