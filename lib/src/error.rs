use thiserror::Error;

/// Errors produced while turning an image or text into glyph art
///
/// Every failure is reported as a single value; no partial rendering is
/// ever returned alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad width, empty text, missing input, or a zero-sized image
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown palette or resampling name, or a malformed palette
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The image bytes could not be decoded
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Writing an export file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
