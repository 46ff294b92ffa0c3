//! Error taxonomy shared across the crate.
//!
//! Every failure surfaces synchronously to the caller; nothing is retried
//! internally. On error, no output file is guaranteed to exist, except that
//! a destination directory may already have been created as a side effect.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Zero dimensions, or a quality/compression parameter outside its range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Local source path does not exist.
    #[error("source image not found: {0}")]
    NotFound(PathBuf),
    /// Source or destination extension outside the recognized set.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    /// Decoding produced no usable bitmap.
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Remote fetch failed before any bytes could be decoded.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}
