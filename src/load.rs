//! Decode stage: turn a source locator into an in-memory bitmap.
//!
//! Local files are decoded with an explicit format: either forced JPEG
//! (resize) or dispatched on the source extension (re-encode operations).
//! Remote sources are fetched in full and decoded by content sniffing, so
//! the URL's path needs no recognizable extension.

use crate::error::{Error, Result};
use crate::format;
use crate::locator::{self, SourceLocator};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Load a resize source. URLs are sniffed; local files are decoded as JPEG
/// regardless of their extension.
pub(crate) fn load_as_jpeg(source: &SourceLocator) -> Result<DynamicImage> {
    match source {
        SourceLocator::Url(url) => load_remote(url),
        SourceLocator::Local(path) => {
            ensure_exists(path)?;
            decode_file(path, ImageFormat::Jpeg)
        }
    }
}

/// Load a re-encode source. URLs are sniffed; local files dispatch a decoder
/// on their extension and fail `UnsupportedFormat` outside jpg/jpeg/png.
pub(crate) fn load_by_extension(source: &SourceLocator) -> Result<DynamicImage> {
    match source {
        SourceLocator::Url(url) => load_remote(url),
        SourceLocator::Local(path) => {
            ensure_exists(path)?;
            decode_file(path, format::source_format(path)?)
        }
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::NotFound(path.to_path_buf()))
    }
}

/// Decode a local file with an explicit format, bypassing content sniffing.
fn decode_file(path: &Path, format: ImageFormat) -> Result<DynamicImage> {
    let mut reader = ImageReader::open(path)?;
    reader.set_format(format);
    reader
        .decode()
        .map_err(|e| Error::Decode(format!("{}: {}", path.display(), e)))
}

fn load_remote(url: &str) -> Result<DynamicImage> {
    let bytes = locator::fetch_bytes(url)?;
    image::load_from_memory(&bytes).map_err(|e| Error::Decode(format!("{url}: {e}")))
}
