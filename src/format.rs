//! Extension parsing and format dispatch.
//!
//! Pure functions only, no I/O and no decoded pixels. Format routing is a
//! fixed case-insensitive suffix mapping over the two supported encodings
//! (JPEG, PNG), not an extensible codec registry.

use crate::error::{Error, Result};
use image::ImageFormat;
use image::codecs::png::CompressionType;
use std::path::Path;

/// Extensions whose decoders are recognized for local sources.
const SOURCE_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
];

/// Output encoding selected by the destination extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TargetFormat {
    Jpeg,
    Png,
}

/// Lowercased extension of `path`, if any.
pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// True when `path` carries a `png` extension, any case.
pub(crate) fn has_png_extension(path: &Path) -> bool {
    extension(path).is_some_and(|e| e == "png")
}

/// Decoder format for a local source path, dispatched by extension.
pub(crate) fn source_format(path: &Path) -> Result<ImageFormat> {
    let ext = extension(path).unwrap_or_default();
    SOURCE_CANDIDATES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, format)| *format)
        .ok_or_else(|| Error::UnsupportedFormat(format!("source extension '{ext}'")))
}

/// Output encoding for a destination path, dispatched by extension.
pub(crate) fn target_format(path: &Path) -> Result<TargetFormat> {
    match extension(path).unwrap_or_default().as_str() {
        "jpg" | "jpeg" => Ok(TargetFormat::Jpeg),
        "png" => Ok(TargetFormat::Png),
        ext => Err(Error::UnsupportedFormat(format!(
            "destination extension '{ext}'"
        ))),
    }
}

/// Map a 0-9 compression level onto the png encoder's presets.
///
/// The pure-Rust png encoder exposes no numeric zlib level, so the scale
/// buckets onto its three presets. Values above 9 that reach encoding
/// (possible when the level was not range-checked) bucket to `Best`.
pub(crate) fn png_compression(level: i32) -> CompressionType {
    match level {
        i32::MIN..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}
