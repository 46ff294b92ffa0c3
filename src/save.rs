//! Write stage: destination directory handling and JPEG/PNG encoding.

use crate::error::{Error, Result};
use crate::format;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Create the destination's parent directory when asked to and it is missing.
///
/// Creation is recursive and permissive (0o777 on Unix, still subject to the
/// process umask). When the directory is missing and `create_dirs` is false,
/// nothing happens here and the subsequent write fails with an IO error.
pub(crate) fn prepare_dest_dir(dest: &Path, create_dirs: bool) -> Result<()> {
    let Some(parent) = dest.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() || !create_dirs {
        return Ok(());
    }
    debug!(dir = %parent.display(), "creating destination directory");
    create_dir_permissive(parent)?;
    Ok(())
}

#[cfg(unix)]
fn create_dir_permissive(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o777)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir_permissive(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Encode as JPEG at the given quality, clamped to the encoder's 1-100 range.
///
/// JPEG has no alpha channel, so pixels are flattened to RGB8 first.
pub(crate) fn save_jpeg(img: &DynamicImage, dest: &Path, quality: i32) -> Result<()> {
    let quality = quality.clamp(1, 100) as u8;
    let rgb = img.to_rgb8();
    let writer = BufWriter::new(File::create(dest)?);
    JpegEncoder::new_with_quality(writer, quality)
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(encode_error)
}

/// Encode as PNG at the given 0-9 compression level.
pub(crate) fn save_png(img: &DynamicImage, dest: &Path, level: i32) -> Result<()> {
    let writer = BufWriter::new(File::create(dest)?);
    let encoder = PngEncoder::new_with_quality(
        writer,
        format::png_compression(level),
        PngFilterType::Adaptive,
    );
    img.write_with_encoder(encoder).map_err(encode_error)
}

/// Encode failures are IO-shaped from the caller's perspective; unwrap the
/// underlying IO error when there is one.
fn encode_error(err: image::ImageError) -> Error {
    match err {
        image::ImageError::IoError(io) => Error::Io(io),
        other => Error::Io(std::io::Error::other(other)),
    }
}
