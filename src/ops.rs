//! The three public image operations.
//!
//! Each operation is a linear load → validate → transform → write sequence
//! with no shared state between calls. Decoded bitmaps are owned by the call
//! and dropped on every exit path, success or failure. Nothing is retried;
//! the first failure aborts the operation.

use crate::error::{Error, Result};
use crate::format::{self, TargetFormat};
use crate::load;
use crate::locator::SourceLocator;
use crate::save;
use image::imageops::FilterType;
use std::path::Path;
use tracing::debug;

/// Default PNG compression level for [`compress_image`].
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 9;

/// JPEG quality used when the operation targets visually lossless output.
const LOSSLESS_JPEG_QUALITY: i32 = 100;

/// Resize an image to exact pixel dimensions and save it as JPEG.
///
/// The source is stretched to `width` × `height` with Lanczos3 resampling:
/// smooth interpolation with no cropping and no aspect-ratio change. A local
/// source is decoded as JPEG regardless of its extension; a URL source is
/// fetched and decoded by content sniffing. The output is always JPEG at
/// quality 100, whatever extension `dest` carries.
///
/// When the destination directory is missing it is created recursively only
/// if `create_dirs` is set; otherwise the write fails with [`Error::Io`].
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a zero dimension, [`Error::NotFound`] for a
/// missing local source, [`Error::Decode`] when the source yields no usable
/// bitmap.
pub fn resize_image(
    source: &str,
    dest: &Path,
    width: u32,
    height: u32,
    create_dirs: bool,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidArgument(
            "image dimensions must be greater than zero".into(),
        ));
    }

    let original = load::load_as_jpeg(&SourceLocator::parse(source))?;
    debug!(source, dest = %dest.display(), width, height, "resizing image");

    save::prepare_dest_dir(dest, create_dirs)?;
    let resized = original.resize_exact(width, height, FilterType::Lanczos3);
    save::save_jpeg(&resized, dest, LOSSLESS_JPEG_QUALITY)
}

/// Re-encode an image at the destination's format with the given quality.
///
/// The encoder is selected by the destination extension: `jpg`/`jpeg` encodes
/// JPEG at `quality` (0-100), `png` encodes PNG with `quality` read as a 0-9
/// compression level. The valid range is checked up front against the
/// *source* extension (0-100 in general, 0-9 when the source is `png`)
/// even though the destination selects the encoder, so converting a `png`
/// source to JPEG accepts only 0-9.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `quality` is outside the applicable range,
/// [`Error::UnsupportedFormat`] for a source or destination extension outside
/// jpg/jpeg/png, [`Error::NotFound`] and [`Error::Decode`] as in
/// [`resize_image`].
pub fn change_quality(source: &str, dest: &Path, quality: i32, create_dirs: bool) -> Result<()> {
    validate_quality(quality, Path::new(source))?;

    let original = load::load_by_extension(&SourceLocator::parse(source))?;
    debug!(source, dest = %dest.display(), quality, "re-encoding image");

    save::prepare_dest_dir(dest, create_dirs)?;
    match format::target_format(dest)? {
        TargetFormat::Jpeg => save::save_jpeg(&original, dest, quality),
        TargetFormat::Png => save::save_png(&original, dest, quality),
    }
}

/// Re-encode an image to reduce file size while staying visually lossless.
///
/// A `jpg`/`jpeg` destination encodes JPEG at quality 100 and ignores
/// `compression_level` (JPEG has no comparable lossless knob); a `png`
/// destination encodes at `compression_level` (0-9, see
/// [`DEFAULT_COMPRESSION_LEVEL`]). The level is range-checked only when the
/// source extension is `png`.
///
/// # Errors
///
/// Same taxonomy as [`change_quality`].
pub fn compress_image(
    source: &str,
    dest: &Path,
    compression_level: i32,
    create_dirs: bool,
) -> Result<()> {
    if format::has_png_extension(Path::new(source)) && !(0..=9).contains(&compression_level) {
        return Err(Error::InvalidArgument(format!(
            "compression level {compression_level} out of range (0-9 for PNG)"
        )));
    }

    let original = load::load_by_extension(&SourceLocator::parse(source))?;
    debug!(source, dest = %dest.display(), compression_level, "compressing image");

    save::prepare_dest_dir(dest, create_dirs)?;
    match format::target_format(dest)? {
        TargetFormat::Jpeg => save::save_jpeg(&original, dest, LOSSLESS_JPEG_QUALITY),
        TargetFormat::Png => save::save_png(&original, dest, compression_level),
    }
}

/// Quality range is keyed to the source extension, not the destination.
fn validate_quality(quality: i32, source: &Path) -> Result<()> {
    let out_of_range = !(0..=100).contains(&quality)
        || (format::has_png_extension(source) && !(0..=9).contains(&quality));
    if out_of_range {
        return Err(Error::InvalidArgument(format!(
            "quality level {quality} out of range (0-100 for JPEG, 0-9 for PNG)"
        )));
    }
    Ok(())
}
