//! # Pixel
//!
//! A small, stateless image transform utility: resize, re-encode at a target
//! quality, and compress JPEG/PNG images. Sources are local files or http(s)
//! URLs; results are written to a destination path, optionally creating
//! missing directories on the way.
//!
//! All decoding, resampling, and encoding is delegated to the pure-Rust
//! [`image`] crate (Lanczos3 resampling); this crate contributes input
//! validation, format dispatch, and filesystem/network bookkeeping.
//!
//! ```no_run
//! use std::path::Path;
//!
//! // 100x50 thumbnail, creating `out/` if missing
//! pixel::resize_image("in.jpg", Path::new("out/thumb.jpg"), 100, 50, true)?;
//!
//! // Re-encode as JPEG at quality 85
//! pixel::change_quality("in.jpg", Path::new("out.jpg"), 85, false)?;
//!
//! // Smallest visually-lossless PNG
//! pixel::compress_image("https://example.com/in.png", Path::new("out.png"), 9, false)?;
//! # Ok::<(), pixel::Error>(())
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`ops`] | The three public operations |
//! | [`locator`] | Source locator: URL vs local path, remote fetch |
//! | [`error`] | Error taxonomy |
//!
//! # Design Decisions
//!
//! ## Stateless by construction
//!
//! There is no client object and no shared cache. Each call owns its
//! decoded bitmap exclusively and drops it before returning, on every exit
//! path. Concurrent calls are independent as long as they write distinct
//! destination paths; concurrent writes to the same path are racy and
//! unspecified.
//!
//! ## Fixed two-format scope
//!
//! Format routing is a case-insensitive suffix mapping over `jpg`, `jpeg`,
//! and `png`, held in a const table rather than a codec registry. Anything
//! else fails with [`Error::UnsupportedFormat`]. Remote sources are the one
//! exception: their bytes are sniffed, so the URL needs no recognizable
//! extension.
//!
//! ## Quality ranges follow the source extension
//!
//! [`change_quality`] and [`compress_image`] validate their parameter against
//! the *source* extension (0-100 in general, 0-9 when the source is `png`)
//! while the *destination* extension selects the encoder. Converting a `png`
//! source to JPEG therefore accepts only 0-9. Callers who find that
//! surprising are reading it right; the asymmetry is part of the contract
//! this crate preserves.
//!
//! ## Fully synchronous
//!
//! No async and no worker pool; a remote fetch blocks until the transport
//! completes or errors, with no timeout beyond the HTTP client defaults.
//! Logging is emitted through [`tracing`] `debug!` events; installing a
//! subscriber is the embedding application's concern.

pub mod error;
mod format;
mod load;
pub mod locator;
pub mod ops;
mod save;

pub use error::{Error, Result};
pub use locator::SourceLocator;
pub use ops::{DEFAULT_COMPRESSION_LEVEL, change_quality, compress_image, resize_image};

#[cfg(test)]
pub(crate) mod test_helpers;
