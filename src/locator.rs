//! Source locators: local paths and remote URLs.
//!
//! A raw source string is classified by URL syntax: anything carrying an
//! `http`/`https` scheme is remote, everything else is a filesystem path.
//! Remote sources are fetched in full before decoding; a fetch blocks until
//! the transfer completes or errors (no timeout beyond the client defaults).

use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

/// Identifies the input image: a filesystem path or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Url(String),
    Local(PathBuf),
}

impl SourceLocator {
    /// Classify a raw source string.
    pub fn parse(raw: &str) -> Self {
        if is_http_url(raw) {
            SourceLocator::Url(raw.to_string())
        } else {
            SourceLocator::Local(PathBuf::from(raw))
        }
    }
}

/// Scheme check, case-insensitive. Only http and https count as remote.
fn is_http_url(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch the raw bytes behind a remote source.
pub(crate) fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    debug!(url, "fetching remote source");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}
