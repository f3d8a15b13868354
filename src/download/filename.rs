//! Output filename derivation.
//!
//! A URL is not parsed: the filename is the text after its last `/`, so a
//! query string or fragment ends up in the name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::filenames;

use std::path::{Path, PathBuf};

static DISALLOWED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9._-]+").expect("Failed to compile filename regex pattern")
});

/// Text after the final `/` of `url`, or the whole string if it has none.
pub fn last_path_segment(url: &str) -> &str {
    url.rsplit_once('/').map_or(url, |(_, last)| last)
}

/// Make `segment` safe to use as a file name.
///
/// An empty segment becomes `download`. Every run of characters outside
/// `[A-Za-z0-9._-]` collapses to one `_`, and the result is cut to 180
/// characters.
pub fn sanitize_filename(segment: &str) -> String {
    let segment = if segment.is_empty() {
        filenames::FALLBACK
    } else {
        segment
    };

    let mut sanitized = DISALLOWED_RUN
        .replace_all(segment, filenames::REPLACEMENT)
        .into_owned();

    // Only ASCII survives the replacement, so byte length == char count
    sanitized.truncate(filenames::MAX_LEN);
    sanitized
}

/// File name a URL is saved under.
pub fn output_filename(url: &str) -> String {
    sanitize_filename(last_path_segment(url))
}

/// Full destination path for `url` inside `dir`.
pub fn output_path<P: AsRef<Path>>(dir: P, url: &str) -> PathBuf {
    dir.as_ref().join(output_filename(url))
}
