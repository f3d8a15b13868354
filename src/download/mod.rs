//! Downloading
//!
//! This module derives output filenames, retrieves URLs over HTTP
//! and drives the sequential download loop.

pub mod fetcher;
pub mod filename;
pub mod harvester;

// Re-export commonly used items
pub use fetcher::{FetchUrl, HttpFetcher};
pub use filename::{last_path_segment, output_filename, output_path, sanitize_filename};
pub use harvester::Harvester;
