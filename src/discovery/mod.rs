//! URL discovery
//!
//! This module handles reading CSV rows and finding the URLs
//! referenced in their cells.

pub mod finder;
pub mod reader;

// Re-export commonly used items
pub use finder::{Finder, UrlFinder, extract_urls};
pub use reader::{RowReader, decode_utf8_lossy_skip, parse_rows, read_rows};
