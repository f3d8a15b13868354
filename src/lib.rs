//! seedfetch reads a CSV export, finds every http(s) URL in its cells and
//! downloads each distinct one into a local directory.
//!
//! The pipeline is sequential: [`discovery`] turns the file into rows and
//! new URLs, [`download`] names and fetches them.

pub mod config;
pub mod core;
pub mod discovery;
pub mod download;
pub mod logging;
pub mod ui;

pub use crate::config::{CliConfig, Config};
pub use crate::core::{DownloadResult, Result, Row, SeedFetchError};
pub use crate::discovery::{Finder, UrlFinder};
pub use crate::download::{FetchUrl, Harvester, HttpFetcher};
