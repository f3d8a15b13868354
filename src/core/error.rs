use std::fmt;

/// Errors that abort a seedfetch run.
///
/// Per-URL download failures are not represented here; they are reported
/// through [`crate::core::types::DownloadResult`] and the run continues.
#[derive(Debug)]
pub enum SeedFetchError {
    /// IO error (directory creation, reading the input, etc.)
    Io(std::io::Error),

    /// Input file does not exist
    FileNotFound(String),

    /// CSV structural error
    Csv(csv::Error),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for SeedFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedFetchError::Io(err) => write!(f, "IO error: {err}"),
            SeedFetchError::FileNotFound(path) => write!(f, "File not found: {path}"),
            SeedFetchError::Csv(err) => write!(f, "CSV error: {err}"),
            SeedFetchError::Http(err) => write!(f, "HTTP error: {err}"),
            SeedFetchError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SeedFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedFetchError::Io(err) => Some(err),
            SeedFetchError::Csv(err) => Some(err),
            SeedFetchError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeedFetchError {
    fn from(err: std::io::Error) -> Self {
        SeedFetchError::Io(err)
    }
}

impl From<csv::Error> for SeedFetchError {
    fn from(err: csv::Error) -> Self {
        SeedFetchError::Csv(err)
    }
}

impl From<reqwest::Error> for SeedFetchError {
    fn from(err: reqwest::Error) -> Self {
        SeedFetchError::Http(err)
    }
}

/// Type alias for Results using SeedFetchError
pub type Result<T> = std::result::Result<T, SeedFetchError>;
