//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! Fixed paths, filename rules and the URL pattern live here so the reader,
//! finder and downloader agree on them.

/// Default input and output locations
pub mod paths {
    /// CSV export read when no input is given
    pub const DEFAULT_INPUT: &str = "extract-data-2026-02-12.csv";
    /// Directory downloads are written to when no output is given
    pub const DEFAULT_OUTPUT_DIR: &str = "downloads";
    /// Config file looked up in the working directory
    pub const CONFIG_FILE_NAME: &str = ".seedfetch.toml";
}

/// Output filename derivation
pub mod filenames {
    /// Maximum length of a derived filename, in characters
    pub const MAX_LEN: usize = 180;
    /// Name used when a URL has no trailing path segment
    pub const FALLBACK: &str = "download";
    /// Replacement for every run of disallowed characters
    pub const REPLACEMENT: &str = "_";
}

/// URL discovery
pub mod patterns {
    /// An http(s) scheme followed by the longest run of characters that are
    /// not whitespace, a comma or a double quote. The ASCII separator
    /// controls 0x1c to 0x1f also end a URL.
    pub const URL: &str = r#"https?://[^\s\x1c-\x1f,"]+"#;
}

/// Environment variables
pub mod env {
    /// Any non-empty value disables TLS verification for the run
    pub const SKIP_SSL_VERIFY: &str = "SKIP_SSL_VERIFY";
}

/// HTTP client settings
pub mod http {
    /// Redirects followed before giving up
    pub const MAX_REDIRECTS: usize = 10;
    /// Upper bound accepted for a configured timeout (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
}

/// Lines written to the run's output sink
pub mod output {
    /// Prefix for a failed download line
    pub const ERROR_PREFIX: &str = "  ERROR: ";
}
