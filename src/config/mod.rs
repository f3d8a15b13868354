//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files, CLI arguments and the environment.

use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{env, http, paths};
use crate::core::error::{Result, SeedFetchError};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// CSV file to read URLs from
    pub input: Option<String>,

    /// Directory downloads are written to
    pub output_dir: Option<String>,

    /// Timeout in seconds for each download (no timeout when unset)
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Skip TLS certificate and hostname verification
    pub skip_ssl_verification: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: Some(paths::DEFAULT_INPUT.to_string()),
            output_dir: Some(paths::DEFAULT_OUTPUT_DIR.to_string()),
            timeout: None, // Client default, a stalled server stalls the run
            user_agent: None,
            proxy: None,
            skip_ssl_verification: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SeedFetchError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SeedFetchError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `.seedfetch.toml` from the working directory if present, else defaults.
    ///
    /// A file that exists but does not parse is an error rather than silently ignored.
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_dir(".")
    }

    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(paths::CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load_from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref input) = cli_config.input {
            self.input = Some(input.clone());
        }
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Apply `SKIP_SSL_VERIFY` from the process environment.
    pub fn merge_with_env(&mut self) {
        self.apply_skip_ssl_env(std::env::var_os(env::SKIP_SSL_VERIFY).as_deref());
    }

    /// Turn TLS verification off when the flag value is set and non-empty.
    ///
    /// The flag can only disable verification, never re-enable it.
    pub fn apply_skip_ssl_env(&mut self, value: Option<&OsStr>) {
        if is_env_flag_set(value) {
            self.skip_ssl_verification = Some(true);
        }
    }

    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.input.as_deref().unwrap_or(paths::DEFAULT_INPUT))
    }

    pub fn output_dir_path(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(paths::DEFAULT_OUTPUT_DIR))
    }

    /// Get timeout as Duration, if one is configured
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn skip_ssl_verification(&self) -> bool {
        self.skip_ssl_verification.unwrap_or(false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(SeedFetchError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > http::MAX_TIMEOUT_SECONDS {
                return Err(SeedFetchError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref input) = self.input
            && input.trim().is_empty()
        {
            return Err(SeedFetchError::Config(
                "Input path cannot be empty.".to_string(),
            ));
        }

        if let Some(ref output_dir) = self.output_dir
            && output_dir.trim().is_empty()
        {
            return Err(SeedFetchError::Config(
                "Output directory cannot be empty.".to_string(),
            ));
        }

        if let Some(ref proxy) = self.proxy {
            reqwest::Proxy::all(proxy).map_err(|e| {
                SeedFetchError::Config(format!("Invalid proxy URL '{proxy}': {e}"))
            })?;
        }

        Ok(())
    }
}

/// True when an environment flag is present with a non-empty value.
pub fn is_env_flag_set(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Core options
    pub input: Option<String>,      // [INPUT]
    pub output_dir: Option<String>, // --output
    pub timeout: Option<u64>,       // --timeout

    // Output
    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    // Network & security
    pub user_agent: Option<String>,  // --user-agent
    pub proxy: Option<String>,       // --proxy
    pub skip_ssl_verification: bool, // --insecure

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
