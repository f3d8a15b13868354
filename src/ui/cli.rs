// Command-line interface definitions and parsing for seedfetch

use crate::config::CliConfig;
use clap::Parser;

/// Download every http(s) URL referenced in a CSV export.
///
/// With no arguments, reads `extract-data-2026-02-12.csv` from the working
/// directory and writes into `downloads/`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file to read (default: extract-data-2026-02-12.csv)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    // Core Options
    /// Directory to write downloads to (default: downloads)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Core Options")]
    pub output: Option<String>,

    /// Per-download timeout in seconds (default: none)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    // Output & Verbosity
    /// Suppress diagnostic logging
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip TLS certificate and hostname verification (also: SKIP_SSL_VERIFY=1)
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed arguments into the CliConfig merged onto the file config
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        input: cli.input.clone(),
        output_dir: cli.output.clone(),
        timeout: cli.timeout,
        quiet: cli.quiet,
        verbose: cli.verbose,
        user_agent: cli.user_agent.clone(),
        proxy: cli.proxy.clone(),
        skip_ssl_verification: cli.insecure,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
