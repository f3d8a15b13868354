use clap::Parser;
use seedfetch::config::{CliConfig, Config};
use seedfetch::download::{Harvester, HttpFetcher};
use seedfetch::logging;
use seedfetch::ui::{Cli, cli_to_config};

use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match run_seedfetch_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main download logic extracted from main() for testing
pub async fn run_seedfetch_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let fetcher = HttpFetcher::from_config(&config).inspect_err(|e| {
        logging::log_error("Could not build HTTP client", Some(e));
    })?;
    let harvester = Harvester::new(fetcher);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harvester
        .run(&config.input_path(), &config.output_dir_path(), &mut out)
        .await
        .inspect_err(|e| {
            logging::log_error("Run aborted", Some(e));
        })?;

    // Individual download failures never change the exit code
    Ok(0)
}

/// Load configuration from file or standard locations, then merge CLI and environment
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence over the file, the environment can only switch TLS checks off
    config.merge_with_cli(cli_config);
    config.merge_with_env();
    config.validate()?;

    Ok(config)
}
