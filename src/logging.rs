use crate::config::Config;
use crate::core::types::{DownloadResult, Row};
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    // stdout carries the GET/ERROR lines, logs are opt-in
    let level = if verbose && !quiet {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    };

    let mut builder = env_logger::Builder::from_default_env();

    // RUST_LOG decides unless a flag was given
    if verbose || quiet || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }

    // try_init: a second call (tests, embedding) keeps the first logger
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config
        .timeout
        .map_or_else(|| "none".to_string(), |t| format!("{t}s"));

    info!(
        "Input: {}, output directory: {}",
        config.input_path().display(),
        config.output_dir_path().display()
    );
    info!(
        "HTTP: timeout={timeout}, proxy={}, user_agent={}",
        config.proxy.as_deref().unwrap_or("none"),
        config.user_agent.as_deref().unwrap_or("default")
    );

    if config.skip_ssl_verification() {
        warn!("TLS certificate and hostname verification is DISABLED for this run");
    }
}

/// Log the header columns of the input
pub fn log_csv_columns(headers: &[String]) {
    debug!("CSV columns ({}): {}", headers.len(), headers.join(", "));
}

/// Log how many new URLs a row contributed
pub fn log_row_info(row_number: usize, row: &Row, new_urls: usize) {
    if row.is_empty() {
        debug!("Row {row_number}: no cells");
    } else if new_urls > 0 {
        debug!(
            "Row {row_number}: {} cell(s), {new_urls} new URL(s)",
            row.len()
        );
    }
}

/// Log individual download results for debugging
pub fn log_download_result(result: &DownloadResult) {
    match (&result.bytes_written, &result.description) {
        (Some(bytes), _) => debug!(
            "✓ {} -> {} ({} bytes)",
            result.url,
            result.path.display(),
            bytes
        ),
        (None, Some(desc)) => debug!("✗ {} -> {}", result.url, desc),
        (None, None) => debug!("? {} -> unknown", result.url),
    }
}

/// Log run completion
pub fn log_harvest_complete(attempted: usize, failed: usize, duration_ms: u128) {
    if failed == 0 {
        info!("✅ Done: {attempted}/{attempted} URLs downloaded ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Done: {}/{} URLs downloaded, {} failed ({}ms)",
            attempted - failed,
            attempted,
            failed,
            duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
