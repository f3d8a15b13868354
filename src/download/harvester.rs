use log::debug;

use crate::core::constants::output;
use crate::core::error::Result;
use crate::core::types::DownloadResult;
use crate::discovery::{Finder, RowReader, UrlFinder};
use crate::download::fetcher::FetchUrl;
use crate::download::filename::output_path;
use crate::logging;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Drives a run: reads rows, finds new URLs and downloads each one in turn.
///
/// Each call to [`Harvester::run`] gets its own seen-set, so a harvester can
/// be reused for several inputs without one run suppressing URLs of another.
pub struct Harvester<F: FetchUrl> {
    fetcher: F,
}

impl<F: FetchUrl> Harvester<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Download every distinct URL in the CSV at `input` into `output_dir`.
    ///
    /// `GET <url> -> <path>` is written to `out` before each download and
    /// `  ERROR: <reason>` after a failed one. Failed downloads do not stop
    /// the run; only setup, input and CSV errors are returned as `Err`.
    /// The output directory is created before the input is opened.
    pub async fn run<W: Write>(
        &self,
        input: &Path,
        output_dir: &Path,
        out: &mut W,
    ) -> Result<Vec<DownloadResult>> {
        let started = Instant::now();

        fs::create_dir_all(output_dir)?;
        debug!("Output directory ready: {}", output_dir.display());

        let rows = RowReader::from_path(input)?;
        logging::log_csv_columns(rows.headers());

        let mut finder = Finder::new();
        let mut results = Vec::new();

        for (index, row) in rows.enumerate() {
            let row = row?;
            let new_urls = finder.find_new_urls(&row);
            logging::log_row_info(index + 1, &row, new_urls.len());

            for url in new_urls {
                let path = output_path(output_dir, &url);
                writeln!(out, "GET {} -> {}", url, path.display())?;
                out.flush()?;

                let result = self.fetcher.fetch_to_path(&url, &path).await;
                logging::log_download_result(&result);

                if let Some(ref description) = result.description {
                    writeln!(out, "{}{}", output::ERROR_PREFIX, description)?;
                }

                results.push(result);
            }
        }

        let failed = results.iter().filter(|r| r.is_not_ok()).count();
        logging::log_harvest_complete(results.len(), failed, started.elapsed().as_millis());

        Ok(results)
    }
}
