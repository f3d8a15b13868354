use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::core::constants::http;
use crate::core::error::Result;
use crate::core::types::DownloadResult;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait FetchUrl {
    /// Retrieve `url` and write the response body to `dest`.
    ///
    /// Never fails the run: every problem is reported in the returned result.
    async fn fetch_to_path(&self, url: &str, dest: &Path) -> DownloadResult;
}

/// Reasons a single download can fail.
#[derive(Debug)]
enum FetchError {
    Request(reqwest::Error),
    Status(StatusCode),
    Write(PathBuf, io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(err) => {
                // reqwest's own message only names the URL; the cause is in the source
                match std::error::Error::source(err) {
                    Some(source) => write!(f, "{err}: {source}"),
                    None => write!(f, "{err}"),
                }
            }
            FetchError::Status(status) => write!(
                f,
                "HTTP Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
            FetchError::Write(path, err) => write!(f, "{}: {err}", path.display()),
        }
    }
}

/// Fetcher backed by a single reqwest client built for the run.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build the HTTP client from `config`.
    ///
    /// TLS verification is only disabled on this client, never process-wide.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .redirect(Policy::limited(http::MAX_REDIRECTS))
            .user_agent(user_agent);

        if let Some(timeout) = config.timeout_duration() {
            client_builder = client_builder.timeout(timeout);
        }

        // With rustls this also turns off hostname checks
        if config.skip_ssl_verification() {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = config.proxy {
            client_builder = client_builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }

    async fn download(&self, url: &str, dest: &Path) -> std::result::Result<u64, FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let write_err = |err| FetchError::Write(dest.to_path_buf(), err);
        let mut file = File::create(dest).await.map_err(write_err)?;
        let mut bytes_written = 0u64;

        // A failure part way through leaves the partial file behind
        while let Some(chunk) = response.chunk().await.map_err(FetchError::Request)? {
            file.write_all(&chunk).await.map_err(write_err)?;
            bytes_written += chunk.len() as u64;
        }
        file.flush().await.map_err(write_err)?;

        Ok(bytes_written)
    }
}

#[async_trait]
impl FetchUrl for HttpFetcher {
    async fn fetch_to_path(&self, url: &str, dest: &Path) -> DownloadResult {
        match self.download(url, dest).await {
            Ok(bytes) => DownloadResult::success(url.to_string(), dest.to_path_buf(), bytes),
            Err(err) => {
                DownloadResult::error(url.to_string(), dest.to_path_buf(), err.to_string())
            }
        }
    }
}
