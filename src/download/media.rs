//! Media file downloading.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::{header, Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Browser-like user agent sent with media requests.
pub const DEFAULT_DOWNLOAD_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout for media downloads.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Streams remote files to disk.
pub struct Downloader {
    client: Client,
    user_agent: String,
    show_progress: bool,
}

impl Downloader {
    /// Create a downloader with a fixed user agent.
    ///
    /// `timeout` bounds connecting and each read, not the whole transfer.
    pub fn new(user_agent: &str, timeout: Duration, show_progress: bool) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            show_progress,
        })
    }

    /// Download `url` into `output_path`.
    ///
    /// Failures are logged and reported as `false`. An existing file at
    /// `output_path` is only replaced once the server answers with success.
    pub async fn download(&self, url: &str, output_path: &Path) -> bool {
        match self.download_to(url, output_path).await {
            Ok(()) => {
                tracing::info!("Downloaded: {}", output_path.display());
                true
            }
            Err(e) => {
                tracing::error!("Failed to download {}: {}", url, e);
                false
            }
        }
    }

    async fn download_to(&self, url: &str, output_path: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!("HTTP {}", response.status())));
        }

        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content_length = response.content_length();
        let progress = if self.show_progress
            && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
        {
            Some(create_download_bar(content_length.unwrap_or(0)))
        } else {
            None
        };

        let file = File::create(output_path).await?;
        if let Err(e) = write_body(response, file, progress.as_ref()).await {
            if let Err(remove_err) = tokio::fs::remove_file(output_path).await {
                tracing::warn!(
                    "Failed to remove partial file {}: {}",
                    output_path.display(),
                    remove_err
                );
            }
            return Err(e);
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        tracing::debug!("Wrote {} to {}", url, output_path.display());

        Ok(())
    }
}

/// Stream a response body into `file`.
async fn write_body(
    response: Response,
    mut file: File,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;
    tracing::debug!("Streamed {} bytes", downloaded);

    Ok(())
}
