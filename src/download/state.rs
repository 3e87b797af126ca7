//! Per-post download bookkeeping.

use crate::media::MediaItem;

/// Outcome of one media download attempt.
#[derive(Debug, Clone)]
pub struct DownloadResult {
    pub item: MediaItem,
    pub filename: String,
    pub success: bool,
}

/// Results of all download attempts for one post, in item order.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub results: Vec<DownloadResult>,
}

impl DownloadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: MediaItem, filename: String, success: bool) {
        self.results.push(DownloadResult {
            item,
            filename,
            success,
        });
    }

    /// Filenames of successful downloads, in item order.
    pub fn saved_files(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.filename.clone())
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }
}
