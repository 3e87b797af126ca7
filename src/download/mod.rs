//! Download module for content downloading.
//!
//! This module provides:
//! - Per-post download bookkeeping
//! - Single post fetch-and-persist flow
//! - Media file downloading

pub mod media;
pub mod single;
pub mod state;

pub use media::Downloader;
pub use single::{fetch_post, SavedPost};
pub use state::{DownloadResult, DownloadState};
