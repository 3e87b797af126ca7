//! Rice Fetcher - download r/unixporn posts and their media
//!
//! This library fetches a single Reddit post, works out which of its links
//! point at downloadable media, and saves the files plus a `metadata.json`
//! under `rices/<author>/`.
//!
//! # Features
//!
//! - Gallery posts, direct media links, i.redd.it images
//! - v.redd.it videos via their fallback MP4
//! - Single imgur images
//! - Filesystem-safe, length-bounded directory names
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use rice_fetcher::{fetch_post, Config, Downloader, RedditApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = RedditApi::new(
//!         &config.account.client_id,
//!         &config.account.client_secret,
//!         &config.account.user_agent,
//!     )
//!     .await?;
//!     let downloader = Downloader::new(
//!         &config.options.download_user_agent,
//!         config.download_timeout(),
//!         true,
//!     )?;
//!
//!     let saved = fetch_post(
//!         &api,
//!         &downloader,
//!         &config.options.output_directory,
//!         "https://www.reddit.com/r/unixporn/comments/abc123/my_rice/",
//!     )
//!     .await?;
//!     println!("{:?}", saved.metadata.media_files);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod metadata;
pub mod output;

// Re-exports for convenience
pub use api::{PostSource, RedditApi};
pub use config::Config;
pub use download::{fetch_post, DownloadResult, Downloader, SavedPost};
pub use error::{Error, Result};
pub use media::{classify, MediaItem};
pub use metadata::RiceMetadata;
