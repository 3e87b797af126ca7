//! Single post download logic.

use std::path::{Path, PathBuf};

use crate::api::PostSource;
use crate::config::parse_post_id;
use crate::download::media::Downloader;
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::fs::resolve_post_directory;
use crate::media::classify;
use crate::metadata::RiceMetadata;

/// Directory name used for posts whose author was deleted.
pub const DELETED_USER_DIR: &str = "deleted_user";

/// A post that was saved to disk.
#[derive(Debug, Clone)]
pub struct SavedPost {
    pub metadata: RiceMetadata,
    pub directory: PathBuf,
}

/// Fetch a single post by URL, download its media and write its metadata.
pub async fn fetch_post<S>(
    source: &S,
    downloader: &Downloader,
    base_dir: &Path,
    post_url: &str,
) -> Result<SavedPost>
where
    S: PostSource + ?Sized,
{
    let post_id = parse_post_id(post_url).inspect_err(|e| tracing::error!("{}", e))?;

    let post = source.get_post(&post_id).await.inspect_err(|e| {
        tracing::error!("Error fetching post {}: {}", post_url, e);
    })?;

    tracing::info!("Fetching post: {}", post.title);

    let items = classify(&post);
    if items.is_empty() {
        tracing::warn!("No media found in post: {}", post_url);
        return Err(Error::NoMedia(post_url.to_string()));
    }

    tracing::info!("Found {} media items in post", items.len());

    let username = post.author.as_deref().unwrap_or(DELETED_USER_DIR);
    let post_dir = resolve_post_directory(base_dir, username, &post.title)?;

    let total = items.len();
    let mut state = DownloadState::new();

    for (index, item) in items.into_iter().enumerate() {
        let filename = item.generate_filename(index, total);
        let output_path = post_dir.join(&filename);

        let success = downloader.download(&item.url, &output_path).await;
        state.record(item, filename, success);
    }

    if state.success_count() == 0 {
        tracing::error!("Failed to download any media for post: {}", post_url);
        return Err(Error::NoDownloads(post_url.to_string()));
    }

    if state.failure_count() > 0 {
        tracing::warn!(
            "{} of {} media items failed to download",
            state.failure_count(),
            total
        );
    }

    let metadata = RiceMetadata::from_post(&post, state.saved_files());
    metadata.save(&post_dir)?;

    tracing::info!("Successfully processed post: {}", post.title);
    tracing::info!(
        "Downloaded {} files to: {}",
        metadata.media_files.len(),
        post_dir.display()
    );

    Ok(SavedPost {
        metadata,
        directory: post_dir,
    })
}
