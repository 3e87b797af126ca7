//! Persisted per-post metadata record.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::types::{Post, DELETED_AUTHOR};
use crate::error::Result;

/// Name of the metadata file written next to the media.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Normalized description of a saved post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiceMetadata {
    pub username: String,
    pub title: String,
    pub post_id: String,
    pub url: String,
    pub created_utc: f64,
    pub score: i64,
    pub num_comments: u64,
    pub media_files: Vec<String>,
    pub selftext: String,
}

impl RiceMetadata {
    /// Build the record for `post` with the files that were actually saved.
    pub fn from_post(post: &Post, media_files: Vec<String>) -> Self {
        Self {
            username: post
                .author
                .clone()
                .unwrap_or_else(|| DELETED_AUTHOR.to_string()),
            title: post.title.clone(),
            post_id: post.id.clone(),
            url: post.canonical_url(),
            created_utc: post.created_utc,
            score: post.score,
            num_comments: post.num_comments,
            media_files,
            selftext: post.selftext.clone().unwrap_or_default(),
        }
    }

    /// Write the record as pretty-printed JSON into `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(METADATA_FILENAME), content)?;
        Ok(())
    }

    /// Read a record previously written by [`RiceMetadata::save`].
    pub fn load(dir: &Path) -> Result<Self> {
        let content = fs::read_to_string(dir.join(METADATA_FILENAME))?;
        Ok(serde_json::from_str(&content)?)
    }
}
