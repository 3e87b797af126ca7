//! Media item representation.

/// Extension used when a strategy needs one and the URL has none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// A downloadable media asset resolved from a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Download URL.
    pub url: String,

    /// File extension (without dot), taken verbatim from the URL.
    pub extension: String,
}

impl MediaItem {
    pub fn new(url: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extension: extension.into(),
        }
    }

    /// Generate the on-disk filename for this item.
    ///
    /// A post with a single item gets `image.<ext>`; otherwise items are
    /// numbered from 1 with two-digit padding (`image_01.<ext>`).
    pub fn generate_filename(&self, index: usize, total: usize) -> String {
        if total == 1 {
            format!("image.{}", self.extension)
        } else {
            format!("image_{:02}.{}", index + 1, self.extension)
        }
    }
}
