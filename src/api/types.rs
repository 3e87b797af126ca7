//! API response type definitions.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Author name the API reports for removed accounts.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// OAuth token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Generic listing wrapper returned by list endpoints.
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

/// Listing payload.
#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<Thing<T>>,
}

/// A typed entry inside a listing ("t3" for posts).
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

/// A single submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_author")]
    pub author: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub selftext: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_gallery: Option<bool>,
    #[serde(default)]
    pub media_metadata: Option<GalleryMetadata>,
    #[serde(default)]
    pub media: Option<MediaDescriptor>,
}

impl Post {
    /// Whether the post is flagged as a gallery.
    pub fn is_gallery(&self) -> bool {
        self.is_gallery.unwrap_or(false)
    }

    /// Canonical link to the post's comment page.
    pub fn canonical_url(&self) -> String {
        format!("https://reddit.com{}", self.permalink)
    }
}

/// Gallery items keyed by media ID, in the order the API sent them.
#[derive(Debug, Clone, Default)]
pub struct GalleryMetadata(pub Vec<(String, GalleryItem)>);

impl GalleryMetadata {
    pub fn iter(&self) -> impl Iterator<Item = &(String, GalleryItem)> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for GalleryMetadata {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = GalleryMetadata;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of gallery items")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, GalleryItem>()? {
                    entries.push((key, value));
                }
                Ok(GalleryMetadata(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// One gallery entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub status: Option<String>,
    /// Largest available size.
    #[serde(default)]
    pub s: Option<GallerySource>,
}

impl GalleryItem {
    /// URL of the largest size variant, if the entry carries one.
    pub fn source_url(&self) -> Option<&str> {
        self.s.as_ref()?.u.as_deref()
    }
}

/// Size variant of a gallery entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GallerySource {
    #[serde(default)]
    pub u: Option<String>,
    #[serde(default)]
    pub x: Option<u32>,
    #[serde(default)]
    pub y: Option<u32>,
}

/// Hosted media descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaDescriptor {
    #[serde(default)]
    pub reddit_video: Option<RedditVideo>,
}

/// First-party hosted video.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedditVideo {
    #[serde(default)]
    pub fallback_url: Option<String>,
}

fn deserialize_author<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let author = Option::<String>::deserialize(deserializer)?;
    Ok(author.filter(|name| !name.is_empty() && name != DELETED_AUTHOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_metadata_keeps_order() {
        let json = r#"{
            "zz": {"status": "valid", "s": {"u": "https://preview.redd.it/zz.png?a=1&amp;b=2"}},
            "aa": {"status": "failed"},
            "mm": {"status": "valid", "s": {"u": "https://preview.redd.it/mm.jpg"}}
        }"#;
        let gallery: GalleryMetadata = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = gallery.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zz", "aa", "mm"]);
        assert!(gallery.0[1].1.source_url().is_none());
    }

    #[test]
    fn test_deleted_author_is_none() {
        let post: Post =
            serde_json::from_str(r#"{"id": "abc", "author": "[deleted]", "title": "t"}"#).unwrap();
        assert!(post.author.is_none());

        let post: Post = serde_json::from_str(r#"{"id": "abc", "author": null}"#).unwrap();
        assert!(post.author.is_none());

        let post: Post = serde_json::from_str(r#"{"id": "abc", "author": "alice"}"#).unwrap();
        assert_eq!(post.author.as_deref(), Some("alice"));
    }

    #[test]
    fn test_post_defaults() {
        let post: Post = serde_json::from_str(
            r#"{"id": "abc", "permalink": "/r/unixporn/comments/abc/x/", "media_metadata": null}"#,
        )
        .unwrap();
        assert!(!post.is_gallery());
        assert!(post.media_metadata.is_none());
        assert_eq!(
            post.canonical_url(),
            "https://reddit.com/r/unixporn/comments/abc/x/"
        );
    }
}
