//! Post classification into downloadable media items.

use url::Url;

use crate::api::types::Post;
use crate::media::item::{MediaItem, DEFAULT_EXTENSION};

/// Extensions that mark a URL as a direct media link.
const DIRECT_MEDIA_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "mp4", "webm"];

/// Extensions accepted as-is on third-party image links.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Hosts with dedicated handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaHost {
    /// i.redd.it
    RedditImage,
    /// v.redd.it
    RedditVideo,
    /// imgur.com and its subdomains
    Imgur,
    Other,
}

impl MediaHost {
    /// Match a URL's host against the known set.
    pub fn from_url(url: &str) -> Self {
        let Ok(parsed) = Url::parse(url) else {
            return MediaHost::Other;
        };
        let Some(host) = parsed.host_str() else {
            return MediaHost::Other;
        };
        let host = host.to_ascii_lowercase();

        match host.as_str() {
            "i.redd.it" => MediaHost::RedditImage,
            "v.redd.it" => MediaHost::RedditVideo,
            h if h == "imgur.com" || h.ends_with(".imgur.com") => MediaHost::Imgur,
            _ => MediaHost::Other,
        }
    }
}

/// Resolve the media items of a post, in download order.
pub fn classify(post: &Post) -> Vec<MediaItem> {
    if post.is_gallery() {
        return classify_gallery(post);
    }

    let Some(url) = post.url.as_deref().filter(|u| !u.is_empty()) else {
        return Vec::new();
    };

    if has_extension(url, DIRECT_MEDIA_EXTENSIONS) {
        let extension = extract_extension(url).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        return vec![MediaItem::new(url, extension)];
    }

    match MediaHost::from_url(url) {
        MediaHost::RedditImage => {
            let extension =
                extract_extension(url).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
            vec![MediaItem::new(url, extension)]
        }
        MediaHost::RedditVideo => post
            .media
            .as_ref()
            .and_then(|media| media.reddit_video.as_ref())
            .and_then(|video| video.fallback_url.as_deref())
            .map(|fallback| vec![MediaItem::new(fallback, "mp4")])
            .unwrap_or_default(),
        MediaHost::Imgur if is_album(url) => {
            tracing::warn!("Imgur albums are not supported: {}", url);
            Vec::new()
        }
        MediaHost::Imgur => {
            let url = if has_extension(url, IMAGE_EXTENSIONS) {
                url.to_string()
            } else {
                append_extension(url, DEFAULT_EXTENSION)
            };
            let extension =
                extract_extension(&url).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
            vec![MediaItem::new(url, extension)]
        }
        MediaHost::Other => Vec::new(),
    }
}

/// One item per gallery entry carrying a largest-size variant.
fn classify_gallery(post: &Post) -> Vec<MediaItem> {
    let Some(gallery) = post.media_metadata.as_ref() else {
        tracing::debug!("Gallery post {} has no media metadata", post.id);
        return Vec::new();
    };

    gallery
        .iter()
        .filter_map(|(media_id, entry)| {
            let Some(source) = entry.source_url() else {
                tracing::debug!("Skipping gallery item {} without a source", media_id);
                return None;
            };
            let url = source.replace("&amp;", "&");
            let extension =
                extract_extension(&url).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
            Some(MediaItem::new(url, extension))
        })
        .collect()
}

/// Strip the query string (everything from the first `?`) and any fragment.
fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Extract the extension of the URL's final path segment, verbatim.
pub fn extract_extension(url: &str) -> Option<String> {
    let path = strip_query(url);
    let filename = path.rsplit('/').next()?;
    let (_, ext) = filename.rsplit_once('.')?;

    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

/// Case-insensitive check of the URL path's suffix against `extensions`.
fn has_extension(url: &str, extensions: &[&str]) -> bool {
    let path = strip_query(url).to_ascii_lowercase();
    extensions
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)))
}

/// Whether an imgur link points at a multi-image album.
fn is_album(url: &str) -> bool {
    let path = strip_query(url);
    path.contains("/a/") || path.contains("/gallery/")
}

/// Append `.ext` to the URL path, keeping any query string after it.
fn append_extension(url: &str, ext: &str) -> String {
    let path = strip_query(url);
    format!("{}.{}{}", path, ext, &url[path.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use crate::api::types::{
        GalleryItem, GalleryMetadata, GallerySource, MediaDescriptor, RedditVideo,
    };

    fn link_post(url: &str) -> Post {
        serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "title": "[Hyprland] test",
            "url": url,
        }))
        .unwrap()
    }

    fn gallery_entry(url: Option<&str>) -> GalleryItem {
        GalleryItem {
            status: Some("valid".to_string()),
            s: url.map(|u| GallerySource {
                u: Some(u.to_string()),
                x: Some(1920),
                y: Some(1080),
            }),
        }
    }

    #[test]
    fn test_gallery_keeps_stored_order() {
        let mut post = link_post("https://www.reddit.com/gallery/abc123");
        post.is_gallery = Some(true);
        post.media_metadata = Some(GalleryMetadata(vec![
            (
                "c".into(),
                gallery_entry(Some("https://preview.redd.it/c.png?width=1920&amp;s=1")),
            ),
            ("a".into(), gallery_entry(Some("https://preview.redd.it/a.jpg"))),
            ("b".into(), gallery_entry(Some("https://preview.redd.it/b.gif?s=2"))),
        ]));

        let items = classify(&post);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].url, "https://preview.redd.it/c.png?width=1920&s=1");
        assert_eq!(items[0].extension, "png");
        assert_eq!(items[1].extension, "jpg");
        assert_eq!(items[2].extension, "gif");
    }

    #[test]
    fn test_gallery_skips_entries_without_source() {
        let mut post = link_post("https://www.reddit.com/gallery/abc123");
        post.is_gallery = Some(true);
        post.media_metadata = Some(GalleryMetadata(vec![
            ("a".into(), gallery_entry(None)),
            ("b".into(), gallery_entry(Some("https://preview.redd.it/b.jpg"))),
        ]));

        let items = classify(&post);
        assert_eq!(items, vec![MediaItem::new("https://preview.redd.it/b.jpg", "jpg")]);
    }

    #[test]
    fn test_gallery_without_metadata_is_empty() {
        let mut post = link_post("https://i.redd.it/abc.png");
        post.is_gallery = Some(true);
        assert!(classify(&post).is_empty());
    }

    #[test]
    fn test_direct_link_preserves_case() {
        let items = classify(&link_post("https://example.com/pic.PNG"));
        assert_eq!(items, vec![MediaItem::new("https://example.com/pic.PNG", "PNG")]);
    }

    #[test]
    fn test_direct_link_with_query() {
        let items = classify(&link_post("https://example.com/clip.webm?token=1.2"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].extension, "webm");
    }

    #[test]
    fn test_reddit_image_unknown_extension() {
        let items = classify(&link_post("https://i.redd.it/abc.webp"));
        assert_eq!(items, vec![MediaItem::new("https://i.redd.it/abc.webp", "webp")]);
    }

    #[test]
    fn test_reddit_video_uses_fallback_url() {
        let mut post = link_post("https://v.redd.it/xyz789");
        post.media = Some(MediaDescriptor {
            reddit_video: Some(RedditVideo {
                fallback_url: Some("https://v.redd.it/xyz789/DASH_1080.mp4?source=fallback".into()),
            }),
        });

        let items = classify(&post);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].extension, "mp4");
        assert!(items[0].url.contains("DASH_1080"));
    }

    #[test]
    fn test_reddit_video_without_descriptor() {
        assert!(classify(&link_post("https://v.redd.it/xyz789")).is_empty());
    }

    #[test]
    fn test_imgur_album_is_skipped() {
        assert!(classify(&link_post("https://imgur.com/a/AbCdE")).is_empty());
        assert!(classify(&link_post("https://imgur.com/gallery/AbCdE")).is_empty());
    }

    /// Writer collecting formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_imgur_album_logs_warning() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let items = tracing::subscriber::with_default(subscriber, || {
            classify(&link_post("https://imgur.com/a/AbCdE"))
        });
        assert!(items.is_empty());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "no warning in {:?}", output);
        assert!(output.contains("Imgur albums are not supported: https://imgur.com/a/AbCdE"));
    }

    #[test]
    fn test_imgur_single_image_gets_jpg() {
        let items = classify(&link_post("https://imgur.com/AbCdE"));
        assert_eq!(items, vec![MediaItem::new("https://imgur.com/AbCdE.jpg", "jpg")]);

        let items = classify(&link_post("https://imgur.com/AbCdE?r=1"));
        assert_eq!(items[0].url, "https://imgur.com/AbCdE.jpg?r=1");
    }

    #[test]
    fn test_unknown_host_yields_nothing() {
        assert!(classify(&link_post("https://github.com/user/dotfiles")).is_empty());
        assert!(classify(&link_post("")).is_empty());
    }

    #[test]
    fn test_media_host_matching() {
        assert_eq!(MediaHost::from_url("https://i.redd.it/a.png"), MediaHost::RedditImage);
        assert_eq!(MediaHost::from_url("https://v.redd.it/a"), MediaHost::RedditVideo);
        assert_eq!(MediaHost::from_url("https://i.imgur.com/a"), MediaHost::Imgur);
        assert_eq!(MediaHost::from_url("https://notimgur.com/a"), MediaHost::Other);
        assert_eq!(MediaHost::from_url("not a url"), MediaHost::Other);
    }

    #[test]
    fn test_extract_extension() {
        assert_eq!(extract_extension("https://a.com/x.jpg?y=z.png"), Some("jpg".into()));
        assert_eq!(extract_extension("https://a.com/dir.d/file"), None);
        assert_eq!(extract_extension("https://a.com/file."), None);
    }
}
