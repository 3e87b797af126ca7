//! Output directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_filename;

/// Decide and create the directory a post's files are written into.
///
/// The first post of an author lands directly in `<base>/<author>/`. Once the
/// author directory holds a subdirectory, posts are nested under
/// `<base>/<author>/<title>/`.
pub fn resolve_post_directory(base_dir: &Path, username: &str, title: &str) -> Result<PathBuf> {
    let user_dir = base_dir.join(sanitize_filename(username));

    let has_existing_posts = has_subdirectory(&user_dir)?;

    let post_dir = if has_existing_posts || user_has_multiple_posts(username) {
        user_dir.join(sanitize_filename(title))
    } else {
        user_dir
    };

    ensure_dir(&post_dir)?;
    tracing::debug!("Post directory: {}", post_dir.display());

    Ok(post_dir)
}

/// Whether the user is known to have several posts.
///
/// There is no history source yet, so this never triggers nesting on its own.
pub fn user_has_multiple_posts(_username: &str) -> bool {
    false
}

/// Whether `dir` exists and contains at least one directory entry.
fn has_subdirectory(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }

    for entry in fs::read_dir(dir)? {
        if entry?.file_type()?.is_dir() {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
