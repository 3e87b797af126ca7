//! Post summary reporting.

use chrono::{DateTime, Utc};
use console::style;

use crate::download::SavedPost;
use crate::output::console::print_success;

/// Print the status lines for a saved post.
pub fn print_post_summary(saved: &SavedPost) {
    let meta = &saved.metadata;

    println!();
    print_success(&format!(
        "Successfully processed post: {}",
        style(&meta.title).bold()
    ));
    println!("  Files saved to: {}", saved.directory.display());
    println!("  Files:          {}", meta.media_files.join(", "));
    println!("  Score: {}, Comments: {}", meta.score, meta.num_comments);
    if let Some(posted) = format_created(meta.created_utc) {
        println!("  Posted:         {}", posted);
    }
}

/// Render a Unix timestamp in seconds as a UTC date.
pub fn format_created(created_utc: f64) -> Option<String> {
    if !created_utc.is_finite() || created_utc <= 0.0 {
        return None;
    }

    DateTime::<Utc>::from_timestamp(created_utc as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}
