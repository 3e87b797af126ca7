//! Filesystem module.
//!
//! Provides:
//! - Filename sanitization
//! - Output directory layout

pub mod naming;
pub mod paths;

pub use naming::sanitize_filename;
pub use paths::{ensure_dir, resolve_post_directory, user_has_multiple_posts};
