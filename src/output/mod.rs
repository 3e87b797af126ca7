//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Post summary reporting

pub mod console;
pub mod progress;
pub mod summary;

pub use self::console::{print_error, print_info, print_success, print_warning};
pub use progress::create_download_bar;
pub use summary::{format_created, print_post_summary};
