//! Media module for item representation and post classification.

pub mod classify;
pub mod item;

pub use classify::{classify, extract_extension, MediaHost};
pub use item::MediaItem;
