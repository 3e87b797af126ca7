//! Reddit API module.
//!
//! This module provides:
//! - HTTP client for the read-only OAuth API
//! - Client-credential authentication
//! - API response types

pub mod auth;
pub mod client;
pub mod types;

pub use client::{PostSource, RedditApi};
pub use types::*;
