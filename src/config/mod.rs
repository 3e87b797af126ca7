//! Configuration module for the rice-fetcher.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation
//! - Post URL parsing

pub mod loader;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig};
pub use validation::{parse_post_id, validate_config};
