//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// r/unixporn post fetcher CLI.
#[derive(Parser, Debug)]
#[command(
    name = "rice-fetcher",
    version,
    about = "Fetch r/unixporn posts and media",
    long_about = "Download the screenshots and videos of a single r/unixporn post into\n\
                  rices/<author>/ together with a metadata.json describing the post."
)]
pub struct Args {
    /// Reddit post URL.
    pub post_url: String,

    /// Reddit API client ID.
    #[arg(long, env = "REDDIT_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Reddit API client secret.
    #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// User agent string.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Base directory for saved posts.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(client_id) = &self.client_id {
            config.account.client_id = client_id.clone();
        }

        if let Some(client_secret) = &self.client_secret {
            config.account.client_secret = client_secret.clone();
        }

        if let Some(user_agent) = &self.user_agent {
            config.account.user_agent = user_agent.clone();
        }

        if let Some(dir) = &self.output_directory {
            config.options.output_directory = dir.clone();
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}
