//! Rice Fetcher - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rice_fetcher::{
    api::RedditApi,
    cli::Args,
    config::{parse_post_id, validate_config, Config},
    download::{fetch_post, single::DELETED_USER_DIR, Downloader},
    error::{exit_codes, Result},
    output::{print_error, print_info, print_post_summary, print_warning},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            print_error("Failed to process post");
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}",
            args.config.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration and input before touching the network
    validate_config(&config)?;
    parse_post_id(&args.post_url)?;

    let downloader = Downloader::new(
        &config.options.download_user_agent,
        config.download_timeout(),
        config.options.show_downloads,
    )?;

    // Initialize API client
    print_info("Connecting to Reddit...");
    let api = RedditApi::new(
        &config.account.client_id,
        &config.account.client_secret,
        &config.account.user_agent,
    )
    .await?;

    let saved = fetch_post(
        &api,
        &downloader,
        &config.options.output_directory,
        &args.post_url,
    )
    .await?;

    if saved.metadata.username == rice_fetcher::api::DELETED_AUTHOR {
        print_warning(&format!(
            "Post author was deleted; files saved under {}",
            DELETED_USER_DIR
        ));
    }

    print_post_summary(&saved);

    Ok(())
}
