//! Ecodadys Downloader - CLI entry point.

use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ecodadys_downloader::{
    api::EcodadysApi,
    cli::{prompt_credentials, Args},
    download::download_all,
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_info, print_run_stats, print_success},
};

/// Resource categories fetched for the account, in download order.
const CATEGORIES: [&str; 2] = ["images", "videos"];

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Authentication(_)
                | Error::Api(_)
                | Error::Http(_)
                | Error::Json(_)
                | Error::MissingAccountId
                | Error::MissingToken
                | Error::MissingTokenString => ExitCode::from(exit_codes::API_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
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

    // Print banner
    print_banner();

    let config = args.into_config()?;
    print_config_summary(
        config.api_origin.as_str(),
        &config.output_directory.display().to_string(),
        config.concurrency.map(NonZeroUsize::get),
    );

    // Interactive login
    let credentials = prompt_credentials()?;

    print_info("Logging in...");
    let api = Arc::new(EcodadysApi::new(config.api_origin.clone())?);
    let session = api.login(&credentials.email, &credentials.password).await?;
    print_success(&format!(
        "Successfully logged in (account {})",
        session.account_id
    ));

    // List both categories; a failure in either aborts the run.
    let mut urls = Vec::new();
    for category in CATEGORIES {
        let listed = api.list_resources(&session, category).await?;
        print_info(&format!("Found {} {}", listed.len(), category));
        urls.extend(listed);
    }

    // Fan out the downloads and wait for every one of them.
    let stats = download_all(Arc::clone(&api), &config, urls).await?;
    print_run_stats(&stats);

    Ok(())
}
