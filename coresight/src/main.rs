#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod dispatch;

use anyhow::Context;
use args::Args;
use clap::Parser;
use coresight_client::{ApiResponse, ClientConfig, CoresightError};
use dispatch::Profile;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args.log_filter);

    let config = resolve_config(&args)?;

    tracing::debug!(base_url = config.base_url(), scoped = args.scoped, "connecting");

    let profile = Profile::connect(config, args.scoped)?;

    match dispatch::run(&profile, args.command) {
        Ok(response) => {
            println!("{}", render(&response)?);
            Ok(())
        }
        Err(err) => match rejection(&err) {
            Some(report) => {
                eprintln!("{report}");
                std::process::exit(REJECTED_EXIT_CODE);
            }
            None => Err(err),
        },
    }
}

/// Exit status when the API answers outside `200..300`
const REJECTED_EXIT_CODE: i32 = 1;

/// Install the `tracing` subscriber, falling back to `warn` on a bad filter
fn init_logging(filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge the config file with command-line overrides
fn resolve_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let file = args
        .config
        .as_deref()
        .map(ClientConfig::load)
        .transpose()?;

    let base_url = args
        .base_url
        .as_deref()
        .or_else(|| file.as_ref().map(ClientConfig::base_url))
        .context("no base URL: pass --base-url, set CORESIGHT_BASE_URL, or use --config")?;

    let api_key = args
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .or_else(|| file.as_ref().and_then(ClientConfig::api_key).map(str::to_owned));

    Ok(ClientConfig::new(base_url, api_key)?)
}

/// Pretty-printed JSON, or the text body as received
fn render(response: &ApiResponse) -> serde_json::Result<String> {
    match response {
        ApiResponse::Json(value) => serde_json::to_string_pretty(value),
        ApiResponse::Text(text) => Ok(text.clone()),
    }
}

/// Status line and raw body of a rejected request
///
/// `None` when `err` is not an API rejection.
fn rejection(err: &anyhow::Error) -> Option<String> {
    let api = err.downcast_ref::<CoresightError>().and_then(CoresightError::as_api)?;

    let mut report = format!("request failed with status {}", api.status_code());
    if !api.message().is_empty() {
        report.push('\n');
        report.push_str(api.message());
    }

    Some(report)
}
