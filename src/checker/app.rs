//! Program to run smoke checks against a running generator service.
//!
//! Run against the default local service:
//!
//! ```text
//! cargo run --bin api_smoke_checker
//! ```
//!
//! Run providing a base URL:
//!
//! ```text
//! cargo run --bin api_smoke_checker -- "http://localhost:3000"
//! SMOKE_CHECKER_BASE_URL="http://localhost:3000" cargo run --bin api_smoke_checker
//! ```
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use super::config::{Configuration, PlainConfiguration, DEFAULT_BASE_URL};
use super::console::Console;
use super::service::{RunReport, Service};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the service under test.
    #[clap(env = "SMOKE_CHECKER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// # Errors
///
/// Will return an error if the provided base URL is not valid.
pub async fn run() -> Result<RunReport> {
    let () = tracing_subscriber::fmt().compact().with_max_level(Level::INFO).init();

    let args = Args::parse();

    let config = setup_config(args)?;

    let service = Service::new(Arc::new(config), Console::new());

    Ok(service.run_checks().await)
}

fn setup_config(args: Args) -> Result<Configuration> {
    Configuration::try_from(PlainConfiguration { base_url: args.base_url }).context("invalid base URL")
}
