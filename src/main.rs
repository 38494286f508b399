//! FinSecure console - terminal client for the risk-advisory service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use finsecure_api::HttpApiClient;
use finsecure_app::config::{
    default_config_path, load_settings, resolve_base_url, Settings, API_URL_ENV,
};
use finsecure_app::AppState;

/// FinSecure console - risk recommendations and operator QA dashboard
#[derive(Parser, Debug)]
#[command(name = "finsecure")]
#[command(about = "Terminal client for the FinSecure risk-advisory service", long_about = None)]
struct Args {
    /// Backend base URL (overrides FINSECURE_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    finsecure_core::logging::init()?;

    let settings = match args.config.or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    };

    let env_url = std::env::var(API_URL_ENV).ok();
    let base_url = resolve_base_url(args.api_url.as_deref(), env_url.as_deref(), &settings);

    let client = HttpApiClient::new(base_url.clone())
        .map_err(|e| eyre!("Invalid backend URL '{}': {}", base_url, e))?;
    tracing::info!("Using backend at {}", base_url);

    let state = AppState::with_settings(settings, base_url);
    finsecure_tui::run(state, Arc::new(client)).await?;

    Ok(())
}
