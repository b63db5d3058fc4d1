// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yotouch_ai_service::{api::start_server, cli::Cli, version};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before clap reads env fallbacks
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting {}", version::get_version_string());
    info!(
        "Upload limit: {} bytes, bind: {}:{}",
        config.max_upload_bytes, config.host, config.port
    );

    start_server(config).await
}
