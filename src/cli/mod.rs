// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigError, ServiceConfig};

/// YoTouch AI Service
#[derive(Parser, Debug, Default)]
#[command(name = "yotouch-ai-service")]
#[command(version)]
#[command(about = "Face embedding and liveness detection HTTP service", long_about = None)]
pub struct Cli {
    /// TOML config file, overridden by the flags below
    #[arg(long, env = "AI_SERVICE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(long, env = "AI_SERVICE_HOST")]
    pub host: Option<String>,

    /// Listen port
    #[arg(long, env = "AI_SERVICE_PORT")]
    pub port: Option<u16>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "AI_SERVICE_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: Option<usize>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "debug")
    #[arg(long, env = "AI_SERVICE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Builds the effective config: defaults < TOML file < env / flags.
    pub fn resolve(&self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_toml_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(max_upload_bytes) = self.max_upload_bytes {
            config.max_upload_bytes = max_upload_bytes;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
