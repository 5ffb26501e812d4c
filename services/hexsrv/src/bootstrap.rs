//! Service bootstrap
//!
//! Command-line arguments, logging setup and bind address resolution.

use std::path::PathBuf;

use clap::Parser;
use common::logging::{parse_level, LogConfig};
use common::service_bootstrap::ServiceInfo;
use errors::{HexError, HexResult};
use tracing::info;

use crate::config::Config;

/// Command-line arguments for hexsrv
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hexsrv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Native host for hex bridge commands",
    long_about = None
)]
pub struct Args {
    /// Configuration file
    #[arg(short = 'c', long, env = "HEXSRV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short = 'l', long)]
    pub log_level: Option<String>,

    /// Bind address for API server (host:port)
    #[arg(short = 'b', long)]
    pub bind_address: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Validation mode - only validate configuration without starting service
    #[arg(long)]
    pub validate: bool,
}

/// Logger settings from configuration, with the CLI level taking precedence
///
/// Files go to `<logging.dir>/<service name>/<service name>.log.<date>`.
pub fn log_config(args: &Args, config: &Config, service_info: &ServiceInfo) -> LogConfig {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());

    LogConfig {
        service_name: service_info.name.clone(),
        log_dir: config
            .logging
            .dir
            .as_ref()
            .map(|dir| PathBuf::from(dir).join(&service_info.name)),
        console_level: parse_level(level),
        enable_json: config.logging.enable_json,
        enable_ansi: !args.no_color,
    }
}

/// Initialize logging
pub fn initialize_logging(
    args: &Args,
    config: &Config,
    service_info: &ServiceInfo,
) -> HexResult<()> {
    common::logging::init_with_config(&log_config(args, config, service_info))
        .map_err(|e| HexError::Configuration(format!("Failed to init logging: {}", e)))
}

/// Determine bind address
/// Priority: CLI > Config
pub fn determine_bind_address(cli_arg: Option<&str>, config: &Config) -> String {
    match cli_arg {
        Some(addr) => {
            info!("Using bind address from command line: {}", addr);
            addr.to_string()
        },
        None => config.bind_address(),
    }
}
