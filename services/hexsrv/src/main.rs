//! Hex bridge host service

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use common::service_bootstrap::ServiceInfo;
use errors::{HexError, HexResult};
use hexsrv::{
    bootstrap::{self, Args},
    config::{Config, DEFAULT_PORT},
    create_routes, AppState,
};

#[tokio::main]
async fn main() -> HexResult<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let service_info = ServiceInfo::new(
        config.service.name.clone(),
        "Native host for hex bridge commands",
        DEFAULT_PORT,
    )
    .with_version(env!("CARGO_PKG_VERSION"));

    bootstrap::initialize_logging(&args, &config, &service_info)?;
    if !args.no_color {
        common::service_bootstrap::print_startup_banner(&service_info);
    }

    config.validate()?;

    // Validation mode: validate and exit
    if args.validate {
        info!("Configuration is valid");
        return Ok(());
    }

    let state = Arc::new(AppState::new(&config));
    info!("Registered commands: {:?}", state.registry.commands());
    let app = create_routes(state);

    let bind_addr = bootstrap::determine_bind_address(args.bind_address.as_deref(), &config);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| HexError::Configuration(format!("Failed to bind {}: {}", bind_addr, e)))?;
    info!("API server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            common::wait_for_shutdown().await;
        })
        .await?;

    info!("{} stopped", config.service.name);
    Ok(())
}
