//! API routes
//!
//! - `GET  /health`                 service status
//! - `GET  /api/commands`           registered bridge commands
//! - `POST /api/invoke/{command}`   invoke a bridge command with a JSON object body
//! - `GET  /api/inspect/{hex}`      every hex helper applied to one token

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use common::logging::http_request_logger;
use errors::{HexError, HexResult};
use hex_utils::{
    commands::is_valid_f32, hex2float32, hex2num, is_hex_ascii, is_hex_zeroed, is_valid_hex,
    parse_ascii, Bridge, BridgeDecoder, CommandOptions, CommandRegistry,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn, Level};

use crate::config::Config;

/// Shared application state
pub struct AppState {
    pub service_name: String,
    pub registry: Arc<CommandRegistry>,
    pub decoder: BridgeDecoder<Arc<CommandRegistry>>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let registry = Arc::new(CommandRegistry::with_options(CommandOptions {
            allow_file_access: config.bridge.allow_file_access,
        }));
        Self {
            service_name: config.service.name.clone(),
            decoder: BridgeDecoder::new(registry.clone()),
            registry,
            started_at: Utc::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_secs: i64,
}

/// Registered commands
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandsResponse {
    pub commands: Vec<String>,
}

/// Result of every hex helper for one token
///
/// `num` and `float32` are `null` when the value is NaN or cannot be decoded.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectResponse {
    pub hex: String,
    pub num: Option<f64>,
    pub zeroed: bool,
    pub ascii: bool,
    pub glyph: String,
    pub valid: bool,
    pub float32: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float32_error: Option<String>,
    pub valid_f32: bool,
}

/// Create API routes
pub fn create_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/commands", get(list_commands))
        .route("/api/invoke/{command}", post(invoke_command))
        .route("/api/inspect/{hex}", get(inspect_hex))
        .layer(from_fn(http_request_logger))
        .with_state(state)
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}

async fn list_commands(State(state): State<Arc<AppState>>) -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: state
            .registry
            .commands()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Invoke a bridge command
///
/// An empty body is treated as `{}`.
async fn invoke_command(
    State(state): State<Arc<AppState>>,
    Path(command): Path<String>,
    body: Bytes,
) -> HexResult<Json<Value>> {
    let args = parse_args(&command, &body)?;

    match state.registry.invoke(&command, args).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            let level = e.log_level();
            if level == Level::INFO {
                info!("Command '{}' rejected: {}", command, e);
            } else if level == Level::WARN {
                warn!("Command '{}' failed: {}", command, e);
            } else {
                error!("Command '{}' failed: {}", command, e);
            }
            Err(e)
        },
    }
}

fn parse_args(command: &str, body: &[u8]) -> HexResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    serde_json::from_slice(body).map_err(|e| HexError::invalid_arguments(command, e.to_string()))
}

async fn inspect_hex(
    State(state): State<Arc<AppState>>,
    Path(hex): Path<String>,
) -> Json<InspectResponse> {
    let num = hex2num(&hex);
    let (float32, float32_error) = match hex2float32(&state.decoder, &hex).await {
        Ok(value) => (Some(value).filter(|v| v.is_finite()), None),
        Err(e) => {
            debug!("float32 decode of '{}' failed: {}", hex, e);
            (None, Some(e.to_string()))
        },
    };

    Json(InspectResponse {
        num: Some(num).filter(|v| !v.is_nan()),
        zeroed: is_hex_zeroed(&hex),
        ascii: is_hex_ascii(&hex),
        glyph: parse_ascii(num),
        valid: is_valid_hex(&hex),
        float32,
        float32_error,
        valid_f32: is_valid_f32(&hex),
        hex,
    })
}
