//! Logging setup for the host service and the CLI
//!
//! Console output uses a compact `timestamp [LEVEL] message` format. The
//! service can additionally write a daily-rolling file, plain or JSON.
//! HTTP access lines go to the `api_access` target.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Target used for HTTP access log lines
pub const API_ACCESS_TARGET: &str = "api_access";

/// Bracketed level label: `[INFO]`, `[WARN]`, ...
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Event formatter producing `timestamp [LEVEL] message`
///
/// Example output: `2026-10-16T08:15:02.114203Z [INFO] Listening on 127.0.0.1:6010`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m",
                Level::DEBUG => "\x1b[34m",
                Level::INFO => "\x1b[32m",
                Level::WARN => "\x1b[33m",
                Level::ERROR => "\x1b[31m",
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

// Keeps the non-blocking file writer alive for the process lifetime
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Service name, used for the default filter and the log file name
    pub service_name: String,
    /// Directory for the daily-rolling log file; `None` logs to console only
    pub log_dir: Option<PathBuf>,
    /// Default level when `RUST_LOG` is not set
    pub console_level: Level,
    /// Write the file log as JSON lines
    pub enable_json: bool,
    /// Colored console output
    pub enable_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "hexsrv".to_string(),
            log_dir: None,
            console_level: Level::INFO,
            enable_json: false,
            enable_ansi: true,
        }
    }
}

impl LogConfig {
    /// Console-only configuration for `service_name` at `level`
    pub fn console(service_name: impl Into<String>, level: &str) -> Self {
        Self {
            service_name: service_name.into(),
            console_level: parse_level(level),
            ..Default::default()
        }
    }

    /// Filter directives used when `RUST_LOG` is not set
    pub fn default_directives(&self) -> String {
        format!(
            "{},{}={},{}=info",
            self.console_level.as_str().to_lowercase(),
            self.service_name.replace('-', "_"),
            self.console_level.as_str().to_lowercase(),
            API_ACCESS_TARGET
        )
    }
}

/// Parse a level name; unknown names fall back to INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize logging system with configuration
///
/// `RUST_LOG` takes precedence over [`LogConfig::console_level`].
pub fn init_with_config(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(config.default_directives())?,
    };

    let console_layer = fmt::layer()
        .with_ansi(config.enable_ansi)
        .event_format(BracketedLevelFormat)
        .boxed();

    let file_layer = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender =
                tracing_appender::rolling::daily(dir, format!("{}.log", config.service_name));
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            if FILE_GUARD.set(guard).is_err() {
                return Err("logging already initialized".into());
            }

            let layer = if config.enable_json {
                fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .boxed()
            } else {
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .event_format(BracketedLevelFormat)
                    .boxed()
            };
            Some(layer)
        },
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Console-only logging at `level` (CLI tools)
pub fn init(service_name: &str, level: &str) -> Result<(), Box<dyn std::error::Error>> {
    init_with_config(&LogConfig::console(service_name, level))
}

/// HTTP request logging middleware
///
/// Logs method, URI, status and latency on the `api_access` target.
/// Server errors are logged at WARN.
///
/// ```ignore
/// let app = Router::new()
///     // ... routes ...
///     .layer(axum::middleware::from_fn(common::logging::http_request_logger));
/// ```
#[cfg(feature = "axum")]
pub async fn http_request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    use std::time::Instant;

    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    if status.is_server_error() {
        tracing::warn!(target: "api_access", "{} {} -> {} ({:.2}ms)", method, uri, status.as_u16(), elapsed_ms);
    } else {
        tracing::info!(target: "api_access", "{} {} -> {} ({:.2}ms)", method, uri, status.as_u16(), elapsed_ms);
    }

    response
}
