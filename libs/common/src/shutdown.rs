//! Graceful shutdown signal handling

use tracing::{info, warn};

/// Wait for Ctrl+C (all platforms) or SIGTERM (Unix)
///
/// Returns the name of the signal that was received.
///
/// ```ignore
/// axum::serve(listener, app)
///     .with_graceful_shutdown(async { common::wait_for_shutdown().await; })
///     .await?;
/// ```
pub async fn wait_for_shutdown() -> &'static str {
    #[cfg(unix)]
    let signal = {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => "SIGINT",
                    _ = term.recv() => "SIGTERM",
                }
            },
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}. Only Ctrl+C will stop the service", e);
                let _ = tokio::signal::ctrl_c().await;
                "SIGINT"
            },
        }
    };

    #[cfg(not(unix))]
    let signal = {
        let _ = tokio::signal::ctrl_c().await;
        "Ctrl+C"
    };

    info!("Received {}, shutting down", signal);
    signal
}
