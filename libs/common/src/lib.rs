//! Shared service plumbing
//!
//! Provides functions used by the host service and the CLI:
//! - logging initialization and HTTP access logging
//! - service bootstrap (startup banner, service metadata)
//! - graceful shutdown signal handling

pub mod logging;
pub mod service_bootstrap;
pub mod shutdown;

pub use service_bootstrap::ServiceInfo;
pub use shutdown::wait_for_shutdown;

// Re-export common dependencies
pub use tokio;
pub use tracing;
