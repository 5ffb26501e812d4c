//! Service bootstrap utilities
//!
//! Startup banner and service metadata for the host service.

use tracing::info;

/// Service metadata for startup
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    /// Service name (e.g., "hexsrv")
    pub name: String,
    /// Service version from Cargo.toml
    pub version: String,
    /// Service description
    pub description: String,
    /// Default port
    pub default_port: u16,
}

impl ServiceInfo {
    /// Create new service info
    pub fn new(name: impl Into<String>, description: impl Into<String>, default_port: u16) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: description.into(),
            default_port,
        }
    }

    /// Override the version (binaries pass their own `CARGO_PKG_VERSION`)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Print the startup banner
pub fn print_startup_banner(service: &ServiceInfo) {
    let banner = r#"
 ██╗  ██╗███████╗██╗  ██╗
 ██║  ██║██╔════╝╚██╗██╔╝
 ███████║█████╗   ╚███╔╝
 ██╔══██║██╔══╝   ██╔██╗
 ██║  ██║███████╗██╔╝ ██╗
 ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝
    "#;

    info!("{}", banner);
    info!(" {} v{}", service.name.to_uppercase(), service.version);
    info!(" {}", service.description);
    info!(" Default Port: {}", service.default_port);
    info!("");
}
