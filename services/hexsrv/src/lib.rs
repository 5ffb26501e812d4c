//! hexsrv - native host for hex bridge commands
//!
//! Serves the built-in commands (`hex_to_f32`, `is_valid_f32`, `load_hex`)
//! over HTTP, and provides [`client::RemoteBridge`] for calling them from
//! another process.

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod routes;

pub use client::RemoteBridge;
pub use config::Config;
pub use routes::{create_routes, AppState};
