//! Native host commands
//!
//! The routines the front-end reaches through the bridge, plus the
//! [`CommandRegistry`] that dispatches bridge calls to them by name.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use errors::{HexError, HexResult};
use futures::future::{BoxFuture, FutureExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::bridge::Bridge;

/// Command name: hex word -> f32
pub const HEX_TO_F32: &str = "hex_to_f32";
/// Command name: hex word -> "is a finite f32"
pub const IS_VALID_F32: &str = "is_valid_f32";
/// Command name: file -> one hex string per byte
pub const LOAD_HEX: &str = "load_hex";

/// Decode a base-16 u32 bit pattern as an `f32`
pub fn hex_to_f32(hex: &str) -> HexResult<f32> {
    let bits = u32::from_str_radix(hex, 16)
        .map_err(|e| HexError::invalid_hex(hex, format!("not a 4-byte hex word: {}", e)))?;
    Ok(f32::from_bits(bits))
}

/// True when `hex` decodes to a finite `f32`
pub fn is_valid_f32(hex: &str) -> bool {
    hex_to_f32(hex).is_ok_and(f32::is_finite)
}

/// Read a file and render each byte as two upper-case hex digits
pub async fn load_hex(path: impl AsRef<Path>) -> HexResult<Vec<String>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        warn!("Failed to read {}: {}", path.display(), e);
        e
    })?;
    debug!("Loaded {} bytes from {}", bytes.len(), path.display());

    Ok(bytes.iter().map(|byte| format!("{:02X}", byte)).collect())
}

#[derive(Debug, Deserialize)]
struct HexArgs {
    hex: String,
}

#[derive(Debug, Deserialize)]
struct PathArgs {
    path: String,
}

/// Options for the built-in command set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOptions {
    /// Register `load_hex` (reads arbitrary paths on the host)
    pub allow_file_access: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            allow_file_access: true,
        }
    }
}

type CommandHandler = Arc<dyn Fn(Value) -> BoxFuture<'static, HexResult<Value>> + Send + Sync>;

/// Name -> handler table answering bridge calls in-process
///
/// Arguments arrive as a JSON object and are deserialized into the
/// handler's argument type; results are serialized back to JSON.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command
    pub fn with_builtin_commands() -> Self {
        Self::with_options(CommandOptions::default())
    }

    /// Registry with the built-in commands allowed by `options`
    pub fn with_options(options: CommandOptions) -> Self {
        let mut registry = Self::new();
        registry
            .register(HEX_TO_F32, |args: HexArgs| async move {
                hex_to_f32(&args.hex)
            })
            .register(IS_VALID_F32, |args: HexArgs| async move {
                Ok(is_valid_f32(&args.hex))
            });

        if options.allow_file_access {
            registry.register(LOAD_HEX, |args: PathArgs| async move {
                load_hex(&args.path).await
            });
        }
        registry
    }

    /// Register (or replace) a command
    pub fn register<A, R, F, Fut>(&mut self, name: &str, handler: F) -> &mut Self
    where
        A: DeserializeOwned + Send + 'static,
        R: Serialize + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HexResult<R>> + Send + 'static,
    {
        let command = name.to_string();
        let handler = Arc::new(handler);
        let wrapped: CommandHandler = Arc::new(move |args: Value| {
            let command = command.clone();
            let handler = handler.clone();
            async move {
                let args: A = serde_json::from_value(args)
                    .map_err(|e| HexError::invalid_arguments(&command, e.to_string()))?;
                let result = handler(args).await?;
                Ok(serde_json::to_value(result)?)
            }
            .boxed()
        });

        if self.handlers.insert(name.to_string(), wrapped).is_some() {
            debug!("Replaced handler for command '{}'", name);
        }
        self
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands())
            .finish()
    }
}

#[async_trait]
impl Bridge for CommandRegistry {
    async fn invoke(&self, command: &str, args: Value) -> HexResult<Value> {
        let handler = self
            .handlers
            .get(command)
            .cloned()
            .ok_or_else(|| HexError::UnknownCommand(command.to_string()))?;

        debug!("Invoking command '{}'", command);
        handler(args).await
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tracing_test::traced_test;

    #[test]
    fn test_hex_to_f32() {
        assert_eq!(hex_to_f32("3F800000").unwrap(), 1.0);
        assert_eq!(hex_to_f32("3f800000").unwrap(), 1.0);
        assert_eq!(hex_to_f32("BF800000").unwrap(), -1.0);
        assert_eq!(hex_to_f32("7F800000").unwrap(), f32::INFINITY);
        assert!(hex_to_f32("7FC00000").unwrap().is_nan());
    }

    #[test]
    fn test_hex_to_f32_rejects_non_words() {
        assert!(matches!(
            hex_to_f32("3F80000000"),
            Err(HexError::InvalidHex { .. })
        ));
        assert!(hex_to_f32("").is_err());
        assert!(hex_to_f32("0x3F800000").is_err());
        assert!(hex_to_f32("zz").is_err());
    }

    #[test]
    fn test_is_valid_f32() {
        assert!(is_valid_f32("3F800000"));
        assert!(is_valid_f32("00000000"));
        assert!(!is_valid_f32("7F800000"));
        assert!(!is_valid_f32("7FC00000"));
        assert!(!is_valid_f32("not hex"));
    }

    #[tokio::test]
    async fn test_load_hex() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x48, 0x69, 0x00, 0xFF, 0x0A]).unwrap();

        let bytes = load_hex(file.path()).await.unwrap();
        assert_eq!(bytes, vec!["48", "69", "00", "FF", "0A"]);
    }

    #[tokio::test]
    async fn test_load_hex_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_hex(dir.path().join("missing.bin")).await.unwrap_err();
        assert!(matches!(err, HexError::Io(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_builtin_commands() {
        let registry = CommandRegistry::with_builtin_commands();
        assert_eq!(registry.commands(), vec![HEX_TO_F32, IS_VALID_F32, LOAD_HEX]);

        let restricted = CommandRegistry::with_options(CommandOptions {
            allow_file_access: false,
        });
        assert!(!restricted.contains(LOAD_HEX));
        assert!(restricted.contains(HEX_TO_F32));
    }

    #[tokio::test]
    async fn test_invoke_hex_to_f32() {
        let registry = CommandRegistry::with_builtin_commands();
        let value = registry
            .invoke(HEX_TO_F32, json!({ "hex": "3F800000" }))
            .await
            .unwrap();
        assert_eq!(value, json!(1.0));

        let value = registry
            .invoke(IS_VALID_F32, json!({ "hex": "7F800000" }))
            .await
            .unwrap();
        assert_eq!(value, json!(false));
    }

    #[tokio::test]
    async fn test_invoke_non_finite_becomes_null() {
        let registry = CommandRegistry::with_builtin_commands();
        let value = registry
            .invoke(HEX_TO_F32, json!({ "hex": "7FC00000" }))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_invoke_errors() {
        let registry = CommandRegistry::with_builtin_commands();

        let err = registry.invoke("greet", json!({})).await.unwrap_err();
        assert!(matches!(err, HexError::UnknownCommand(ref name) if name == "greet"));

        let err = registry
            .invoke(HEX_TO_F32, json!({ "value": "3F800000" }))
            .await
            .unwrap_err();
        assert!(matches!(err, HexError::InvalidArguments { ref command, .. } if command == HEX_TO_F32));

        let err = registry
            .invoke(HEX_TO_F32, json!({ "hex": "xyz" }))
            .await
            .unwrap_err();
        assert!(matches!(err, HexError::InvalidHex { .. }));
    }

    #[traced_test]
    #[test]
    fn test_register_replaces_existing_command() {
        let mut registry = CommandRegistry::with_builtin_commands();
        registry.register(HEX_TO_F32, |_args: HexArgs| async move { Ok(0.0f32) });

        assert_eq!(registry.commands().len(), 3);
        assert!(logs_contain("Replaced handler for command 'hex_to_f32'"));
    }

    #[tokio::test]
    async fn test_register_custom_command() {
        #[derive(Deserialize)]
        struct Args {
            count: usize,
        }

        let mut registry = CommandRegistry::new();
        registry.register("zeros", |args: Args| async move {
            Ok(vec!["00"; args.count])
        });

        let value = registry.invoke("zeros", json!({ "count": 2 })).await.unwrap();
        assert_eq!(value, json!(["00", "00"]));
    }
}
