//! Bridge calls
//!
//! A bridge invokes a named command on the native host with JSON arguments
//! and returns its JSON result. [`crate::CommandRegistry`] answers calls
//! in-process; other transports (HTTP, IPC) implement the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use errors::{HexError, HexResult};
use serde_json::{json, Value};

use crate::commands::HEX_TO_F32;
use crate::float::Float32Decoder;

/// Named, asynchronous command invocation
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Invoke `command` with a JSON object of named arguments
    async fn invoke(&self, command: &str, args: Value) -> HexResult<Value>;
}

#[async_trait]
impl<B: Bridge + ?Sized> Bridge for Arc<B> {
    async fn invoke(&self, command: &str, args: Value) -> HexResult<Value> {
        (**self).invoke(command, args).await
    }
}

/// [`Float32Decoder`] that forwards to the host's `hex_to_f32` command
#[derive(Debug, Clone)]
pub struct BridgeDecoder<B> {
    bridge: B,
}

impl<B: Bridge> BridgeDecoder<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl<B: Bridge> Float32Decoder for BridgeDecoder<B> {
    async fn decode(&self, hex: &str) -> HexResult<f32> {
        let value = self.bridge.invoke(HEX_TO_F32, json!({ "hex": hex })).await?;
        float_from_json(&value)
    }
}

/// Read the number returned by `hex_to_f32`
///
/// JSON has no NaN or infinity, so non-finite results arrive as `null`;
/// they are read back as NaN.
fn float_from_json(value: &Value) -> HexResult<f32> {
    match value {
        Value::Number(number) => number.as_f64().map(|v| v as f32).ok_or_else(|| {
            HexError::Serialization(format!("'{}' returned {}", HEX_TO_F32, number))
        }),
        Value::Null => Ok(f32::NAN),
        other => Err(HexError::Serialization(format!(
            "'{}' returned a non-number: {}",
            HEX_TO_F32, other
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::float::hex2float32;
    use std::sync::Mutex;

    /// Records calls and answers with a fixed result
    struct RecordingBridge {
        calls: Mutex<Vec<(String, Value)>>,
        reply: fn() -> HexResult<Value>,
    }

    impl RecordingBridge {
        fn new(reply: fn() -> HexResult<Value>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait]
    impl Bridge for RecordingBridge {
        async fn invoke(&self, command: &str, args: Value) -> HexResult<Value> {
            self.calls.lock().unwrap().push((command.to_string(), args));
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn test_bridge_call_shape() {
        let bridge = Arc::new(RecordingBridge::new(|| Ok(json!(1.0))));
        let decoder = BridgeDecoder::new(bridge.clone());

        assert_eq!(hex2float32(&decoder, "3F800000").await.unwrap(), 1.0);

        let calls = bridge.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "hex_to_f32");
        assert_eq!(calls[0].1, json!({ "hex": "3F800000" }));
    }

    #[tokio::test]
    async fn test_bridge_failure_is_not_translated() {
        let decoder = BridgeDecoder::new(RecordingBridge::new(|| {
            Err(HexError::Bridge {
                command: "hex_to_f32".into(),
                message: "host went away".into(),
            })
        }));

        let err = hex2float32(&decoder, "3F800000").await.unwrap_err();
        assert_eq!(err.to_string(), "Bridge call 'hex_to_f32' failed: host went away");
    }

    #[tokio::test]
    async fn test_null_reads_as_nan() {
        let decoder = BridgeDecoder::new(RecordingBridge::new(|| Ok(Value::Null)));
        assert!(hex2float32(&decoder, "7FC00000").await.unwrap().is_nan());
    }

    #[tokio::test]
    async fn test_non_number_reply_is_rejected() {
        let decoder = BridgeDecoder::new(RecordingBridge::new(|| Ok(json!("1.0"))));
        let err = hex2float32(&decoder, "3F800000").await.unwrap_err();
        assert!(matches!(err, HexError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_decoder_over_in_process_registry() {
        let decoder = BridgeDecoder::new(CommandRegistry::with_builtin_commands());

        assert_eq!(hex2float32(&decoder, "3F800000").await.unwrap(), 1.0);
        assert_eq!(hex2float32(&decoder, "C2280000").await.unwrap(), -42.0);

        let err = hex2float32(&decoder, "3F8000001").await.unwrap_err();
        assert!(matches!(err, HexError::InvalidHex { .. }));
    }
}
