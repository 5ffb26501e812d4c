//! Float32 decoding
//!
//! Decoding a hex word into an `f32` is delegated to a [`Float32Decoder`].
//! The helpers never decode floats themselves; they await whichever decoder
//! the caller injects (the native routine, a bridge, or a test double).

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use errors::HexResult;
use tracing::debug;

use crate::commands;

/// Asynchronous hex -> f32 capability
#[async_trait]
pub trait Float32Decoder: Send + Sync {
    /// Decode `hex` (4 bytes, base 16) into the float with that bit pattern
    async fn decode(&self, hex: &str) -> HexResult<f32>;
}

#[async_trait]
impl<D: Float32Decoder + ?Sized> Float32Decoder for Arc<D> {
    async fn decode(&self, hex: &str) -> HexResult<f32> {
        (**self).decode(hex).await
    }
}

/// Decode `hex` as an IEEE-754 single-precision float
///
/// Suspends until the decoder answers. Decoder failures are returned as-is;
/// there is no retry or timeout here.
pub async fn hex2float32<D>(decoder: &D, hex: &str) -> HexResult<f32>
where
    D: Float32Decoder + ?Sized,
{
    debug!("Decoding float32 from hex '{}'", hex);
    decoder.decode(hex).await
}

/// Decoder backed by the in-process native routine
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDecoder;

#[async_trait]
impl Float32Decoder for NativeDecoder {
    async fn decode(&self, hex: &str) -> HexResult<f32> {
        commands::hex_to_f32(hex)
    }
}

/// Decoder built from an async closure
///
/// ```
/// use hex_utils::{hex2float32, FnDecoder, HexError};
///
/// let decoder = FnDecoder::new(|_hex: String| async { Ok::<f32, HexError>(2.5) });
/// let value = futures::executor::block_on(hex2float32(&decoder, "40200000"));
/// assert_eq!(value.ok(), Some(2.5));
/// ```
pub struct FnDecoder<F> {
    func: F,
}

impl<F, Fut> FnDecoder<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = HexResult<f32>> + Send,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F, Fut> Float32Decoder for FnDecoder<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = HexResult<f32>> + Send,
{
    async fn decode(&self, hex: &str) -> HexResult<f32> {
        (self.func)(hex.to_owned()).await
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use errors::HexError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_native_decoder() {
        assert_eq!(hex2float32(&NativeDecoder, "3F800000").await.unwrap(), 1.0);
        assert_eq!(hex2float32(&NativeDecoder, "C0490FDB").await.unwrap(), -std::f32::consts::PI);
        assert_eq!(hex2float32(&NativeDecoder, "00000000").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_native_decoder_rejects_undecodable() {
        let err = hex2float32(&NativeDecoder, "not-hex").await.unwrap_err();
        assert!(matches!(err, HexError::InvalidHex { .. }));
    }

    #[tokio::test]
    async fn test_decoder_failure_propagates_unchanged() {
        let decoder = FnDecoder::new(|hex: String| async move {
            Err::<f32, _>(HexError::Bridge {
                command: "hex_to_f32".into(),
                message: format!("cannot decode {}", hex),
            })
        });

        match hex2float32(&decoder, "ABC").await {
            Err(HexError::Bridge { command, message }) => {
                assert_eq!(command, "hex_to_f32");
                assert_eq!(message, "cannot decode ABC");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decoder_called_once_per_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let decoder = FnDecoder::new(move |_hex: String| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<f32, HexError>(0.5)
            }
        });

        assert_eq!(hex2float32(&decoder, "3F000000").await.unwrap(), 0.5);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_shared_decoder_via_arc() {
        let decoder: Arc<dyn Float32Decoder> = Arc::new(NativeDecoder);
        assert_eq!(hex2float32(&decoder, "40490FDB").await.unwrap(), std::f32::consts::PI);
        assert_eq!(hex2float32(decoder.as_ref(), "3F800000").await.unwrap(), 1.0);
    }
}
