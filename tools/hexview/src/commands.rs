//! Subcommand bodies that touch files or the bridge

use std::path::Path;

use anyhow::{Context, Result};
use hex_utils::{commands::load_hex, hex2float32, BridgeDecoder, Float32Decoder, NativeDecoder};
use hexsrv::RemoteBridge;
use tracing::debug;

use crate::render::dump_lines;

/// Read `path` and render it as dump rows of `width` bytes
pub async fn dump_file(path: &Path, width: usize) -> Result<Vec<String>> {
    let tokens = load_hex(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(dump_lines(&tokens, width))
}

/// In-process decoder, or one that goes through the hexsrv at `remote`
pub fn float_decoder(remote: Option<&str>) -> Box<dyn Float32Decoder> {
    match remote {
        Some(url) => {
            debug!("Decoding through {}", url);
            Box::new(BridgeDecoder::new(RemoteBridge::new(url)))
        },
        None => Box::new(NativeDecoder),
    }
}

/// Decode a float32 word, locally or through `remote`
pub async fn decode_float(hex: &str, remote: Option<&str>) -> Result<f32> {
    let decoder = float_decoder(remote);
    hex2float32(decoder.as_ref(), hex)
        .await
        .with_context(|| format!("Failed to decode '{}'", hex))
}
