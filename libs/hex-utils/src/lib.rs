//! Hex utilities
//!
//! Small helpers behind the hex view:
//! - byte classification and conversion (`hex2num`, `is_hex_zeroed`, `is_hex_ascii`, `is_valid_hex`)
//! - ASCII column glyphs (`parse_ascii`)
//! - float32 decoding through an injected decoder (`hex2float32`)
//!
//! plus the native host side: the commands the front-end calls through the
//! bridge (`hex_to_f32`, `is_valid_f32`, `load_hex`) and an in-process
//! registry that dispatches them.

pub mod ascii;
pub mod bridge;
pub mod commands;
pub mod float;
pub mod hex;
pub mod radix;

pub use ascii::{parse_ascii, PLACEHOLDER_GLYPH};
pub use bridge::{Bridge, BridgeDecoder};
pub use commands::{CommandOptions, CommandRegistry};
pub use float::{hex2float32, Float32Decoder, FnDecoder, NativeDecoder};
pub use hex::{hex2num, is_hex_ascii, is_hex_zeroed, is_valid_hex};

pub use errors::{HexError, HexResult};
