//! Response definitions
//!
//! Interprets raw bytes received from the PMS server.

use bytes::Bytes;
use serde::Serialize;

use super::constants::UNDECODABLE_TEXT;

/// A response as received, with its hex and text renderings
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// Bytes exactly as read from the socket
    #[serde(skip)]
    pub raw: Bytes,

    /// Lowercase hex, two digits per byte, no separators
    pub hex: String,

    /// ASCII decoding, or a fixed sentinel when not ASCII
    pub text: String,
}

impl Response {
    /// Interpret raw response bytes
    ///
    /// Never fails: a non-ASCII payload degrades to the sentinel text.
    pub fn interpret(raw: Bytes) -> Self {
        let hex = hex::encode(&raw);
        let text = decode_ascii(&raw).unwrap_or_else(|| UNDECODABLE_TEXT.to_string());
        Self { raw, hex, text }
    }

    /// True if the text field holds a real decoding
    pub fn is_decodable(&self) -> bool {
        self.raw.is_ascii()
    }
}

/// Strict 7-bit ASCII decoding
fn decode_ascii(raw: &[u8]) -> Option<String> {
    if raw.is_ascii() {
        // ASCII is always valid UTF-8
        String::from_utf8(raw.to_vec()).ok()
    } else {
        None
    }
}
