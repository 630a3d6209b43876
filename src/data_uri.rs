//! Data-URI helpers for image payloads
//!
//! Both the uploaded photo and the edited result travel as self-describing
//! `data:<mime>;base64,<payload>` strings. These helpers convert between
//! that form and raw bytes.

use crate::{Error, Result};
use base64::Engine as _;

/// Encode raw image bytes as a `data:` URI.
pub fn encode(mime_type: &str, data: &[u8]) -> String {
    encode_b64(
        mime_type,
        &base64::engine::general_purpose::STANDARD.encode(data),
    )
}

/// Wrap an already-base64 payload as a `data:` URI without re-encoding it.
pub fn encode_b64(mime_type: &str, payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, payload)
}

/// The transmissible payload of a data URI: everything after the first comma.
///
/// Strings without a comma pass through unchanged, so an already-stripped
/// payload is returned as-is.
pub fn payload(uri: &str) -> &str {
    match uri.split_once(',') {
        Some((_, payload)) => payload,
        None => uri,
    }
}

/// Decode a `data:<mime>;base64,<payload>` URI into its mime type and bytes.
pub fn decode(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| Error::Decode("input is not a data URI".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Decode("data URI has no payload separator".to_string()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::Decode(format!("unsupported data URI encoding: {}", header)))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::Decode(format!("invalid base64 payload: {}", e)))?;
    Ok((mime_type.to_string(), bytes))
}

/// File extension for the image mime types Gemini returns.
pub fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}
