// ABOUTME: Decoder for Docker's multiplexed log stream framing.
// ABOUTME: 8-byte headers (stream type + padding + big-endian length), payloads back-to-back.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Stream-type byte, three reserved bytes, then a big-endian u32 payload length.
const FRAME_HEADER_LEN: usize = 8;

/// Errors from the base64 transport wrapper.
///
/// Framing problems are never an error: logs are best-effort display data,
/// so a malformed stream degrades to the decodable prefix.
#[derive(Debug, thiserror::Error)]
pub enum LogDecodeError {
    #[error("invalid base64 log transport: {0}")]
    Transport(#[from] base64::DecodeError),
}

/// Decode a multiplexed log byte stream into one concatenated text string.
///
/// The stream-type byte is not interpreted; stdout and stderr merge into a
/// single stream in frame order. Truncated trailing bytes (a partial header,
/// or a frame whose declared length overruns the buffer) are silently
/// dropped and everything decoded up to that point is returned.
pub fn decode_multiplexed(buf: &[u8]) -> String {
    let mut out = String::new();
    let mut cursor = 0usize;

    while buf.len() - cursor >= FRAME_HEADER_LEN {
        // Skip the stream-type byte and three reserved bytes.
        let len = u32::from_be_bytes([
            buf[cursor + 4],
            buf[cursor + 5],
            buf[cursor + 6],
            buf[cursor + 7],
        ]) as usize;
        cursor += FRAME_HEADER_LEN;

        if buf.len() - cursor < len {
            tracing::debug!(
                declared = len,
                remaining = buf.len() - cursor,
                "truncated log frame, returning decoded prefix"
            );
            break;
        }

        out.push_str(&String::from_utf8_lossy(&buf[cursor..cursor + len]));
        cursor += len;
    }

    out
}

/// Decode a base64-wrapped multiplexed log stream, as delivered when the log
/// endpoint body travels over a JSON transport.
pub fn decode_transport(encoded: &str) -> Result<String, LogDecodeError> {
    let bytes = BASE64.decode(encoded.trim())?;
    Ok(decode_multiplexed(&bytes))
}
