// ABOUTME: Container log decoding for Docker's multiplexed stream format.
// ABOUTME: Fail-soft framing parser plus the base64 transport wrapper.

mod demux;

pub use demux::{LogDecodeError, decode_multiplexed, decode_transport};
