// ABOUTME: Property tests for the multiplexed log stream decoder.
// ABOUTME: Well-formed frames always decode to the payload concatenation; tails never break it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use portside::logs::{decode_multiplexed, decode_transport};
use proptest::prelude::*;

fn encode_frames(payloads: &[String]) -> Vec<u8> {
    let mut buf = Vec::new();
    for (i, payload) in payloads.iter().enumerate() {
        let bytes = payload.as_bytes();
        // Alternate stream types; the decoder must not care.
        buf.push(if i % 2 == 0 { 1 } else { 2 });
        buf.extend([0, 0, 0]);
        buf.extend((bytes.len() as u32).to_be_bytes());
        buf.extend_from_slice(bytes);
    }
    buf
}

proptest! {
    #[test]
    fn frames_decode_to_payload_concatenation(
        payloads in prop::collection::vec(".{0,64}", 0..8)
    ) {
        let buf = encode_frames(&payloads);
        prop_assert_eq!(decode_multiplexed(&buf), payloads.concat());
    }

    #[test]
    fn short_trailing_garbage_is_ignored(
        payloads in prop::collection::vec(".{0,32}", 0..5),
        garbage in prop::collection::vec(any::<u8>(), 0..8)
    ) {
        let mut buf = encode_frames(&payloads);
        buf.extend(&garbage);
        // Fewer than 8 trailing bytes can never form a header.
        prop_assert_eq!(decode_multiplexed(&buf), payloads.concat());
    }

    #[test]
    fn overrunning_final_frame_yields_the_decoded_prefix(
        payloads in prop::collection::vec(".{0,32}", 0..5),
        declared in 1u32..10_000,
        provided in prop::collection::vec(any::<u8>(), 0..16)
    ) {
        prop_assume!((declared as usize) > provided.len());
        let mut buf = encode_frames(&payloads);
        buf.push(1);
        buf.extend([0, 0, 0]);
        buf.extend(declared.to_be_bytes());
        buf.extend(&provided);
        prop_assert_eq!(decode_multiplexed(&buf), payloads.concat());
    }

    #[test]
    fn base64_transport_round_trips(
        payloads in prop::collection::vec(".{0,32}", 0..5)
    ) {
        let encoded = BASE64.encode(encode_frames(&payloads));
        prop_assert_eq!(decode_transport(&encoded).unwrap(), payloads.concat());
    }
}
