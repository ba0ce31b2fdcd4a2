//! Byte ↔ text transport encoding for payload blocks.
//!
//! Standard base64, with the URL-safe alphabet substitution applied
//! afterward (`+` → `-`, `/` → `_`) so the block survives destinations
//! that treat those characters specially. Decoding reverses the
//! substitution and ignores embedded whitespace, so re-wrapped blocks
//! still recover.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode payload bytes into a text-safe block.
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD
        .encode(bytes)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// Recover payload bytes from a text-safe block.
pub fn decode_payload(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let restored: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    STANDARD.decode(restored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_text() {
        let payload = b"RESONATE 432\nPULSE\n";
        assert_eq!(decode_payload(&encode_payload(payload)).unwrap(), payload);
    }

    #[test]
    fn roundtrip_every_byte_value() {
        let payload: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_payload(&encode_payload(&payload)).unwrap(), payload);
    }

    #[test]
    fn output_avoids_plus_and_slash() {
        // 0xFB 0xFF encodes to "+/" under the standard alphabet.
        let text = encode_payload(&[0xFB, 0xFF, 0xFE]);
        assert!(!text.contains('+'));
        assert!(!text.contains('/'));
        assert!(text.contains('-') || text.contains('_'));
    }

    #[test]
    fn embedded_whitespace_is_tolerated() {
        let text = encode_payload(b"some longer payload to wrap across lines");
        let wrapped: String = text
            .chars()
            .enumerate()
            .flat_map(|(i, c)| {
                if i > 0 && i % 10 == 0 {
                    vec!['\n', c]
                } else {
                    vec![c]
                }
            })
            .collect();
        assert_eq!(
            decode_payload(&wrapped).unwrap(),
            b"some longer payload to wrap across lines"
        );
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(decode_payload("not*base64*at*all").is_err());
    }
}
