//! Tests for envelope construction and recovery.

use indoc::indoc;
use rite_core::Entropy;

use super::{Decoded, Envelope, decode, decode_fields, signature_of};
use crate::CodecError;

/// Entropy that repeats one value forever.
struct FixedEntropy(u64);

impl Entropy for FixedEntropy {
    fn next_u64(&mut self) -> u64 {
        self.0
    }
}

#[test]
fn rendered_envelope_is_stable() {
    let text = Envelope::new("abc1234", b"ABC")
        .intent("carry three letters")
        .render_at(1700000000.5, &mut FixedEntropy(42));

    insta::assert_snapshot!(text, @r"
    pulse time=1700000000.5 signature=FA2FE219A07442EB resonance=42 source=abc1234

    intent: carry three letters

    <rite>
    QUJD
    </rite>
    ");
}

#[test]
fn roundtrip_recovers_payload_exactly() {
    let payload: Vec<u8> = (0..=255).collect();
    let text = Envelope::new("src", &payload).render_at(1.0, &mut FixedEntropy(7));

    let Decoded { pulse, payload: recovered } = decode(&text).unwrap();
    assert_eq!(recovered.as_deref(), Some(&payload[..]));
    assert_eq!(pulse.source_id, "src");
    assert_eq!(pulse.time, 1.0);
    assert_eq!(pulse.resonance, Some(7));
}

#[test]
fn signature_depends_only_on_payload() {
    let a = Envelope::new("one", b"ABC").render_at(10.0, &mut FixedEntropy(1));
    let b = Envelope::new("two", b"ABC").render_at(99.0, &mut FixedEntropy(88));

    let sig_a = decode(&a).unwrap().pulse.signature;
    let sig_b = decode(&b).unwrap().pulse.signature;
    assert_eq!(sig_a, sig_b);
    assert_eq!(sig_a, signature_of(b"ABC"));
}

#[test]
fn signature_is_sixteen_uppercase_hex() {
    for payload in [&b""[..], b"x", b"a longer payload"] {
        let sig = signature_of(payload);
        assert_eq!(sig.len(), 16);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}

#[test]
fn fields_decode_in_any_order() {
    let text = indoc! {"
        resonance=9 glyph=wave
        some prose in between
        signature=FA2FE219A07442EB and time=123.25
    "};
    let pulse = decode_fields(text).unwrap();
    assert_eq!(pulse.time, 123.25);
    assert_eq!(pulse.signature, "FA2FE219A07442EB");
    assert_eq!(pulse.resonance, Some(9));
    assert_eq!(pulse.glyph.as_deref(), Some("wave"));
    assert_eq!(pulse.source_id, "");
}

#[test]
fn missing_time_or_signature_is_no_pulse() {
    assert!(matches!(
        decode("signature=FA2FE219A07442EB"),
        Err(CodecError::NoPulse)
    ));
    assert!(matches!(decode("time=55"), Err(CodecError::NoPulse)));
    assert!(matches!(decode("nothing here"), Err(CodecError::NoPulse)));
}

#[test]
fn resonance_is_optional() {
    let pulse = decode_fields("time=5 signature=FA2FE219A07442EB").unwrap();
    assert_eq!(pulse.resonance, None);
}

#[test]
fn truncated_payload_block_is_an_error() {
    let text = "time=5 signature=FA2FE219A07442EB\n<rite>\nQUJD";
    assert!(matches!(decode(text), Err(CodecError::Truncated)));
}

#[test]
fn malformed_payload_block_is_an_error() {
    let text = "time=5 signature=FA2FE219A07442EB\n<rite>\n!!!\n</rite>";
    assert!(matches!(decode(text), Err(CodecError::Payload(_))));
}

#[test]
fn envelope_survives_being_quoted_in_a_larger_message() {
    let inner = Envelope::new("deep", b"ABC").render_at(2.5, &mut FixedEntropy(3));
    let outer = format!("Forwarded message follows.\n\n> {}\n\nregards", inner);

    let decoded = decode(&outer).unwrap();
    assert_eq!(decoded.pulse.time, 2.5);
    assert_eq!(decoded.payload.as_deref(), Some(&b"ABC"[..]));
}

#[test]
fn fields_path_ignores_a_broken_payload_block() {
    // decode_fields never touches the block, so a torn payload still
    // yields the pulse metadata.
    let text = "time=5 signature=FA2FE219A07442EB\n<rite>\nQUJD";
    let pulse = decode_fields(text).unwrap();
    assert_eq!(pulse.time, 5.0);
}
