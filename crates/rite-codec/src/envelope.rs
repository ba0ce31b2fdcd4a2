//! Envelope construction and recovery.
//!
//! One envelope carries exactly one pulse and one payload. The header line
//! holds the tagged fields, an intent line follows, and the payload block
//! closes the message. Everything a decoder needs is findable anywhere in
//! the text, so envelopes survive being pasted into larger messages.

use std::time::{SystemTime, UNIX_EPOCH};

use rite_core::{Entropy, Pulse, fnv1a64};

use crate::payload::{decode_payload, encode_payload};
use crate::scan::{PayloadBlock, RawFields, scan};
use crate::{CodecError, Result};

/// Opening marker of the payload block.
pub const PAYLOAD_START: &str = "<rite>";
/// Closing marker of the payload block.
pub const PAYLOAD_END: &str = "</rite>";
/// Resonance values are drawn from `[0, RESONANCE_RANGE)`.
pub const RESONANCE_RANGE: u32 = 100;

/// Content signature: the 16 uppercase hex characters of the payload
/// digest. A pure function of payload bytes - source, timing, and intent
/// never feed into it.
pub fn signature_of(payload: &[u8]) -> String {
    format!("{:016X}", fnv1a64(payload))
}

/// Builder for envelope text.
pub struct Envelope<'a> {
    source_id: &'a str,
    payload: &'a [u8],
    intent: &'a str,
    glyph: Option<&'a str>,
}

impl<'a> Envelope<'a> {
    pub fn new(source_id: &'a str, payload: &'a [u8]) -> Self {
        Self {
            source_id,
            payload,
            intent: "pulse",
            glyph: None,
        }
    }

    /// Set the free-text intent line.
    pub fn intent(mut self, intent: &'a str) -> Self {
        self.intent = intent;
        self
    }

    /// Attach a glyph decoration.
    pub fn glyph(mut self, glyph: &'a str) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Render with the current wall clock.
    pub fn render(&self, entropy: &mut dyn Entropy) -> String {
        self.render_at(wall_clock(), entropy)
    }

    /// Render with an explicit time, for deterministic output.
    pub fn render_at(&self, time: f64, entropy: &mut dyn Entropy) -> String {
        let signature = signature_of(self.payload);
        let resonance = entropy.below(RESONANCE_RANGE);

        let mut text = format!("pulse time={time} signature={signature} resonance={resonance}");
        if let Some(glyph) = self.glyph {
            text.push_str(&format!(" glyph={glyph}"));
        }
        if !self.source_id.is_empty() {
            text.push_str(&format!(" source={}", self.source_id));
        }
        text.push_str(&format!(
            "\n\nintent: {}\n\n{PAYLOAD_START}\n{}\n{PAYLOAD_END}\n",
            self.intent,
            encode_payload(self.payload),
        ));
        text
    }
}

/// A successfully decoded envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub pulse: Pulse,
    /// Recovered payload bytes, when the text carried a payload block.
    pub payload: Option<Vec<u8>>,
}

/// Decode an envelope: fields and payload.
pub fn decode(text: &str) -> Result<Decoded> {
    let fields = scan(text);
    let pulse = pulse_from(&fields)?;
    let payload = match fields.payload {
        PayloadBlock::Absent => None,
        PayloadBlock::Unterminated => return Err(CodecError::Truncated),
        PayloadBlock::Complete(block) => Some(decode_payload(block)?),
    };
    Ok(Decoded { pulse, payload })
}

/// Decode only the tagged fields, leaving the payload block untouched.
/// This is the cheap path batch extraction takes.
pub fn decode_fields(text: &str) -> Result<Pulse> {
    pulse_from(&scan(text))
}

fn pulse_from(fields: &RawFields<'_>) -> Result<Pulse> {
    let (Some(time), Some(signature)) = (fields.time, fields.signature) else {
        return Err(CodecError::NoPulse);
    };
    // The tag patterns guarantee both parses.
    let time: f64 = time.parse().map_err(|_| CodecError::NoPulse)?;

    Ok(Pulse {
        time,
        signature: signature.to_string(),
        resonance: fields.resonance.and_then(|r| r.parse().ok()),
        source_id: fields.source.unwrap_or_default().to_string(),
        glyph: fields.glyph.map(str::to_string),
    })
}

fn wall_clock() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}
