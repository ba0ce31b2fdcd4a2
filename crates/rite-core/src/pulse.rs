//! The pulse: one recovered unit of heartbeat metadata.

use serde::{Deserialize, Serialize};

/// One recovered heartbeat.
///
/// A pulse only ever comes out of a successfully decoded envelope; it is
/// immutable after construction and carries no payload of its own (payload
/// recovery stays with the codec, on demand).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    /// Wall-clock seconds at creation.
    pub time: f64,
    /// First 16 uppercase hex characters of the payload digest.
    pub signature: String,
    /// Auxiliary scalar attached at creation. Not load-bearing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resonance: Option<u32>,
    /// Identifier of the text the pulse was recovered from (commit hash,
    /// file name, ...). Empty when the envelope carried none.
    pub source_id: String,
    /// Optional glyph decoration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

impl Pulse {
    /// Seconds elapsed between this pulse and `now`.
    pub fn age(&self, now: f64) -> f64 {
        now - self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pulse {
        Pulse {
            time: 1700000000.5,
            signature: "3C9D0A1B44E2F001".to_string(),
            resonance: Some(42),
            source_id: "abc1234".to_string(),
            glyph: None,
        }
    }

    #[test]
    fn age_is_relative_to_now() {
        let p = sample();
        assert_eq!(p.age(1700000010.5), 10.0);
    }

    #[test]
    fn json_omits_absent_fields() {
        let mut p = sample();
        p.resonance = None;
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("resonance"));
        assert!(!json.contains("glyph"));
    }

    #[test]
    fn json_roundtrip() {
        let p = sample();
        let json = serde_json::to_string(&p).unwrap();
        let back: Pulse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
