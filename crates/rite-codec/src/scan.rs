//! Tag scanner for envelope text.
//!
//! Fields are `key=value` words that may appear anywhere, in any order;
//! the payload block is framed by fixed markers. Everything that is not a
//! recognized tag or marker is noise and skipped. Modeled as a lexer
//! rather than ad hoc pattern matching so the "missing field ⇒ absent"
//! semantics fall out of the token stream.

use logos::Logos;

/// Recognized tags and markers. Anything else lexes as an error and is
/// skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `time=<seconds>`, integer or decimal.
    #[regex(r"time=[0-9]+(\.[0-9]+)?")]
    Time,

    /// `signature=<16 uppercase hex chars>`.
    #[regex(r"signature=[0-9A-F]{16}")]
    Signature,

    /// `resonance=<int>`.
    #[regex(r"resonance=[0-9]+")]
    Resonance,

    /// `glyph=<word>`.
    #[regex(r"glyph=[^ \t\r\n]+")]
    Glyph,

    /// `source=<word>`.
    #[regex(r"source=[^ \t\r\n]+")]
    Source,

    #[token("<rite>")]
    PayloadStart,

    #[token("</rite>")]
    PayloadEnd,
}

/// The payload block, as found (or not) in the text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PayloadBlock<'a> {
    /// No markers present.
    #[default]
    Absent,
    /// Text between the first marker pair, still transport-encoded.
    Complete(&'a str),
    /// An opening marker with no close.
    Unterminated,
}

/// Raw field values sliced out of the scanned text.
///
/// Each field keeps its first occurrence; later repeats are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawFields<'a> {
    pub time: Option<&'a str>,
    pub signature: Option<&'a str>,
    pub resonance: Option<&'a str>,
    pub glyph: Option<&'a str>,
    pub source: Option<&'a str>,
    pub payload: PayloadBlock<'a>,
}

impl RawFields<'_> {
    /// True when not a single tag or marker was found.
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.signature.is_none()
            && self.resonance.is_none()
            && self.glyph.is_none()
            && self.source.is_none()
            && self.payload == PayloadBlock::Absent
    }
}

/// Scan free-form text for tagged fields and the payload block.
pub fn scan(text: &str) -> RawFields<'_> {
    let mut fields = RawFields::default();
    let mut lexer = TagKind::lexer(text);
    let mut block_start: Option<usize> = None;

    while let Some(result) = lexer.next() {
        let Ok(kind) = result else {
            continue; // noise
        };
        let span = lexer.span();

        match kind {
            TagKind::Time => set_first(&mut fields.time, value(text, span)),
            TagKind::Signature => set_first(&mut fields.signature, value(text, span)),
            TagKind::Resonance => set_first(&mut fields.resonance, value(text, span)),
            TagKind::Glyph => set_first(&mut fields.glyph, value(text, span)),
            TagKind::Source => set_first(&mut fields.source, value(text, span)),
            TagKind::PayloadStart => {
                if block_start.is_none() && fields.payload == PayloadBlock::Absent {
                    block_start = Some(span.end);
                }
            }
            TagKind::PayloadEnd => {
                if let Some(start) = block_start.take() {
                    if fields.payload == PayloadBlock::Absent {
                        fields.payload = PayloadBlock::Complete(&text[start..span.start]);
                    }
                }
            }
        }
    }

    if block_start.is_some() {
        fields.payload = PayloadBlock::Unterminated;
    }

    fields
}

/// Slice the value half of a `key=value` tag.
fn value(text: &str, span: std::ops::Range<usize>) -> &str {
    let tag = &text[span];
    let eq = tag.find('=').expect("tag pattern contains '='");
    &tag[eq + 1..]
}

fn set_first<'a>(slot: &mut Option<&'a str>, value: &'a str) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_found_anywhere_in_any_order() {
        let fields = scan("noise resonance=42 more noise\ntime=1700000000.5 x signature=00FFAA0011223344");
        assert_eq!(fields.time, Some("1700000000.5"));
        assert_eq!(fields.signature, Some("00FFAA0011223344"));
        assert_eq!(fields.resonance, Some("42"));
        assert_eq!(fields.payload, PayloadBlock::Absent);
    }

    #[test]
    fn first_occurrence_wins() {
        let fields = scan("time=1 time=2");
        assert_eq!(fields.time, Some("1"));
    }

    #[test]
    fn lowercase_or_short_signature_is_noise() {
        assert_eq!(scan("signature=00ffaa0011223344").signature, None);
        assert_eq!(scan("signature=00FF").signature, None);
    }

    #[test]
    fn embedded_tags_inside_words_still_match() {
        // The scanner recovers mid-word, like the tag matching it replaces.
        let fields = scan("overtime=33");
        assert_eq!(fields.time, Some("33"));
    }

    #[test]
    fn payload_block_is_sliced_between_markers() {
        let fields = scan("time=1 <rite>\nQUJD\n</rite> tail");
        assert_eq!(fields.payload, PayloadBlock::Complete("\nQUJD\n"));
    }

    #[test]
    fn unterminated_block_is_flagged() {
        let fields = scan("<rite>\nQUJD");
        assert_eq!(fields.payload, PayloadBlock::Unterminated);
    }

    #[test]
    fn plain_text_scans_empty() {
        assert!(scan("just an ordinary commit message").is_empty());
        assert!(scan("").is_empty());
    }
}
