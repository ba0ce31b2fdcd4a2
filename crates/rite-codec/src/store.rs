//! Best-effort batch extraction.
//!
//! The persistence collaborator (usually `git log`) hands over raw texts in
//! temporal order with a parallel run of identifiers. Extraction decodes
//! only the tagged fields - payload recovery stays on demand through
//! [`decode`](crate::decode) - and anything unparsable is skipped, never
//! fatal. Output preserves input order.

use rite_core::Pulse;

use crate::envelope::decode_fields;

/// Extract every parseable pulse from a batch of raw texts.
///
/// `source_ids` runs parallel to `texts` (the shorter of the two bounds the
/// scan) and overrides whatever `source=` tag the envelope itself carried:
/// the store knows where the text actually came from.
pub fn extract_all<T, S>(texts: &[T], source_ids: &[S]) -> Vec<Pulse>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    texts
        .iter()
        .zip(source_ids)
        .filter_map(|(text, id)| {
            let mut pulse = decode_fields(text.as_ref()).ok()?;
            pulse.source_id = id.as_ref().to_string();
            Some(pulse)
        })
        .collect()
}
