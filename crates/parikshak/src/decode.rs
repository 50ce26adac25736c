//! The decoder loop: walks a byte stream produced by `slbc-lekhya`'s
//! encoder (or read back out of a `.slbc` chunk) and reconstructs the
//! [`StreamEvent`] sequence.

use slbc_types::{uleb128, InvariantError, MetaEnvelope, SpanError, StreamEvent};
use slbc_varna::classify::{bhasha, is_bhasha_control, is_lipi_control, lipi};

use crate::state::DecoderState;

/// Decodes `bytes` into a flat event stream. Byte offsets in errors are
/// relative to the start of `bytes`.
pub fn decode(bytes: &[u8]) -> Result<Vec<StreamEvent>, slbc_types::SlbcError> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let byte = bytes[offset];
        match byte {
            b if b == bhasha::PADA_START => {
                let (events, consumed) = decode_pada(bytes, offset)?;
                out.extend(events);
                offset += consumed;
            }
            b if b == bhasha::META_START => {
                let (event, consumed) = decode_meta(bytes, offset)?;
                out.push(event);
                offset += consumed;
            }
            b if b == bhasha::PHON_START => {
                out.push(StreamEvent::PhonStart);
                offset += 1;
            }
            b if b == bhasha::PHON_END => {
                out.push(StreamEvent::PhonEnd);
                offset += 1;
            }
            b if b == bhasha::ANU => {
                out.push(StreamEvent::Anu);
                offset += 1;
            }
            b if b == bhasha::SANKHYA_START => {
                let (event, consumed) = decode_sankhya_span(bytes, offset)?;
                out.push(event);
                offset += consumed;
            }
            b if b == lipi::SPACE => {
                out.push(StreamEvent::Space);
                offset += 1;
            }
            b if b == lipi::DANDA => {
                out.push(StreamEvent::Danda);
                offset += 1;
            }
            b if b == lipi::DOUBLE_DANDA => {
                out.push(StreamEvent::DoubleDanda);
                offset += 1;
            }
            b if b == lipi::AVAGRAHA => {
                out.push(StreamEvent::Avagraha);
                offset += 1;
            }
            b if b == lipi::NUM => {
                let (event, consumed) = decode_num_span(bytes, offset);
                out.push(event);
                offset += consumed;
            }
            b if b == bhasha::PADA_END => {
                return Err(InvariantError(format!(
                    "unmatched PADA_END at offset {offset}, state {:?}",
                    DecoderState::Idle
                ))
                .into());
            }
            other => {
                return Err(InvariantError(format!(
                    "byte {other:#04x} at offset {offset} is not valid at the top level"
                ))
                .into());
            }
        }
    }

    Ok(out)
}

/// Decodes one `PADA_START..PADA_END` run starting at `offset`. Returns
/// `(PadaStart, Phoneme(..)*, PadaEnd)` and the number of bytes consumed
/// including both wrapper bytes.
fn decode_pada(
    bytes: &[u8],
    offset: usize,
) -> Result<(Vec<StreamEvent>, usize), slbc_types::SlbcError> {
    let mut events = vec![StreamEvent::PadaStart];
    let mut cursor = offset + 1;

    loop {
        let Some(&b) = bytes.get(cursor) else {
            return Err(InvariantError(format!(
                "PADA_START at offset {offset} was never closed"
            ))
            .into());
        };
        if b == bhasha::PADA_END {
            cursor += 1;
            break;
        }
        if is_bhasha_control(b) || is_lipi_control(b) {
            return Err(InvariantError(format!(
                "control byte {b:#04x} at offset {cursor} found inside an open pada"
            ))
            .into());
        }
        events.push(StreamEvent::Phoneme(b));
        cursor += 1;
    }

    events.push(StreamEvent::PadaEnd);
    Ok((events, cursor - offset))
}

fn decode_meta(
    bytes: &[u8],
    offset: usize,
) -> Result<(StreamEvent, usize), slbc_types::SlbcError> {
    let mut cursor = offset + 1;
    let mut payload = Vec::new();

    loop {
        let Some(&b) = bytes.get(cursor) else {
            return Err(InvariantError(format!(
                "META_START at offset {offset} was never closed"
            ))
            .into());
        };
        if b == bhasha::META_END {
            cursor += 1;
            break;
        }
        payload.push(b);
        cursor += 1;
    }

    Ok((
        StreamEvent::MetaEnvelope(MetaEnvelope::from_raw(payload)),
        cursor - offset,
    ))
}

fn decode_sankhya_span(
    bytes: &[u8],
    offset: usize,
) -> Result<(StreamEvent, usize), slbc_types::SlbcError> {
    let count_start = offset + 1;
    let (count, uleb_len) =
        uleb128::decode(&bytes[count_start..], count_start).map_err(slbc_types::SlbcError::from)?;

    let mut cursor = count_start + uleb_len;
    let mut digit_padas = Vec::new();

    for _ in 0..count {
        if bytes.get(cursor) != Some(&bhasha::PADA_START) {
            return Err(SpanError::CountExceedsStream {
                count,
                consumed: digit_padas.len() as u32,
            }
            .into());
        }
        let (events, consumed) = decode_pada(bytes, cursor)?;
        let phonemes: Vec<u8> = events
            .into_iter()
            .filter_map(|e| match e {
                StreamEvent::Phoneme(b) => Some(b),
                _ => None,
            })
            .collect();
        digit_padas.push(phonemes);
        cursor += consumed;
    }

    Ok((
        StreamEvent::SankhyaSpan { count, digit_padas },
        cursor - offset,
    ))
}

/// A `NUM` span holds raw decimal-digit glyphs (`0x00..=0x0F`) with no
/// wrapper end marker; the span simply runs until a byte the glyph lane
/// can't hold. Whatever state that byte belongs to is for the caller's
/// loop to resolve, not for this function to classify.
fn decode_num_span(bytes: &[u8], offset: usize) -> (StreamEvent, usize) {
    let mut cursor = offset + 1;
    let mut glyphs = Vec::new();

    while let Some(&b) = bytes.get(cursor) {
        if b >= 0x10 {
            break;
        }
        glyphs.push(b);
        cursor += 1;
    }

    (StreamEvent::NumSpan { glyphs }, cursor - offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_single_pada() {
        let bytes = [bhasha::PADA_START, 0x00, 0x40, bhasha::PADA_END];
        let events = decode(&bytes).unwrap();
        assert_eq!(
            events,
            vec![
                StreamEvent::PadaStart,
                StreamEvent::Phoneme(0x00),
                StreamEvent::Phoneme(0x40),
                StreamEvent::PadaEnd
            ]
        );
    }

    #[test]
    fn unmatched_pada_end_is_an_error() {
        assert!(decode(&[bhasha::PADA_END]).is_err());
    }

    #[test]
    fn unclosed_pada_is_an_error() {
        assert!(decode(&[bhasha::PADA_START, 0x00]).is_err());
    }

    #[test]
    fn decodes_round_trips_with_lekhya_encoder() {
        let bytes = slbc_lekhya::encode("kṛṣṇa").unwrap();
        let events = decode(&bytes).unwrap();
        assert_eq!(
            events,
            vec![
                StreamEvent::PadaStart,
                StreamEvent::Phoneme(0x00),
                StreamEvent::Phoneme(0x4C),
                StreamEvent::Phoneme(0x2A),
                StreamEvent::Phoneme(0x14),
                StreamEvent::Phoneme(0x40),
                StreamEvent::PadaEnd,
            ]
        );
    }

    #[test]
    fn decodes_numeral_span_from_lekhya_encoder() {
        let bytes = slbc_lekhya::encode("108").unwrap();
        let events = decode(&bytes).unwrap();
        match &events[0] {
            StreamEvent::SankhyaSpan { count, digit_padas } => {
                assert_eq!(*count, 3);
                assert_eq!(digit_padas.len(), 3);
            }
            other => panic!("expected SankhyaSpan, got {other:?}"),
        }
        match events.last().unwrap() {
            StreamEvent::NumSpan { glyphs } => assert_eq!(glyphs, &[1, 0, 8]),
            other => panic!("expected NumSpan, got {other:?}"),
        }
    }

    #[test]
    fn num_span_survives_digits_that_collide_with_control_bytes() {
        let bytes = slbc_lekhya::encode("67").unwrap();
        let events = decode(&bytes).unwrap();
        match events.last().unwrap() {
            StreamEvent::NumSpan { glyphs } => assert_eq!(glyphs, &[6, 7]),
            other => panic!("expected NumSpan, got {other:?}"),
        }
    }

    #[test]
    fn num_span_stops_before_a_trailing_space() {
        let mut bytes = vec![lipi::NUM, 0x06, 0x07];
        bytes.push(lipi::SPACE);
        let (event, consumed) = decode_num_span(&bytes, 0);
        assert_eq!(consumed, 3);
        match event {
            StreamEvent::NumSpan { glyphs } => assert_eq!(glyphs, vec![6, 7]),
            other => panic!("expected NumSpan, got {other:?}"),
        }
    }
}
