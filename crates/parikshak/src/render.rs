//! Renders a decoded [`StreamEvent`] sequence back to text: the final
//! step of the decode pipeline — container reader → extractor → stream
//! decoder → (IAST emitter | Devanāgarī emitter).
//!
//! Script transposition beyond this direct emission table is out of
//! scope; these functions only ever combine the byte-level tables
//! already in `slbc-varna` (bare tokens, mātrā/virāma rules).

use slbc_types::StreamEvent;
use slbc_varna::devanagari;

/// Renders events as plain IAST text: phonemes concatenate their bare
/// tokens, punctuation maps to its ASCII form, and a NUM span's glyphs
/// print as decimal digits.
#[must_use]
pub fn events_to_iast(events: &[StreamEvent]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            StreamEvent::Phoneme(b) => {
                if let Some(token) = slbc_varna::token_for_byte(*b) {
                    out.push_str(token);
                }
            }
            StreamEvent::Space => out.push(' '),
            StreamEvent::Danda => out.push('|'),
            StreamEvent::DoubleDanda => out.push_str("||"),
            StreamEvent::Avagraha => out.push('\''),
            StreamEvent::NumSpan { glyphs } => {
                for &d in glyphs {
                    out.push((b'0' + d) as char);
                }
            }
            StreamEvent::PadaStart
            | StreamEvent::PadaEnd
            | StreamEvent::PhonStart
            | StreamEvent::PhonEnd
            | StreamEvent::Anu
            | StreamEvent::SankhyaSpan { .. }
            | StreamEvent::MetaEnvelope(_) => {}
        }
    }
    out
}

/// Renders events as Devanāgarī text, applying mātrā/virāma composition
/// within each pada.
#[must_use]
pub fn events_to_devanagari(events: &[StreamEvent]) -> String {
    let mut out = String::new();
    let mut pada: Vec<u8> = Vec::new();
    let mut in_pada = false;

    for event in events {
        match event {
            StreamEvent::PadaStart => {
                in_pada = true;
                pada.clear();
            }
            StreamEvent::PadaEnd => {
                out.push_str(&render_pada_devanagari(&pada));
                in_pada = false;
            }
            StreamEvent::Phoneme(b) if in_pada => pada.push(*b),
            StreamEvent::Phoneme(_) => {}
            StreamEvent::Space => out.push(' '),
            StreamEvent::Danda => out.push('।'),
            StreamEvent::DoubleDanda => out.push_str("॥"),
            StreamEvent::Avagraha => out.push('ऽ'),
            StreamEvent::NumSpan { glyphs } => {
                for &d in glyphs {
                    out.push(devanagari::DIGIT[d as usize]);
                }
            }
            StreamEvent::PhonStart
            | StreamEvent::PhonEnd
            | StreamEvent::Anu
            | StreamEvent::SankhyaSpan { .. }
            | StreamEvent::MetaEnvelope(_) => {}
        }
    }

    out
}

/// Composes one pada's phoneme bytes into Devanāgarī, inserting a virāma
/// between consecutive consonants and before a trailing bare consonant.
fn render_pada_devanagari(phonemes: &[u8]) -> String {
    let mut out = String::new();
    let mut pending_consonant = false;

    for (i, &byte) in phonemes.iter().enumerate() {
        if slbc_varna::is_svara(byte) {
            if pending_consonant {
                if byte != 0x40 {
                    if let Some(matra) = devanagari::matra_glyph(byte) {
                        out.push(matra);
                    }
                }
            } else if let Some(glyph) = devanagari::independent_vowel_glyph(byte) {
                out.push(glyph);
            }
            pending_consonant = false;
        } else {
            if pending_consonant {
                out.push(devanagari::VIRAMA);
            }
            if let Some(glyph) = devanagari::consonant_glyph(byte) {
                out.push(glyph);
            }
            pending_consonant = true;
        }
        let _ = i;
    }

    if pending_consonant {
        out.push(devanagari::VIRAMA);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ka_renders_to_iast() {
        let events = vec![
            StreamEvent::PadaStart,
            StreamEvent::Phoneme(0x00),
            StreamEvent::Phoneme(0x40),
            StreamEvent::PadaEnd,
        ];
        assert_eq!(events_to_iast(&events), "ka");
    }

    #[test]
    fn ka_renders_to_devanagari() {
        let events = vec![
            StreamEvent::PadaStart,
            StreamEvent::Phoneme(0x00),
            StreamEvent::Phoneme(0x40),
            StreamEvent::PadaEnd,
        ];
        assert_eq!(events_to_devanagari(&events), "क");
    }

    #[test]
    fn krsna_renders_to_both_scripts() {
        let bytes = slbc_lekhya::encode("kṛṣṇa").unwrap();
        let events = crate::decode(&bytes).unwrap();
        assert_eq!(events_to_iast(&events), "kṛṣṇa");
        assert_eq!(events_to_devanagari(&events), "कृष्ण");
    }

    #[test]
    fn two_words_separated_by_space_in_both_scripts() {
        let bytes = slbc_lekhya::encode("ka kha").unwrap();
        let events = crate::decode(&bytes).unwrap();
        assert_eq!(events_to_iast(&events), "ka kha");
        assert_eq!(events_to_devanagari(&events), "क ख");
    }

    #[test]
    fn numeral_renders_as_decimal_digits() {
        let bytes = slbc_lekhya::encode("108").unwrap();
        let events = crate::decode(&bytes).unwrap();
        assert_eq!(events_to_iast(&events), "108");
        assert_eq!(
            events_to_devanagari(&events),
            "१०८"
        );
    }
}
