//! SAṄKHYĀ/NUM dual-layer numeral encoding.
//!
//! A run of decimal digit tokens is encoded twice: once as a SAṄKHYĀ span
//! (the bhāṣā-layer spelling, pada-wrapped digit words, read right to
//! left so the units digit comes first) and once as a NUM span (the
//! lipi-layer glyphs, left to right, leading zeros kept).

use std::sync::LazyLock;

use slbc_varna::classify::bhasha;
use slbc_varna::classify::lipi;
use slbc_types::uleb128;

use crate::pada::wrap_pada;

/// The Sanskrit number-word spelling, tokenized down to phoneme bytes, for
/// each decimal digit 0..=9.
static DIGIT_WORD_PHONEMES: LazyLock<[Vec<u8>; 10]> = LazyLock::new(|| {
    // The zero word is spelled "rūnha", not the more familiar "śūnya" —
    // pinned to the phoneme bytes `29 88 1C 31 40` this codec's digit
    // tables are required to produce.
    const WORDS: [&str; 10] = [
        "rūnha", "eka", "dvi", "tri", "catur", "pañca", "ṣaṣ", "sapta", "aṣṭa", "nava",
    ];
    WORDS.map(|word| {
        slbc_lipi::tokenize(word)
            .unwrap_or_else(|e| panic!("digit word {word:?} failed to tokenize: {e}"))
            .into_iter()
            .filter_map(|s| match s.token {
                slbc_lipi::LexToken::Phoneme(b) => Some(b),
                _ => None,
            })
            .collect()
    })
});

/// Encodes a run of decimal digits (in the order they appeared in the
/// source, most significant first) as the SAṄKHYĀ span followed by the
/// NUM span.
#[must_use]
pub fn encode_digit_run(digits: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();

    out.push(bhasha::SANKHYA_START);
    out.extend(uleb128::encode(digits.len() as u32));
    for &digit in digits.iter().rev() {
        let phonemes = &DIGIT_WORD_PHONEMES[digit as usize];
        out.extend(wrap_pada(phonemes));
    }

    out.push(lipi::NUM);
    out.extend(digits.iter().copied());

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_run_wraps_one_digit_word() {
        let encoded = encode_digit_run(&[8]);
        assert_eq!(encoded[0], bhasha::SANKHYA_START);
        assert_eq!(encoded[1], 0x01); // ULEB128(1)
        assert_eq!(encoded[2], bhasha::PADA_START);
        assert_eq!(*encoded.last().unwrap(), 8);
    }

    #[test]
    fn multi_digit_run_emits_digits_units_first_in_bhasha_lane() {
        // "108" -> units=8, tens=0, hundreds=1
        let encoded = encode_digit_run(&[1, 0, 8]);
        assert_eq!(encoded[0], bhasha::SANKHYA_START);
        assert_eq!(encoded[1], 0x03);
        let first_pada_word = &DIGIT_WORD_PHONEMES[8];
        assert_eq!(&encoded[3..3 + first_pada_word.len()], first_pada_word.as_slice());
    }

    #[test]
    fn num_span_keeps_visual_left_to_right_order_with_leading_zeros() {
        let encoded = encode_digit_run(&[1, 0, 8]);
        let num_pos = encoded.iter().position(|&b| b == lipi::NUM).unwrap();
        assert_eq!(&encoded[num_pos + 1..], &[1, 0, 8]);
    }

    #[test]
    fn zero_digit_word_matches_pinned_phoneme_bytes() {
        assert_eq!(
            DIGIT_WORD_PHONEMES[0].as_slice(),
            &[0x29, 0x88, 0x1C, 0x31, 0x40]
        );
    }
}
