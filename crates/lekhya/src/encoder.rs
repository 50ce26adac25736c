//! Top-level stream encoder: IAST text in, interleaved bhāṣā+lipi bytes
//! out.

use slbc_lipi::{tokenize, LexToken};
use slbc_types::InputEncodingError;
use slbc_varna::classify::lipi;

use crate::numeral::encode_digit_run;
use crate::pada::wrap_pada;

/// Encodes `input` (plain IAST text) into the interleaved byte stream: a
/// `PADA_START..PADA_END`-wrapped run of phoneme bytes for every
/// contiguous stretch of phonemes, a SAṄKHYĀ+NUM dual span for every
/// contiguous run of digits, and a single lipi control byte for every
/// punctuation/space token.
pub fn encode(input: &str) -> Result<Vec<u8>, InputEncodingError> {
    let tokens = tokenize(input)?;
    let mut out = Vec::new();
    let mut pending_phonemes = Vec::new();
    let mut pending_digits = Vec::new();

    for spanned in tokens {
        match spanned.token {
            LexToken::Phoneme(byte) => {
                flush_digits(&mut out, &mut pending_digits);
                pending_phonemes.push(byte);
            }
            LexToken::Digit(d) => {
                flush_phonemes(&mut out, &mut pending_phonemes);
                pending_digits.push(d);
            }
            LexToken::Space => {
                flush_phonemes(&mut out, &mut pending_phonemes);
                flush_digits(&mut out, &mut pending_digits);
                out.push(lipi::SPACE);
            }
            LexToken::Danda => {
                flush_phonemes(&mut out, &mut pending_phonemes);
                flush_digits(&mut out, &mut pending_digits);
                out.push(lipi::DANDA);
            }
            LexToken::DoubleDanda => {
                flush_phonemes(&mut out, &mut pending_phonemes);
                flush_digits(&mut out, &mut pending_digits);
                out.push(lipi::DOUBLE_DANDA);
            }
            LexToken::Avagraha => {
                flush_phonemes(&mut out, &mut pending_phonemes);
                flush_digits(&mut out, &mut pending_digits);
                out.push(lipi::AVAGRAHA);
            }
        }
    }

    flush_phonemes(&mut out, &mut pending_phonemes);
    flush_digits(&mut out, &mut pending_digits);

    Ok(out)
}

fn flush_phonemes(out: &mut Vec<u8>, pending: &mut Vec<u8>) {
    if !pending.is_empty() {
        out.extend(wrap_pada(pending));
        pending.clear();
    }
}

fn flush_digits(out: &mut Vec<u8>, pending: &mut Vec<u8>) {
    if !pending.is_empty() {
        out.extend(encode_digit_run(pending));
        pending.clear();
    }
}
