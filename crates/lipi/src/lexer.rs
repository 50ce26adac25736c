//! Greedy longest-match tokenizer over NFC-normalized IAST text.
//!
//! The phoneme vocabulary comes straight from `slbc-varna`'s svara and
//! vyañjana tables; this module only adds the punctuation/digit tokens
//! and the longest-match scanning loop. Multi-character tokens (`"kh"`,
//! `"ai"`) must be tried before their single-character prefixes, which is
//! why [`phoneme_candidates`] sorts by descending token length once and
//! every lookup walks it in that order.

use std::sync::LazyLock;

use slbc_types::InputEncodingError;
use slbc_varna::normalize::to_nfc;
use slbc_varna::svara::SVARA_TABLE;
use slbc_varna::vyanjana::{NON_VARGA_TABLE, VARGA_TABLE};

use crate::token::{LexToken, Spanned};

static PHONEME_CANDIDATES: LazyLock<Vec<(&'static str, u8)>> = LazyLock::new(|| {
    let mut v: Vec<(&'static str, u8)> = SVARA_TABLE
        .iter()
        .chain(VARGA_TABLE)
        .chain(NON_VARGA_TABLE)
        .copied()
        .collect();
    v.sort_by_key(|(token, _)| std::cmp::Reverse(token.len()));
    v
});

fn phoneme_candidates() -> &'static [(&'static str, u8)] {
    &PHONEME_CANDIDATES
}

/// Tokenizes `input` into a span-annotated token stream. Offsets are byte
/// offsets into the NFC-normalized copy of `input`, not the original.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, InputEncodingError> {
    let normalized = to_nfc(input);
    let bytes = normalized.as_bytes();
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < normalized.len() {
        let rest = &normalized[offset..];

        if let Some(stripped) = rest.strip_prefix("||") {
            out.push(Spanned {
                offset,
                token: LexToken::DoubleDanda,
            });
            offset += rest.len() - stripped.len();
            continue;
        }
        if let Some(stripped) = rest.strip_prefix('|') {
            out.push(Spanned {
                offset,
                token: LexToken::Danda,
            });
            offset += rest.len() - stripped.len();
            continue;
        }
        if let Some(stripped) = rest.strip_prefix('\'') {
            out.push(Spanned {
                offset,
                token: LexToken::Avagraha,
            });
            offset += rest.len() - stripped.len();
            continue;
        }

        let next_char = rest.chars().next().expect("offset < len implies a char");
        if next_char.is_whitespace() {
            out.push(Spanned {
                offset,
                token: LexToken::Space,
            });
            offset += next_char.len_utf8();
            continue;
        }
        if next_char.is_ascii_digit() {
            let digit = next_char as u8 - b'0';
            out.push(Spanned {
                offset,
                token: LexToken::Digit(digit),
            });
            offset += 1;
            continue;
        }

        if let Some((matched, byte)) = phoneme_candidates()
            .iter()
            .find(|(token, _)| rest.starts_with(token))
        {
            out.push(Spanned {
                offset,
                token: LexToken::Phoneme(*byte),
            });
            offset += matched.len();
            continue;
        }

        return Err(InputEncodingError::UnrecognizedToken {
            offset,
            text: next_char.to_string(),
        });
    }

    debug_assert_eq!(offset, bytes.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonemes(input: &str) -> Vec<u8> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .filter_map(|s| match s.token {
                LexToken::Phoneme(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ka_tokenizes_to_k_then_a() {
        assert_eq!(phonemes("ka"), vec![0x00, 0x40]);
    }

    #[test]
    fn krsna_tokenizes_to_five_phonemes() {
        assert_eq!(phonemes("kṛṣṇa"), vec![0x00, 0x4C, 0x2A, 0x14, 0x40]);
    }

    #[test]
    fn kh_is_matched_before_k() {
        assert_eq!(phonemes("kha"), vec![0x01, 0x40]);
    }

    #[test]
    fn ai_is_matched_before_a_plus_i() {
        assert_eq!(phonemes("maitrī"), vec![0x24, 0x86, 0x18, 0x29, 0x84]);
    }

    #[test]
    fn space_and_danda_are_tokenized() {
        let toks: Vec<LexToken> = tokenize("ka | kha")
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .collect();
        assert!(toks.contains(&LexToken::Danda));
        assert!(toks.contains(&LexToken::Space));
    }

    #[test]
    fn double_danda_takes_priority_over_single() {
        let toks: Vec<LexToken> = tokenize("ka ||")
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .collect();
        assert_eq!(toks.last(), Some(&LexToken::DoubleDanda));
    }

    #[test]
    fn digits_tokenize_individually() {
        let toks: Vec<LexToken> = tokenize("108")
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .collect();
        assert_eq!(
            toks,
            vec![LexToken::Digit(1), LexToken::Digit(0), LexToken::Digit(8)]
        );
    }

    #[test]
    fn unrecognized_character_is_reported_with_offset() {
        let err = tokenize("ka#kha").unwrap_err();
        match err {
            InputEncodingError::UnrecognizedToken { offset, text } => {
                assert_eq!(offset, 2);
                assert_eq!(text, "#");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
