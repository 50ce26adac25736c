//! Devanāgarī glyph emission tables, used by the lipi lane encoder and by
//! the `decode --to devanagari` CLI path. Pure lookup tables mirroring
//! [`crate::svara`] and [`crate::vyanjana`]; no rendering or reordering
//! logic lives here.

use crate::vyanjana::{NON_VARGA_TABLE, VARGA_TABLE};

/// Independent (full-form) vowel glyphs, used at the start of a pada or
/// after another vowel, keyed by the svara byte.
pub static INDEPENDENT_VOWEL: &[(u8, char)] = &[
    (0x40, 'अ'),
    (0x80, 'आ'),
    (0x44, 'इ'),
    (0x84, 'ई'),
    (0x48, 'उ'),
    (0x88, 'ऊ'),
    (0x4C, 'ऋ'),
    (0x8C, 'ॠ'),
    (0x4F, 'ऌ'),
    (0x8F, 'ॡ'),
    (0x85, 'ए'),
    (0x86, 'ऐ'),
    (0x89, 'ओ'),
    (0x8A, 'औ'),
];

/// Dependent vowel signs (mātrā), used after a consonant. `a` has no
/// entry: it is the consonant's inherent vowel and needs no sign.
pub static MATRA: &[(u8, char)] = &[
    (0x80, 'ा'),
    (0x44, 'ि'),
    (0x84, 'ी'),
    (0x48, 'ु'),
    (0x88, 'ू'),
    (0x4C, 'ृ'),
    (0x8C, 'ॄ'),
    (0x4F, 'ॢ'),
    (0x8F, 'ॣ'),
    (0x85, 'े'),
    (0x86, 'ै'),
    (0x89, 'ो'),
    (0x8A, 'ौ'),
];

/// Virama (halant): suppresses a consonant's inherent `a`.
pub const VIRAMA: char = '्';

/// Devanāgarī digit glyphs, index = decimal digit 0..=9.
pub static DIGIT: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Consonant base glyph for a varga or non-varga byte.
#[must_use]
pub fn consonant_glyph(byte: u8) -> Option<char> {
    VARGA_TABLE
        .iter()
        .chain(NON_VARGA_TABLE)
        .find(|(_, b)| *b == byte)
        .and_then(|(token, _)| consonant_glyph_for_token(token))
}

fn consonant_glyph_for_token(token: &str) -> Option<char> {
    Some(match token {
        "k" => 'क',
        "kh" => 'ख',
        "g" => 'ग',
        "gh" => 'घ',
        "ṅ" => 'ङ',
        "c" => 'च',
        "ch" => 'छ',
        "j" => 'ज',
        "jh" => 'झ',
        "ñ" => 'ञ',
        "ṭ" => 'ट',
        "ṭh" => 'ठ',
        "ḍ" => 'ड',
        "ḍh" => 'ढ',
        "ṇ" => 'ण',
        "t" => 'त',
        "th" => 'थ',
        "d" => 'द',
        "dh" => 'ध',
        "n" => 'न',
        "p" => 'प',
        "ph" => 'फ',
        "b" => 'ब',
        "bh" => 'भ',
        "m" => 'म',
        "y" => 'य',
        "r" => 'र',
        "l" => 'ल',
        "v" => 'व',
        "ś" => 'श',
        "ṣ" => 'ष',
        "s" => 'स',
        "h" => 'ह',
        "ẖ" => '\u{1CF5}', // jihvāmūlīya
        "ḫ" => '\u{1CF6}', // upadhmānīya
        "ḥ" => 'ः',
        "ṃ" => 'ं',
        _ => return None,
    })
}

/// Independent vowel glyph for a svara byte.
#[must_use]
pub fn independent_vowel_glyph(byte: u8) -> Option<char> {
    INDEPENDENT_VOWEL
        .iter()
        .find(|(b, _)| *b == byte)
        .map(|(_, g)| *g)
}

/// Dependent vowel sign for a svara byte, `None` for inherent `a`.
#[must_use]
pub fn matra_glyph(byte: u8) -> Option<char> {
    MATRA.iter().find(|(b, _)| *b == byte).map(|(_, g)| *g)
}
