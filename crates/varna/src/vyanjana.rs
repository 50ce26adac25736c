//! Vyañjana (consonant) byte layout: `00 PLACE[3] COLUMN[3]`, and the
//! IAST tables for the 25 varga and 12 non-varga phonemes.
//!
//! Varga `COLUMN` is a manner/voicing grid shared by all five places:
//! `0` unvoiced unaspirated, `1` unvoiced aspirated, `2` voiced
//! unaspirated, `3` voiced aspirated, `4` nasal. This is what makes
//! [`crate::varna::jastva`]-style algebra a pure bit operation on `COLUMN`.

/// The five varga places, in `PLACE` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Varga {
    Ka,
    Ca,
    Ta,
    Da,
    Pa,
}

impl Varga {
    const fn place(self) -> u8 {
        match self {
            Self::Ka => 0,
            Self::Ca => 1,
            Self::Ta => 2,
            Self::Da => 3,
            Self::Pa => 4,
        }
    }
}

/// `(IAST token, byte)` pairs for the 25 varga consonants, grouped by
/// place. The token is the bare consonant letter as it appears in IAST
/// running text (no inherent vowel) — `"k"`, not `"ka"`; the `-a` names
/// used in prose (`ka`-varga) are traditional labels for the byte, not
/// its tokenizer spelling. Ground truth: `k = 0x00`, `ṇ = 0x14` (the
/// worked example for `"kṛṣṇa"`).
pub static VARGA_TABLE: &[(&str, u8)] = &[
    ("k", 0x00),
    ("kh", 0x01),
    ("g", 0x02),
    ("gh", 0x03),
    ("ṅ", 0x04),
    ("c", 0x08),
    ("ch", 0x09),
    ("j", 0x0A),
    ("jh", 0x0B),
    ("ñ", 0x0C),
    ("ṭ", 0x10),
    ("ṭh", 0x11),
    ("ḍ", 0x12),
    ("ḍh", 0x13),
    ("ṇ", 0x14),
    ("t", 0x18),
    ("th", 0x19),
    ("d", 0x1A),
    ("dh", 0x1B),
    ("n", 0x1C),
    ("p", 0x20),
    ("ph", 0x21),
    ("b", 0x22),
    ("bh", 0x23),
    ("m", 0x24),
];

/// `(IAST token, byte)` pairs for the 12 non-varga consonants. `PLACE`
/// runs `5..=7` with `COLUMN` as a plain ordinal index (no manner/voicing
/// structure). Ground truth: `ṣ = 0x2A`, `l = 0x34`, anusvāra `ṃ = 0x3A`.
pub static NON_VARGA_TABLE: &[(&str, u8)] = &[
    ("y", 0x28),
    ("r", 0x29),
    ("ṣ", 0x2A),
    ("v", 0x2B),
    ("ś", 0x2C),
    ("s", 0x30),
    ("h", 0x31),
    ("ẖ", 0x32), // jihvāmūlīya
    ("ḫ", 0x33), // upadhmānīya
    ("l", 0x34),
    ("ḥ", 0x39), // visarga
    ("ṃ", 0x3A), // anusvāra
];

/// Looks up the byte for an IAST consonant token (varga or non-varga).
#[must_use]
pub fn byte_for_token(token: &str) -> Option<u8> {
    VARGA_TABLE
        .iter()
        .chain(NON_VARGA_TABLE)
        .find(|(t, _)| *t == token)
        .map(|(_, b)| *b)
}

/// Looks up the IAST token for a consonant byte.
#[must_use]
pub fn token_for_byte(byte: u8) -> Option<&'static str> {
    VARGA_TABLE
        .iter()
        .chain(NON_VARGA_TABLE)
        .find(|(_, b)| *b == byte)
        .map(|(t, _)| *t)
}

/// Builds the byte for a varga consonant from its place and 0..=4 column.
/// Returns `None` if `column > 4`.
#[must_use]
pub const fn varga_byte(place: Varga, column: u8) -> Option<u8> {
    if column > 4 {
        return None;
    }
    Some((place.place() << 3) | column)
}
