//! Input normalization: IAST text is NFC-normalized before tokenization so
//! that precomposed (`ā`) and decomposed (`a` + combining macron) spellings
//! of the same phoneme tokenize identically.

use unicode_normalization::UnicodeNormalization;

/// Normalizes `input` to NFC. Idempotent: normalizing twice is the same as
/// normalizing once.
#[must_use]
pub fn to_nfc(input: &str) -> String {
    input.nfc().collect()
}
