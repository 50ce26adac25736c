//! Pada (word) wrapping: every contiguous run of phoneme bytes in the
//! bhāṣā lane is bracketed by `PADA_START`/`PADA_END`.

use slbc_varna::classify::bhasha;

/// Wraps `phonemes` in `PADA_START`/`PADA_END`. Always emits the wrapper
/// bytes, even for an empty pada, so a decoder sees a balanced pair.
#[must_use]
pub fn wrap_pada(phonemes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(phonemes.len() + 2);
    out.push(bhasha::PADA_START);
    out.extend_from_slice(phonemes);
    out.push(bhasha::PADA_END);
    out
}
