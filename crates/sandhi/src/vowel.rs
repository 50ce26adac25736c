//! Vowel-side algebra: guṇa, vṛddhi, length alternation, savarṇa dīrgha,
//! and the samprasāraṇa lookup. Every function here is a pure, total
//! transform over one or two svara bytes; nothing here walks a stream or
//! looks at neighboring bytes beyond what is passed in.

use slbc_types::DomainError;
use slbc_varna::svara::{Grade, Quantity, Svara};

fn require_svara(op: &'static str, byte: u8) -> Result<Svara, DomainError> {
    Svara::decode(byte).ok_or(DomainError::NotASvara { op, byte })
}

/// guṇa: raises a svara to its guṇa grade, forcing dīrgha quantity.
/// `guna(i) == e`, `guna(u) == o`, i.e. `guna(0x44) == 0x85`.
pub fn guna(byte: u8) -> Result<u8, DomainError> {
    let svara = require_svara("guna", byte)?;
    Ok(Svara {
        quantity: Quantity::Dirgha,
        grade: Grade::Guna,
        ..svara
    }
    .encode())
}

/// vṛddhi: raises a svara to its vṛddhi grade, forcing dīrgha quantity.
/// `vrddhi(i) == ai`, i.e. `vrddhi(0x44) == 0x86`.
pub fn vrddhi(byte: u8) -> Result<u8, DomainError> {
    let svara = require_svara("vrddhi", byte)?;
    Ok(Svara {
        quantity: Quantity::Dirgha,
        grade: Grade::Vrddhi,
        ..svara
    }
    .encode())
}

/// Lengthens a svara to its dīrgha counterpart, keeping series and grade.
pub fn dirgha(byte: u8) -> Result<u8, DomainError> {
    let svara = require_svara("dirgha", byte)?;
    Ok(Svara {
        quantity: Quantity::Dirgha,
        ..svara
    }
    .encode())
}

/// Shortens a svara to its hrasva counterpart, keeping series and grade.
pub fn hrasva(byte: u8) -> Result<u8, DomainError> {
    let svara = require_svara("hrasva", byte)?;
    Ok(Svara {
        quantity: Quantity::Hrasva,
        ..svara
    }
    .encode())
}

/// Savarṇa dīrgha: two suddha-grade vowels of the *same* series fuse to
/// the dīrgha of that series (e.g. `a + a -> ā`, `i + ī -> ī`). Fails with
/// [`DomainError::SeriesMismatch`] if the two bytes are not the same
/// series; the accent/grade of `a` is preserved in the result.
pub fn savarna_dirgha(a: u8, b: u8) -> Result<u8, DomainError> {
    let sa = require_svara("savarna_dirgha", a)?;
    let sb = require_svara("savarna_dirgha", b)?;
    if sa.series != sb.series {
        return Err(DomainError::SeriesMismatch { a, b });
    }
    Ok(Svara {
        quantity: Quantity::Dirgha,
        ..sa
    }
    .encode())
}

/// Samprasāraṇa: resolves a semivowel consonant to the vowel it
/// weakens to under the traditional `ya -> i`, `va -> u`, `ra -> ṛ`,
/// `la -> ḷ` correspondence. This is an explicit lookup, never a bit
/// transform: `ḷ` needs the `special` grade bit that a semivowel byte has
/// no analogue for, i.e. `samprasarana_to_svara(0x34) == 0x4F`.
pub fn samprasarana_to_svara(byte: u8) -> Result<u8, DomainError> {
    match byte {
        0x28 => Ok(0x44), // ya -> i
        0x2B => Ok(0x48), // va -> u
        0x29 => Ok(0x4C), // ra -> ṛ
        0x34 => Ok(0x4F), // la -> ḷ
        _ => Err(DomainError::NotASamprasaranaSource { byte }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guna_of_i_is_e() {
        assert_eq!(guna(0x44).unwrap(), 0x85);
    }

    #[test]
    fn vrddhi_of_i_is_ai() {
        assert_eq!(vrddhi(0x44).unwrap(), 0x86);
    }

    #[test]
    fn guna_rejects_non_svara() {
        assert_eq!(
            guna(0x00),
            Err(DomainError::NotASvara { op: "guna", byte: 0x00 })
        );
    }

    #[test]
    fn savarna_dirgha_same_series_fuses() {
        assert_eq!(savarna_dirgha(0x40, 0x40).unwrap(), 0x80); // a + a -> ā
    }

    #[test]
    fn savarna_dirgha_mismatched_series_errors() {
        assert_eq!(
            savarna_dirgha(0x40, 0x44),
            Err(DomainError::SeriesMismatch { a: 0x40, b: 0x44 })
        );
    }

    #[test]
    fn samprasarana_maps_la_to_lr_vocalic() {
        assert_eq!(samprasarana_to_svara(0x34).unwrap(), 0x4F);
    }

    #[test]
    fn samprasarana_rejects_non_semivowel() {
        assert_eq!(
            samprasarana_to_svara(0x00),
            Err(DomainError::NotASamprasaranaSource { byte: 0x00 })
        );
    }
}
