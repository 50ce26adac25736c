//! Consonant-side algebra: jaśtva, voicing/aspiration toggles, and
//! nasalization. All operate on the `COLUMN` field of a varga byte
//! (`PLACE` untouched), so every op here is a precondition check plus a
//! bitmask on the low 3 bits.

use slbc_types::DomainError;
use slbc_varna::classify::{is_varga, place};

const COLUMN_MASK: u8 = 0b0000_0111;
const VOICE_BIT: u8 = 0b010;
const ASPIRATION_BIT: u8 = 0b001;
const NASAL_COLUMN: u8 = 4;

fn require_varga(op: &'static str, byte: u8) -> Result<(), DomainError> {
    if is_varga(byte) {
        Ok(())
    } else {
        Err(DomainError::NotAVarga { op, byte })
    }
}

fn with_column(byte: u8, column: u8) -> u8 {
    (byte & !COLUMN_MASK) | column
}

/// Jaśtva: voiced, unaspirated substitution for a varga consonant
/// (e.g. before a voiced sound in external sandhi). `jastva(ka) == ga`,
/// i.e. `jastva(0x00) == 0x02`.
pub fn jastva(byte: u8) -> Result<u8, DomainError> {
    require_varga("jastva", byte)?;
    Ok(with_column(byte, 0b010))
}

/// Flips voicing (unvoiced <-> voiced), keeping aspiration and place:
/// `ka <-> ga`, `kha <-> gha`.
pub fn toggle_voice(byte: u8) -> Result<u8, DomainError> {
    require_varga("toggle_voice", byte)?;
    Ok(byte ^ VOICE_BIT)
}

/// Flips aspiration (unaspirated <-> aspirated), keeping voicing and
/// place: `ka <-> kha`, `ga <-> gha`.
pub fn toggle_aspiration(byte: u8) -> Result<u8, DomainError> {
    require_varga("toggle_aspiration", byte)?;
    Ok(byte ^ ASPIRATION_BIT)
}

/// Nasalizes a varga consonant in place: the nasal member of the same
/// place (`ka -> ṅa`, `ca -> ña`).
pub fn make_nasal(byte: u8) -> Result<u8, DomainError> {
    require_varga("make_nasal", byte)?;
    Ok(with_column(byte, NASAL_COLUMN))
}

/// The homorganic nasal for `byte`'s place, for anunāsika assimilation
/// before a following consonant (e.g. choosing `ṅ` before a velar stop).
/// Identical transform to [`make_nasal`], kept as a distinct name because
/// callers reach for it from the opposite direction: "what nasal belongs
/// here" rather than "nasalize this consonant".
pub fn homorganic_nasal_for(byte: u8) -> Result<u8, DomainError> {
    require_varga("homorganic_nasal_for", byte)?;
    Ok((place(byte) << 3) | NASAL_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jastva_of_ka_is_ga() {
        assert_eq!(jastva(0x00).unwrap(), 0x02);
    }

    #[test]
    fn toggle_voice_is_its_own_inverse() {
        let ga = toggle_voice(0x00).unwrap();
        assert_eq!(ga, 0x02);
        assert_eq!(toggle_voice(ga).unwrap(), 0x00);
    }

    #[test]
    fn toggle_aspiration_is_its_own_inverse() {
        let kha = toggle_aspiration(0x00).unwrap();
        assert_eq!(kha, 0x01);
        assert_eq!(toggle_aspiration(kha).unwrap(), 0x00);
    }

    #[test]
    fn make_nasal_of_ka_is_nga() {
        assert_eq!(make_nasal(0x00).unwrap(), 0x04);
    }

    #[test]
    fn homorganic_nasal_matches_place() {
        assert_eq!(homorganic_nasal_for(0x08).unwrap(), 0x0C); // ca-varga -> ña
    }

    #[test]
    fn ops_reject_non_varga_bytes() {
        assert_eq!(
            jastva(0x40),
            Err(DomainError::NotAVarga { op: "jastva", byte: 0x40 })
        );
    }
}
