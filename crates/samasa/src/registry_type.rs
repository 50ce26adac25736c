//! The one-byte registry-type tag at the front of a DICT chunk payload.

use slbc_kosha::RegistryKind;
use slbc_types::ContainerError;

const DHATU: u8 = 0x00;
const PRATIPADIKA: u8 = 0x01;
const SANDHI_RULE: u8 = 0x02;

#[must_use]
pub const fn registry_type_byte(kind: RegistryKind) -> u8 {
    match kind {
        RegistryKind::Dhatu => DHATU,
        RegistryKind::Pratipadika => PRATIPADIKA,
        RegistryKind::SandhiRule => SANDHI_RULE,
    }
}

pub fn registry_kind_from_byte(byte: u8, offset: usize) -> Result<RegistryKind, ContainerError> {
    match byte {
        DHATU => Ok(RegistryKind::Dhatu),
        PRATIPADIKA => Ok(RegistryKind::Pratipadika),
        SANDHI_RULE => Ok(RegistryKind::SandhiRule),
        other => Err(ContainerError::UnknownChunkType {
            offset,
            chunk_type: other,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_kind() {
        for kind in [
            RegistryKind::Dhatu,
            RegistryKind::Pratipadika,
            RegistryKind::SandhiRule,
        ] {
            let byte = registry_type_byte(kind);
            assert_eq!(registry_kind_from_byte(byte, 0).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_byte_is_rejected() {
        assert!(registry_kind_from_byte(0x7F, 3).is_err());
    }
}
