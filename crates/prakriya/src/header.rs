//! The 14-byte `.slbc` file header: magic, version, flags, and the
//! length of an (optional) extended header region. All multi-byte fields
//! are little-endian.

use slbc_types::ContainerError;

pub const MAGIC: [u8; 4] = *b"SLBC";
pub const HEADER_LEN: usize = 14;

/// Bit flags carried in the header's 4-byte flags field. Any bit outside
/// this set must be zero; a decoder that finds one set rejects the file
/// with [`ContainerError::ReservedFlagBitsSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u32);

impl Flags {
    pub const HAS_LIPI: u32 = 1 << 0;
    pub const HAS_META: u32 = 1 << 1;
    pub const INTERLEAVED: u32 = 1 << 2;
    pub const VEDIC: u32 = 1 << 3;
    pub const VYA: u32 = 1 << 4;
    const KNOWN: u32 = Self::HAS_LIPI | Self::HAS_META | Self::INTERLEAVED | Self::VEDIC | Self::VYA;

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    #[must_use]
    pub const fn with(self, flag: u32) -> Self {
        Self(self.0 | flag)
    }

    fn check_reserved_bits(self) -> Result<(), ContainerError> {
        let reserved = self.0 & !Self::KNOWN;
        if reserved != 0 {
            return Err(ContainerError::ReservedFlagBitsSet {
                byte_index: 11,
                value: reserved as u8,
            });
        }
        Ok(())
    }
}

/// Header version, `major.minor.patch.build`, one byte each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub build: u8,
}

/// The version this codec writes by default.
pub const SUPPORTED_VERSION: Version = Version {
    major: 0,
    minor: 0,
    patch: 0,
    build: 8,
};

/// The numeral-extension version: same wire format, `SANKHYA`/`NUM`
/// spans included.
pub const NUMERAL_EXTENSION_VERSION: Version = Version {
    major: 0,
    minor: 0,
    patch: 0,
    build: 9,
};

impl Version {
    #[must_use]
    pub fn is_supported(self) -> bool {
        self == SUPPORTED_VERSION || self == NUMERAL_EXTENSION_VERSION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub flags: Flags,
    pub ext_header_len: u16,
}

impl Header {
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        Self {
            version: SUPPORTED_VERSION,
            flags,
            ext_header_len: 0,
        }
    }

    #[must_use]
    pub fn write(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&MAGIC);
        out[4] = self.version.major;
        out[5] = self.version.minor;
        out[6] = self.version.patch;
        out[7] = self.version.build;
        out[11] = self.flags.bits() as u8;
        out[12..14].copy_from_slice(&self.ext_header_len.to_le_bytes());
        out
    }

    /// Parses a header from the front of `bytes`. Returns the header and
    /// the number of bytes consumed (always [`HEADER_LEN`] on success).
    pub fn read(bytes: &[u8]) -> Result<(Self, usize), ContainerError> {
        if bytes.len() < HEADER_LEN {
            return Err(ContainerError::TruncatedHeader {
                needed: HEADER_LEN,
                have: bytes.len(),
            });
        }

        let mut found = [0u8; 4];
        found.copy_from_slice(&bytes[0..4]);
        if found != MAGIC {
            return Err(ContainerError::BadMagic {
                found,
                expected: MAGIC,
            });
        }

        let version = Version {
            major: bytes[4],
            minor: bytes[5],
            patch: bytes[6],
            build: bytes[7],
        };
        if !version.is_supported() {
            return Err(ContainerError::UnsupportedVersion {
                major: version.major,
                minor: version.minor,
                patch: version.patch,
                build: version.build,
            });
        }

        for (byte_index, &byte) in bytes[8..11].iter().enumerate() {
            if byte != 0 {
                return Err(ContainerError::ReservedFlagBitsSet {
                    byte_index: 8 + byte_index,
                    value: byte,
                });
            }
        }

        let flags = Flags::from_bits(u32::from(bytes[11]));
        flags.check_reserved_bits()?;

        let ext_header_len = u16::from_le_bytes(bytes[12..14].try_into().unwrap());

        Ok((
            Self {
                version,
                flags,
                ext_header_len,
            },
            HEADER_LEN,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_write_and_read() {
        let header = Header::new(Flags::default().with(Flags::HAS_LIPI).with(Flags::INTERLEAVED));
        let bytes = header.write();
        let (parsed, consumed) = Header::read(&bytes).unwrap();
        assert_eq!(consumed, HEADER_LEN);
        assert_eq!(parsed, header);
        assert!(parsed.flags.has(Flags::HAS_LIPI));
        assert!(parsed.flags.has(Flags::INTERLEAVED));
        assert!(!parsed.flags.has(Flags::VEDIC));
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = Header::new(Flags::default()).write();
        bytes[0] = b'X';
        assert!(matches!(
            Header::read(&bytes),
            Err(ContainerError::BadMagic { .. })
        ));
    }

    #[test]
    fn truncated_header_is_rejected() {
        assert!(matches!(
            Header::read(&[0u8; 4]),
            Err(ContainerError::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn reserved_flag_bit_is_rejected() {
        let mut bytes = Header::new(Flags::default()).write();
        bytes[11] = 0b1000_0000; // bit 7 of the flag byte, outside the known set
        assert!(matches!(
            Header::read(&bytes),
            Err(ContainerError::ReservedFlagBitsSet { .. })
        ));
    }

    #[test]
    fn nonzero_byte_in_flags_padding_is_rejected() {
        let mut bytes = Header::new(Flags::default()).write();
        bytes[9] = 0x01;
        assert!(matches!(
            Header::read(&bytes),
            Err(ContainerError::ReservedFlagBitsSet { .. })
        ));
    }

    #[test]
    fn numeral_extension_version_is_accepted() {
        let mut bytes = Header::new(Flags::default()).write();
        bytes[7] = NUMERAL_EXTENSION_VERSION.build;
        let (parsed, _) = Header::read(&bytes).unwrap();
        assert_eq!(parsed.version, NUMERAL_EXTENSION_VERSION);
    }

    #[test]
    fn flag_byte_occupies_byte_11() {
        let header = Header::new(Flags::default().with(Flags::HAS_LIPI));
        let bytes = header.write();
        assert_eq!(bytes[8], 0);
        assert_eq!(bytes[9], 0);
        assert_eq!(bytes[10], 0);
        assert_eq!(bytes[11], Flags::HAS_LIPI as u8);
    }
}
