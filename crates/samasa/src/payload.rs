//! DICT chunk payload: `registry-type (1) | mode (1) | mode-specific`.

use slbc_kosha::{Entry, RegistryKind};
use slbc_types::{uleb128, ContainerError};

use crate::inline_entries;
use crate::registry_type::{registry_kind_from_byte, registry_type_byte};

const MODE_EMBEDDED: u8 = 0x00;
const MODE_EXTERNAL: u8 = 0x01;
const MODE_HYBRID: u8 = 0x02;

#[derive(Debug, Clone, PartialEq)]
pub enum DictPayload {
    Embedded {
        kind: RegistryKind,
        entries: Vec<Entry>,
    },
    External {
        kind: RegistryKind,
        version: u16,
        filename: String,
    },
    Hybrid {
        kind: RegistryKind,
        version: u16,
        filename: String,
        overrides: Vec<Entry>,
    },
}

impl DictPayload {
    #[must_use]
    pub fn kind(&self) -> RegistryKind {
        match self {
            Self::Embedded { kind, .. }
            | Self::External { kind, .. }
            | Self::Hybrid { kind, .. } => *kind,
        }
    }

    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![registry_type_byte(self.kind())];
        match self {
            Self::Embedded { entries, .. } => {
                out.push(MODE_EMBEDDED);
                out.extend(inline_entries::encode(entries));
            }
            Self::External {
                version, filename, ..
            } => {
                out.push(MODE_EXTERNAL);
                out.extend(version.to_le_bytes());
                out.extend(uleb128::encode(filename.len() as u32));
                out.extend(filename.as_bytes());
            }
            Self::Hybrid {
                version,
                filename,
                overrides,
                ..
            } => {
                out.push(MODE_HYBRID);
                out.extend(version.to_le_bytes());
                out.extend(uleb128::encode(filename.len() as u32));
                out.extend(filename.as_bytes());
                out.extend(inline_entries::encode(overrides));
            }
        }
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ContainerError> {
        if bytes.len() < 2 {
            return Err(ContainerError::TruncatedChunk {
                offset: 0,
                declared: 2,
                have: bytes.len(),
            });
        }
        let kind = registry_kind_from_byte(bytes[0], 0)?;
        let mode = bytes[1];
        let mut offset = 2;

        match mode {
            MODE_EMBEDDED => {
                let (entries, _) = inline_entries::decode(bytes, offset)?;
                Ok(Self::Embedded { kind, entries })
            }
            MODE_EXTERNAL => {
                let (version, filename, new_offset) = decode_external_header(bytes, offset)?;
                let _ = new_offset;
                Ok(Self::External {
                    kind,
                    version,
                    filename,
                })
            }
            MODE_HYBRID => {
                let (version, filename, after_header) = decode_external_header(bytes, offset)?;
                offset = after_header;
                let (overrides, _) = inline_entries::decode(bytes, offset)?;
                Ok(Self::Hybrid {
                    kind,
                    version,
                    filename,
                    overrides,
                })
            }
            other => Err(ContainerError::UnknownChunkType {
                offset: 1,
                chunk_type: other,
            }),
        }
    }
}

fn decode_external_header(
    bytes: &[u8],
    offset: usize,
) -> Result<(u16, String, usize), ContainerError> {
    if offset + 2 > bytes.len() {
        return Err(ContainerError::TruncatedChunk {
            offset,
            declared: 2,
            have: bytes.len().saturating_sub(offset),
        });
    }
    let version = u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap());
    let mut offset = offset + 2;

    let (name_len, len_len) = uleb128::decode(bytes, offset)?;
    offset += len_len;
    let name_end = offset + name_len as usize;
    if name_end > bytes.len() {
        return Err(ContainerError::TruncatedChunk {
            offset,
            declared: name_len,
            have: bytes.len() - offset,
        });
    }
    let filename = String::from_utf8_lossy(&bytes[offset..name_end]).into_owned();
    Ok((version, filename, name_end))
}
