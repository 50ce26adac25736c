//! Registry binary format: a 12-byte header followed by packed entries.
//!
//! Header: `[magic: 4][version: u16 LE][entry_count: u32 LE][reserved: 2]`.
//! Entry: `[id: ULEB128][iast_len: ULEB128][iast: utf8][meta_len: ULEB128]
//! [metadata: meta_len bytes]`. Metadata is length-prefixed so a reader
//! never needs kind-specific knowledge to step over an entry it doesn't
//! otherwise care about.

use slbc_types::{uleb128, RegistryError, SlbcError};

use crate::entry::{Entry, RegistryKind};

const HEADER_LEN: usize = 12;

/// Serializes a full registry: header plus every entry, in the order
/// given (append-only files keep insertion order as ID order).
#[must_use]
pub fn write_registry(kind: RegistryKind, version: u16, entries: &[Entry]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + entries.len() * 16);
    out.extend(kind.magic());
    out.extend(version.to_le_bytes());
    out.extend((entries.len() as u32).to_le_bytes());
    out.extend([0u8, 0u8]); // reserved

    for entry in entries {
        out.extend(uleb128::encode(entry.id as u32));
        out.extend(uleb128::encode(entry.iast.len() as u32));
        out.extend(entry.iast.as_bytes());
        out.extend(uleb128::encode(entry.metadata.len() as u32));
        out.extend(&entry.metadata);
    }

    out
}

/// Parses a registry, checking the magic against `expected_kind`.
pub fn read_registry(
    bytes: &[u8],
    expected_kind: RegistryKind,
) -> Result<(u16, Vec<Entry>), SlbcError> {
    if bytes.len() < HEADER_LEN {
        return Err(RegistryError::BadMagic {
            found: [0, 0, 0, 0],
            expected: expected_kind.magic(),
        }
        .into());
    }

    let mut found = [0u8; 4];
    found.copy_from_slice(&bytes[0..4]);
    if found != expected_kind.magic() {
        return Err(RegistryError::BadMagic {
            found,
            expected: expected_kind.magic(),
        }
        .into());
    }

    let version = u16::from_le_bytes(bytes[4..6].try_into().unwrap());
    let declared_count = u32::from_le_bytes(bytes[6..10].try_into().unwrap());

    let mut offset = HEADER_LEN;
    let mut entries = Vec::new();

    while offset < bytes.len() {
        let (id, id_len) = uleb128::decode(&bytes[offset..], offset)?;
        offset += id_len;
        let (iast_len, len_len) = uleb128::decode(&bytes[offset..], offset)?;
        offset += len_len;

        let iast_end = offset + iast_len as usize;
        if iast_end > bytes.len() {
            return Err(RegistryError::TruncatedEntry {
                offset,
                needed: iast_len as usize,
                have: bytes.len() - offset,
            }
            .into());
        }
        let iast = String::from_utf8_lossy(&bytes[offset..iast_end]).into_owned();
        offset = iast_end;

        let (meta_len, meta_len_len) = uleb128::decode(&bytes[offset..], offset)?;
        offset += meta_len_len;
        let meta_end = offset + meta_len as usize;
        if meta_end > bytes.len() {
            return Err(RegistryError::TruncatedEntry {
                offset,
                needed: meta_len as usize,
                have: bytes.len() - offset,
            }
            .into());
        }
        let metadata = bytes[offset..meta_end].to_vec();
        offset = meta_end;

        entries.push(Entry { id, iast, metadata });
    }

    if entries.len() as u32 != declared_count {
        return Err(RegistryError::EntryCountMismatch {
            declared: declared_count,
            parsed: entries.len() as u32,
        }
        .into());
    }

    Ok((version, entries))
}
