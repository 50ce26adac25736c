//! Inline entry lists as they appear inside a DICT chunk's Embedded and
//! Hybrid-override blocks: `ULEB128 count` followed by that many
//! `[id][iast_len][iast][metadata]` records, same entry shape as the
//! registry binary format but without its 12-byte header.

use slbc_kosha::Entry;
use slbc_types::{uleb128, ContainerError};

pub fn encode(entries: &[Entry]) -> Vec<u8> {
    let mut out = uleb128::encode(entries.len() as u32);
    for entry in entries {
        out.extend(uleb128::encode(entry.id as u32));
        out.extend(uleb128::encode(entry.iast.len() as u32));
        out.extend(entry.iast.as_bytes());
        out.extend(&entry.metadata);
    }
    out
}

/// Decodes `count` entries starting at `offset`, assuming zero-length
/// metadata (DICT overrides carry no registry-specific metadata beyond the
/// spelling). Returns the parsed entries and the offset just past the
/// last one.
pub fn decode(bytes: &[u8], offset: usize) -> Result<(Vec<Entry>, usize), ContainerError> {
    let (count, len) = uleb128::decode(bytes, offset)?;
    let mut offset = offset + len;
    let mut entries = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let (id, id_len) = uleb128::decode(bytes, offset)?;
        offset += id_len;
        let (iast_len, len_len) = uleb128::decode(bytes, offset)?;
        offset += len_len;

        let iast_end = offset + iast_len as usize;
        if iast_end > bytes.len() {
            return Err(ContainerError::TruncatedChunk {
                offset,
                declared: iast_len,
                have: bytes.len() - offset,
            });
        }
        let iast = String::from_utf8_lossy(&bytes[offset..iast_end]).into_owned();
        offset = iast_end;

        entries.push(Entry {
            id,
            iast,
            metadata: Vec::new(),
        });
    }

    Ok((entries, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, iast: &str) -> Entry {
        Entry {
            id,
            iast: iast.to_string(),
            metadata: Vec::new(),
        }
    }

    #[test]
    fn round_trips_empty_list() {
        let bytes = encode(&[]);
        let (entries, offset) = decode(&bytes, 0).unwrap();
        assert!(entries.is_empty());
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn round_trips_several_entries() {
        let entries = vec![entry(1, "gam"), entry(2, "kr")];
        let bytes = encode(&entries);
        let (parsed, offset) = decode(&bytes, 0).unwrap();
        assert_eq!(parsed, entries);
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn truncated_iast_is_rejected() {
        let mut bytes = encode(&[entry(1, "gam")]);
        bytes.truncate(bytes.len() - 1);
        assert!(decode(&bytes, 0).is_err());
    }
}
