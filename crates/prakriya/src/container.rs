//! Assembles/reads a full `.slbc` container: header, a run of chunks,
//! and the terminating `EOF` chunk.

use slbc_types::ContainerError;

use crate::chunk::{eof_chunk, read_chunk, write_chunk, ChunkType};
use crate::header::{Flags, Header};

/// One decoded chunk, with its payload bytes owned rather than borrowed
/// from the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedChunk {
    pub chunk_type: ChunkType,
    pub payload: Vec<u8>,
}

/// Serializes a header followed by `chunks` followed by the EOF chunk.
#[must_use]
pub fn write_container(header: &Header, chunks: &[(ChunkType, Vec<u8>)]) -> Vec<u8> {
    let mut out = header.write().to_vec();
    for (chunk_type, payload) in chunks {
        out.extend(write_chunk(*chunk_type, payload));
    }
    out.extend(eof_chunk());
    out
}

/// Parses a full container: header, every chunk up to and including
/// `EOF`. Fails with [`ContainerError::MissingEof`] if the buffer runs
/// out before an EOF chunk is seen.
pub fn read_container(bytes: &[u8]) -> Result<(Header, Vec<OwnedChunk>), ContainerError> {
    let (header, mut offset) = Header::read(bytes)?;
    offset += header.ext_header_len as usize;

    let mut chunks = Vec::new();
    loop {
        let (chunk, consumed) = read_chunk(bytes, offset)?;
        if chunk.chunk_type == ChunkType::Eof {
            return Ok((header, chunks));
        }
        chunks.push(OwnedChunk {
            chunk_type: chunk.chunk_type,
            payload: chunk.payload.to_vec(),
        });
        offset += consumed;
        if offset >= bytes.len() {
            return Err(ContainerError::MissingEof);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_single_data_chunk() {
        let header = Header::new(Flags::default().with(Flags::INTERLEAVED));
        let chunks = vec![(ChunkType::Data, vec![0x00, 0x40])];
        let bytes = write_container(&header, &chunks);

        let (parsed_header, parsed_chunks) = read_container(&bytes).unwrap();
        assert_eq!(parsed_header, header);
        assert_eq!(parsed_chunks.len(), 1);
        assert_eq!(parsed_chunks[0].chunk_type, ChunkType::Data);
        assert_eq!(parsed_chunks[0].payload, vec![0x00, 0x40]);
    }

    #[test]
    fn missing_eof_is_rejected() {
        let header = Header::new(Flags::default());
        let mut bytes = header.write().to_vec();
        bytes.extend(write_chunk(ChunkType::Data, &[0x00]));
        // no EOF chunk appended
        assert!(matches!(
            read_container(&bytes),
            Err(ContainerError::MissingEof)
        ));
    }

    #[test]
    fn empty_container_is_just_header_and_eof() {
        let header = Header::new(Flags::default());
        let bytes = write_container(&header, &[]);
        let (_, chunks) = read_container(&bytes).unwrap();
        assert!(chunks.is_empty());
    }
}
