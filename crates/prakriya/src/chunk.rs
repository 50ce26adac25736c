//! Chunk framing: `[type: u8][length: ULEB128-32][payload]`, repeated
//! until the `EOF` chunk (`0xFF 0x00`). Chunk type bytes share the
//! numeric space with the bhāṣā control bytes in `slbc-varna`, but the
//! two never mix in the same buffer — a chunk type is only ever read at
//! the top level of a container, never inside a pada.

use slbc_types::{uleb128, ContainerError};

/// Known chunk types. `DATA` carries the interleaved bhāṣā+lipi stream,
/// `IDX` a registry index, `DICT` a DICT-chunk payload, `META` free-form
/// metadata, `EOF` terminates the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkType {
    Data,
    Idx,
    Dict,
    Meta,
    Eof,
}

impl ChunkType {
    const DATA: u8 = 0x01;
    const IDX: u8 = 0x06;
    const DICT: u8 = 0x07;
    const META: u8 = 0x08;
    const EOF: u8 = 0xFF;

    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Data => Self::DATA,
            Self::Idx => Self::IDX,
            Self::Dict => Self::DICT,
            Self::Meta => Self::META,
            Self::Eof => Self::EOF,
        }
    }

    /// Decodes a chunk type byte in strict mode: unknown bytes are an
    /// error rather than silently skipped.
    pub fn from_byte(byte: u8, offset: usize) -> Result<Self, ContainerError> {
        match byte {
            Self::DATA => Ok(Self::Data),
            Self::IDX => Ok(Self::Idx),
            Self::DICT => Ok(Self::Dict),
            Self::META => Ok(Self::Meta),
            Self::EOF => Ok(Self::Eof),
            chunk_type => Err(ContainerError::UnknownChunkType { offset, chunk_type }),
        }
    }
}

/// One decoded chunk: its type and a slice over its payload in the
/// source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub chunk_type: ChunkType,
    pub payload: &'a [u8],
}

/// Serializes `chunk_type` and `payload` as one framed chunk.
#[must_use]
pub fn write_chunk(chunk_type: ChunkType, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 6);
    out.push(chunk_type.byte());
    out.extend(uleb128::encode(payload.len() as u32));
    out.extend_from_slice(payload);
    out
}

/// The fixed two-byte EOF chunk: type `0xFF`, length `0`.
#[must_use]
pub fn eof_chunk() -> [u8; 2] {
    [ChunkType::EOF, 0x00]
}

/// Reads one chunk starting at `offset`. Returns the chunk and the
/// number of bytes consumed (type + length + payload).
pub fn read_chunk(bytes: &[u8], offset: usize) -> Result<(Chunk<'_>, usize), ContainerError> {
    let Some(&type_byte) = bytes.get(offset) else {
        return Err(ContainerError::TruncatedChunk {
            offset,
            declared: 0,
            have: 0,
        });
    };
    let chunk_type = ChunkType::from_byte(type_byte, offset)?;

    let len_start = offset + 1;
    let (len, len_bytes) = uleb128::decode(&bytes[len_start..], len_start)?;
    let payload_start = len_start + len_bytes;
    let payload_end = payload_start + len as usize;

    if payload_end > bytes.len() {
        return Err(ContainerError::TruncatedChunk {
            offset,
            declared: len,
            have: bytes.len() - payload_start,
        });
    }

    Ok((
        Chunk {
            chunk_type,
            payload: &bytes[payload_start..payload_end],
        },
        payload_end - offset,
    ))
}
