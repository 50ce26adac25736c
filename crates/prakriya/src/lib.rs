//! The `.slbc` container format: a 14-byte header, an optional extended
//! header, a run of type-tagged length-prefixed chunks, and a
//! terminating `EOF` chunk. Everything here is little-endian byte
//! framing; the bhāṣā+lipi byte stream that lives inside a `DATA` chunk
//! is produced and consumed by `slbc-lekhya`/`slbc-parikshak`.

mod chunk;
mod container;
mod header;

pub use chunk::{eof_chunk, read_chunk, write_chunk, Chunk, ChunkType};
pub use container::{read_container, write_container, OwnedChunk};
pub use header::{
    Flags, Header, Version, HEADER_LEN, MAGIC, NUMERAL_EXTENSION_VERSION, SUPPORTED_VERSION,
};
