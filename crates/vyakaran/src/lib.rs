//! The extraction driver: three extraction modes (pāṭha, bhāṣā-only,
//! vyākhyā) and the chunk-type/event-kind decision table that implements
//! them over a decoded container.

mod driver;
mod filter;
mod mode;

pub use driver::{extract, ExtractedChunk};
pub use filter::filter_events;
pub use mode::{chunk_action, ChunkAction, ExtractionMode};
