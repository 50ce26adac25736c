//! The extraction driver: walks a decoded container's chunks, applies the
//! chunk-level drop table, and (for `DATA` chunks) the event-level filter.

use slbc_prakriya::{ChunkType, OwnedChunk};
use slbc_types::StreamEvent;

use crate::filter::filter_events;
use crate::mode::{chunk_action, ChunkAction, ExtractionMode};

/// One surviving chunk after extraction: `DATA` chunks are decoded and
/// filtered to an event stream, everything else passes its payload
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedChunk {
    Data(Vec<StreamEvent>),
    Other { chunk_type: ChunkType, payload: Vec<u8> },
}

/// Runs `mode`'s extraction over every chunk in `chunks`, dropping
/// whichever the decision table says to drop and decoding+filtering
/// `DATA` chunks in place.
pub fn extract(
    mode: ExtractionMode,
    chunks: &[OwnedChunk],
) -> Result<Vec<ExtractedChunk>, slbc_types::SlbcError> {
    let mut out = Vec::new();

    for chunk in chunks {
        if chunk_action(mode, chunk.chunk_type) == ChunkAction::Drop {
            continue;
        }

        if chunk.chunk_type == ChunkType::Data {
            let events = slbc_parikshak::decode(&chunk.payload)?;
            out.push(ExtractedChunk::Data(filter_events(mode, events)));
        } else {
            out.push(ExtractedChunk::Other {
                chunk_type: chunk.chunk_type,
                payload: chunk.payload.clone(),
            });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slbc_prakriya::ChunkType;

    fn data_chunk(iast: &str) -> OwnedChunk {
        OwnedChunk {
            chunk_type: ChunkType::Data,
            payload: slbc_lekhya::encode(iast).unwrap(),
        }
    }

    #[test]
    fn patha_mode_drops_dict_chunks_and_decodes_data() {
        let chunks = vec![
            data_chunk("kṛṣṇa"),
            OwnedChunk {
                chunk_type: ChunkType::Dict,
                payload: vec![0x00, 0x00],
            },
        ];
        let extracted = extract(ExtractionMode::Patha, &chunks).unwrap();
        assert_eq!(extracted.len(), 1);
        assert!(matches!(extracted[0], ExtractedChunk::Data(_)));
    }

    #[test]
    fn vyakhya_mode_keeps_dict_chunks() {
        let chunks = vec![OwnedChunk {
            chunk_type: ChunkType::Dict,
            payload: vec![0x00, 0x00],
        }];
        let extracted = extract(ExtractionMode::Vyakhya, &chunks).unwrap();
        assert_eq!(extracted.len(), 1);
        assert!(matches!(extracted[0], ExtractedChunk::Other { .. }));
    }

    #[test]
    fn bhasha_only_strips_lipi_events_from_data_chunk() {
        let chunks = vec![data_chunk("dharma kṣetre")];
        let extracted = extract(ExtractionMode::BhashaOnly, &chunks).unwrap();
        match &extracted[0] {
            ExtractedChunk::Data(events) => {
                assert!(!events.contains(&StreamEvent::Space));
            }
            other => panic!("expected Data, got {other:?}"),
        }
    }
}
