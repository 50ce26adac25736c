//! The three extraction modes and their per-chunk-type, per-event-kind
//! decision table.

use slbc_prakriya::ChunkType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Readable text: bhāṣā + lipi, META stripped, no DICT/ANVY.
    Patha,
    /// Phonemic content only: bhāṣā, no lipi, no META, no DICT/ANVY, NUM stripped.
    BhashaOnly,
    /// Fully analyzed text: bhāṣā + lipi + META + DICT/ANVY.
    Vyakhya,
}

/// Whether a chunk of `chunk_type` is kept or dropped wholesale in `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkAction {
    Emit,
    Drop,
}

#[must_use]
pub const fn chunk_action(mode: ExtractionMode, chunk_type: ChunkType) -> ChunkAction {
    match (mode, chunk_type) {
        (ExtractionMode::Vyakhya, _) => ChunkAction::Emit,
        (_, ChunkType::Dict) => ChunkAction::Drop,
        (ExtractionMode::Patha | ExtractionMode::BhashaOnly, ChunkType::Meta) => ChunkAction::Drop,
        _ => ChunkAction::Emit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patha_drops_dict_and_meta_chunks() {
        assert_eq!(
            chunk_action(ExtractionMode::Patha, ChunkType::Dict),
            ChunkAction::Drop
        );
        assert_eq!(
            chunk_action(ExtractionMode::Patha, ChunkType::Meta),
            ChunkAction::Drop
        );
    }

    #[test]
    fn bhasha_only_drops_dict_and_meta_chunks() {
        assert_eq!(
            chunk_action(ExtractionMode::BhashaOnly, ChunkType::Dict),
            ChunkAction::Drop
        );
        assert_eq!(
            chunk_action(ExtractionMode::BhashaOnly, ChunkType::Meta),
            ChunkAction::Drop
        );
    }

    #[test]
    fn vyakhya_emits_every_chunk_type() {
        for chunk_type in [
            ChunkType::Data,
            ChunkType::Idx,
            ChunkType::Dict,
            ChunkType::Meta,
        ] {
            assert_eq!(
                chunk_action(ExtractionMode::Vyakhya, chunk_type),
                ChunkAction::Emit
            );
        }
    }

    #[test]
    fn data_and_idx_chunks_always_survive() {
        for mode in [
            ExtractionMode::Patha,
            ExtractionMode::BhashaOnly,
            ExtractionMode::Vyakhya,
        ] {
            assert_eq!(chunk_action(mode, ChunkType::Data), ChunkAction::Emit);
            assert_eq!(chunk_action(mode, ChunkType::Idx), ChunkAction::Emit);
        }
    }
}
