use slbc_prakriya::{ChunkType, OwnedChunk};
use slbc_types::StreamEvent;
use slbc_vyakaran::{extract, ExtractedChunk, ExtractionMode};

fn data_chunk(iast: &str) -> OwnedChunk {
    OwnedChunk {
        chunk_type: ChunkType::Data,
        payload: slbc_lekhya::encode(iast).unwrap(),
    }
}

#[test]
fn patha_keeps_readable_text_and_drops_dict() {
    let chunks = vec![
        data_chunk("kṛṣṇa dharmakṣetre"),
        OwnedChunk {
            chunk_type: ChunkType::Dict,
            payload: vec![0x00, 0x00],
        },
    ];
    let extracted = extract(ExtractionMode::Patha, &chunks).unwrap();
    assert_eq!(extracted.len(), 1);
    match &extracted[0] {
        ExtractedChunk::Data(events) => {
            assert!(events.contains(&StreamEvent::Space));
        }
        other => panic!("expected Data, got {other:?}"),
    }
}

#[test]
fn bhasha_only_drops_punctuation_but_keeps_phonemes() {
    let chunks = vec![data_chunk("rāma, sītā")];
    let extracted = extract(ExtractionMode::BhashaOnly, &chunks).unwrap();
    match &extracted[0] {
        ExtractedChunk::Data(events) => {
            assert!(events.iter().any(|e| matches!(e, StreamEvent::Phoneme(_))));
            assert!(!events.iter().any(|e| matches!(e, StreamEvent::Danda)));
        }
        other => panic!("expected Data, got {other:?}"),
    }
}

#[test]
fn vyakhya_includes_dict_chunks_verbatim() {
    let chunks = vec![
        data_chunk("gam"),
        OwnedChunk {
            chunk_type: ChunkType::Dict,
            payload: vec![0x00, 0x01, 0x02],
        },
    ];
    let extracted = extract(ExtractionMode::Vyakhya, &chunks).unwrap();
    assert_eq!(extracted.len(), 2);
    assert!(matches!(extracted[1], ExtractedChunk::Other { .. }));
}
