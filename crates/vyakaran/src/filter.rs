//! Per-event filtering of a decoded [`StreamEvent`] sequence for a given
//! extraction mode, the within-`DATA`-chunk half of the decision table
//! (the other half, chunk-level drop, lives in [`crate::mode`]).

use slbc_types::StreamEvent;

use crate::mode::ExtractionMode;

/// Filters `events` according to `mode`. Bhāṣā bytes (phonemes, pada and
/// phon-group markers, anusvāra marker) and the SAṄKHYĀ span always
/// survive; lipi punctuation and the NUM span are stripped only in
/// `BhashaOnly`; the META envelope is stripped in every mode but
/// `Vyakhya`.
#[must_use]
pub fn filter_events(mode: ExtractionMode, events: Vec<StreamEvent>) -> Vec<StreamEvent> {
    events.into_iter().filter(|e| keep(mode, e)).collect()
}

fn keep(mode: ExtractionMode, event: &StreamEvent) -> bool {
    match event {
        StreamEvent::MetaEnvelope(_) => mode == ExtractionMode::Vyakhya,
        StreamEvent::Space
        | StreamEvent::Danda
        | StreamEvent::DoubleDanda
        | StreamEvent::Avagraha => mode != ExtractionMode::BhashaOnly,
        StreamEvent::NumSpan { .. } => mode != ExtractionMode::BhashaOnly,
        StreamEvent::Phoneme(_)
        | StreamEvent::PadaStart
        | StreamEvent::PadaEnd
        | StreamEvent::PhonStart
        | StreamEvent::PhonEnd
        | StreamEvent::Anu
        | StreamEvent::SankhyaSpan { .. } => true,
    }
}
