/// One event in the token stream produced by the encoder and consumed by the
/// decoder.
///
/// `Phoneme` carries a raw svara/vyañjana byte; everything else is a
/// bhāṣā/lipi control event. `SankhyaSpan` and `NumSpan` carry their already-
/// decoded payload rather than requiring callers to re-walk raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Phoneme(u8),
    PadaStart,
    PadaEnd,
    PhonStart,
    PhonEnd,
    Space,
    Danda,
    DoubleDanda,
    Avagraha,
    /// ANU (0x36), distinct from anusvāra `ṃ` (0x3A). Ordering relative
    /// to the svara it modifies is preserved from the source byte order,
    /// never reordered.
    Anu,
    /// SAṄKHYĀ span: a ULEB128 count followed by that many pada-wrapped
    /// digit-words, read right-to-left (units first).
    SankhyaSpan {
        count: u32,
        digit_padas: Vec<Vec<u8>>,
    },
    /// NUM span: lipi-layer digit glyphs in visual left-to-right order,
    /// including leading zeros.
    NumSpan { glyphs: Vec<u8> },
    MetaEnvelope(MetaEnvelope),
}

/// A META chunk's payload, carried through without interpreting sub-tag
/// internals beyond recognizing the `0xFD`/`0xFE` markers; vyākaraṇa
/// sub-field wire formats are not yet fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaEnvelope {
    /// `(marker, sub-tag bytes)` pairs found while scanning `raw`.
    pub markers: Vec<(u8, Vec<u8>)>,
    /// The full, uninterpreted payload bytes of the META block.
    pub raw: Vec<u8>,
}

impl MetaEnvelope {
    pub const KARAKA_MARKER: u8 = 0xFD;
    pub const SANDHI_HISTORY_MARKER: u8 = 0xFE;

    /// Scan `raw` for the two recognized sub-tag markers and record their
    /// position without decoding their payload shape.
    pub fn from_raw(raw: Vec<u8>) -> Self {
        let mut markers = Vec::new();
        let mut i = 0;
        while i < raw.len() {
            let b = raw[i];
            if b == Self::KARAKA_MARKER || b == Self::SANDHI_HISTORY_MARKER {
                markers.push((b, raw[i..].to_vec()));
            }
            i += 1;
        }
        Self { markers, raw }
    }
}
