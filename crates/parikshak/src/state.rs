//! The decoder's high-level position in the byte stream. Tracked
//! separately from the scanning cursor so a caller inspecting a partial
//! decode (e.g. in a diagnostic) can ask "what were we inside when this
//! broke".

/// Where the decoder is relative to pada/span structure. The byte
/// stream itself carries no explicit state tag; this is derived purely
/// from which control byte was last seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Between padas/spans, at the top level of the stream.
    Idle,
    /// Inside a `PADA_START..PADA_END` run, collecting phoneme bytes.
    InPada,
    /// Inside a `META_START..META_END` run, collecting payload bytes.
    InMeta,
    /// Just consumed `SANKHYA_START` and its ULEB128 count, now reading
    /// that many pada-wrapped digit words.
    InSankhyaSpan { remaining: u32 },
    /// Just consumed `NUM`, reading glyph bytes until the next control
    /// byte.
    InNumSpan,
}
