use thiserror::Error;

/// Unrecognized input at the tokenizer boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputEncodingError {
    #[error("unrecognized IAST token {text:?} at byte offset {offset}")]
    UnrecognizedToken { offset: usize, text: String },

    #[error("illegal character {c:?} in numeric token at byte offset {offset}")]
    IllegalDigitChar { offset: usize, c: char },
}

/// Algebra kernel precondition violations. These are programmer errors, not
/// data errors, and must surface loudly rather than be silently corrected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("byte {byte:#04x} is not a svara, required by {op}")]
    NotASvara { op: &'static str, byte: u8 },

    #[error("byte {byte:#04x} is not a varga consonant, required by {op}")]
    NotAVarga { op: &'static str, byte: u8 },

    #[error("savarna_dirgha requires matching series, got {a:#04x} and {b:#04x}")]
    SeriesMismatch { a: u8, b: u8 },

    #[error("{byte:#04x} is not one of {{ya, va, ra, la}}, required by samprasarana_to_svara")]
    NotASamprasaranaSource { byte: u8 },
}

/// Container-format errors: bad magic, truncated frames, malformed
/// varint-32 lengths, missing EOF, non-zero reserved flag bits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("bad magic bytes {found:?}, expected {expected:?}")]
    BadMagic { found: [u8; 4], expected: [u8; 4] },

    #[error("unsupported version {major}.{minor}.{patch}.{build}")]
    UnsupportedVersion {
        major: u8,
        minor: u8,
        patch: u8,
        build: u8,
    },

    #[error("truncated header: needed {needed} bytes, had {have}")]
    TruncatedHeader { needed: usize, have: usize },

    #[error("truncated chunk at offset {offset}: declared length {declared}, had {have}")]
    TruncatedChunk {
        offset: usize,
        declared: u32,
        have: usize,
    },

    #[error("ULEB128 value at offset {offset} uses more than 5 bytes")]
    Uleb128Overlong { offset: usize },

    #[error("ULEB128 value at offset {offset} overflows u32")]
    Uleb128Overflow { offset: usize },

    #[error("file is missing the terminating EOF chunk")]
    MissingEof,

    #[error("reserved flag bits non-zero at byte {byte_index}: {value:#010b}")]
    ReservedFlagBitsSet { byte_index: usize, value: u8 },

    #[error("unknown chunk type {chunk_type:#04x} at offset {offset} (strict mode)")]
    UnknownChunkType { offset: usize, chunk_type: u8 },
}

/// SAṄKHYĀ/NUM span errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("SAṄKHYĀ count {count} exceeded stream end after {consumed} digit-padas")]
    CountExceedsStream { count: u32, consumed: u32 },

    #[error("digit-pada at offset {offset} is not in the closed digit-word vocabulary")]
    UnknownDigitWord { offset: usize },

    #[error("NUM span byte {byte:#04x} at offset {offset} is outside 0x00..=0x0F")]
    NumByteOutOfRange { offset: usize, byte: u8 },
}

/// Registry errors: malformed binary, ID collisions on merge, unresolved
/// external references.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("bad registry magic {found:?}, expected {expected:?}")]
    BadMagic { found: [u8; 4], expected: [u8; 4] },

    #[error("registry header declares {declared} entries, but only {parsed} were parseable")]
    EntryCountMismatch { declared: u32, parsed: u32 },

    #[error("entry id {id} already present in the merged table (ids are append-only)")]
    IdCollision { id: u64 },

    #[error("external registry file {filename:?} is unavailable: {reason}")]
    ExternalFileUnavailable { filename: String, reason: String },

    #[error("id {id} referenced by META is not resolvable in the active registry")]
    UnresolvedId { id: u64 },

    #[error("malformed TSV row at line {line}: {reason}")]
    MalformedTsvRow { line: usize, reason: String },

    #[error("entry at offset {offset} declares a length that runs past the end of the buffer ({needed} bytes needed, {have} available)")]
    TruncatedEntry {
        offset: usize,
        needed: usize,
        have: usize,
    },
}

/// The decoder reached a transition the state machine's table does not
/// define. Always a bug, never a data error.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invariant violated: {0}")]
pub struct InvariantError(pub String);

/// The union of all SLBC error kinds, for callers (the CLI, registry merge
/// across crate boundaries) that need one error type to propagate with `?`.
#[derive(Debug, Error)]
pub enum SlbcError {
    #[error(transparent)]
    InputEncoding(#[from] InputEncodingError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Container(#[from] ContainerError),
    #[error(transparent)]
    Span(#[from] SpanError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Invariant(#[from] InvariantError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
