//! Shared vocabulary for the SLBC crates: token-stream events and the
//! top-level error taxonomy from the error handling design. Kept as a small,
//! dependency-light crate so every other SLBC crate can speak the same
//! event/error language without forming a dependency cycle.

mod error;
mod event;
pub mod uleb128;

pub use error::{
    ContainerError, DomainError, InputEncodingError, InvariantError, RegistryError, SlbcError,
    SpanError,
};
pub use event::{MetaEnvelope, StreamEvent};
