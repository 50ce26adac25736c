//! DICT chunk codec: Embedded/External/Hybrid annotation payload
//! serialization and builtin-then-external-then-override resolution.

mod error;
mod inline_entries;
mod payload;
mod registry_type;
mod resolve;

pub use error::SamasaError;
pub use payload::DictPayload;
pub use registry_type::{registry_kind_from_byte, registry_type_byte};
pub use resolve::resolve;
