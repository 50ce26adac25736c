//! Byte-level phoneme classification and IAST/Devanāgarī tables.
//!
//! This crate is the foundation every other SLBC crate builds on: it owns
//! the svara/vyañjana bit layouts and the static tables that translate
//! between an IAST token, a phoneme byte, and a Devanāgarī glyph. Nothing
//! here tokenizes running text or walks a stream; see `slbc-lipi` and
//! `slbc-lekhya`/`slbc-parikshak` for that.

pub mod classify;
pub mod devanagari;
pub mod normalize;
pub mod svara;
pub mod vyanjana;

pub use classify::{
    bhasha, is_bhasha_control, is_lipi_control, is_non_varga, is_reserved, is_svara, is_varga,
    is_vyanjana, lipi,
};
pub use svara::{Accent, Grade, Quantity, Series, Svara};
pub use vyanjana::Varga;

/// Looks up the byte for any IAST phoneme token (vowel or consonant).
#[must_use]
pub fn byte_for_token(token: &str) -> Option<u8> {
    svara::byte_for_token(token).or_else(|| vyanjana::byte_for_token(token))
}

/// Looks up the IAST token for any phoneme byte (vowel or consonant).
#[must_use]
pub fn token_for_byte(byte: u8) -> Option<&'static str> {
    if is_svara(byte) {
        svara::token_for_byte(byte)
    } else {
        vyanjana::token_for_byte(byte)
    }
}
