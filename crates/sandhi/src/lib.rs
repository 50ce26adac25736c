//! The Pāṇinian transformation algebra: pure `u8 -> u8` operations over
//! phoneme bytes, grouped into vowel-side (guṇa/vṛddhi/length/samprasāraṇa)
//! and consonant-side (jaśtva/voicing/aspiration/nasalization) kernels.
//!
//! Every op here is total given a well-formed precondition and fails with
//! a [`slbc_types::DomainError`] otherwise; none of them walk a stream or
//! know about padas, chunks, or registries.

pub mod consonant;
pub mod vowel;

pub use consonant::{homorganic_nasal_for, jastva, make_nasal, toggle_aspiration, toggle_voice};
pub use vowel::{dirgha, guna, hrasva, samprasarana_to_svara, savarna_dirgha, vrddhi};
