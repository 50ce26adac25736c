//! Stream encoder: turns a tokenized IAST source into the interleaved
//! bhāṣā (phoneme) + lipi (glyph/punctuation) byte stream described by the
//! container's PADA/SAṄKHYĀ/NUM wire framing.

mod encoder;
mod numeral;
mod pada;

pub use encoder::encode;
pub use numeral::encode_digit_run;
pub use pada::wrap_pada;
