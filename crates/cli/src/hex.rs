//! Minimal hex codec for byte arguments and metadata blobs. No external
//! hex crate is in the dependency table, so this stays a handful of
//! lines rather than pulling one in for this alone.

pub fn decode(s: &str) -> Result<Vec<u8>, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() % 2 != 0 {
        return Err(format!("hex string {s:?} has odd length"));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| format!("invalid hex byte {:?}", &s[i..i + 2]))
        })
        .collect()
}

pub fn decode_byte(s: &str) -> Result<u8, String> {
    let bytes = decode(s)?;
    match bytes.as_slice() {
        [b] => Ok(*b),
        _ => Err(format!("expected exactly one byte, got {}", bytes.len())),
    }
}

#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
