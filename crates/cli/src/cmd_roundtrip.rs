use std::process::ExitCode;

use crate::exit;
use crate::io_util::read_text_input;

/// Encodes then decodes `input` and reports the first point where the
/// round-tripped IAST disagrees with the source. Reports only the first
/// disagreement, not all of them.
pub fn run(input: Option<&str>) -> ExitCode {
    let (_, text) = match read_text_input(input) {
        Ok(v) => v,
        Err(e) => return exit::report_io(e),
    };
    let source = text.trim_end_matches('\n');

    let stream = match slbc_lekhya::encode(source) {
        Ok(s) => s,
        Err(e) => return exit::report(e),
    };
    let events = match slbc_parikshak::decode(&stream) {
        Ok(e) => e,
        Err(e) => return exit::report_slbc(&e),
    };
    let decoded = slbc_parikshak::events_to_iast(&events);

    match first_disagreement(source, &decoded) {
        None => {
            println!("OK: {} characters round-trip cleanly", source.chars().count());
            ExitCode::SUCCESS
        }
        Some((index, a, b)) => {
            eprintln!("error: round-trip mismatch at character {index}: expected {a:?}, got {b:?}");
            exit::user_error()
        }
    }
}

fn first_disagreement(source: &str, decoded: &str) -> Option<(usize, char, char)> {
    let mut a_chars = source.chars();
    let mut b_chars = decoded.chars();
    let mut index = 0;
    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(a), Some(b)) if a == b => index += 1,
            (Some(a), Some(b)) => return Some((index, a, b)),
            (Some(a), None) => return Some((index, a, '\0')),
            (None, Some(b)) => return Some((index, '\0', b)),
            (None, None) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_no_disagreement() {
        assert_eq!(first_disagreement("kṛṣṇa", "kṛṣṇa"), None);
    }

    #[test]
    fn finds_the_first_mismatch() {
        assert_eq!(first_disagreement("kama", "kama!"), Some((4, '\0', '!')));
    }
}
