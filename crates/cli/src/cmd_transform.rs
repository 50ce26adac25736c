use std::process::ExitCode;

use slbc_sandhi::consonant::{homorganic_nasal_for, jastva, make_nasal, toggle_aspiration, toggle_voice};
use slbc_sandhi::vowel::{dirgha, guna, hrasva, samprasarana_to_svara, savarna_dirgha, vrddhi};

use crate::exit;
use crate::hex;
use crate::TransformOp;

pub fn run(op: TransformOp, bytes: &[String]) -> ExitCode {
    let parsed: Result<Vec<u8>, String> = bytes.iter().map(|s| hex::decode_byte(s)).collect();
    let parsed = match parsed {
        Ok(v) => v,
        Err(e) => return exit::report(e),
    };

    let result = match (op, parsed.as_slice()) {
        (TransformOp::Guna, [a]) => guna(*a),
        (TransformOp::Vrddhi, [a]) => vrddhi(*a),
        (TransformOp::Dirgha, [a]) => dirgha(*a),
        (TransformOp::Hrasva, [a]) => hrasva(*a),
        (TransformOp::SavarnaDirgha, [a, b]) => savarna_dirgha(*a, *b),
        (TransformOp::SamprasaranaToSvara, [a]) => samprasarana_to_svara(*a),
        (TransformOp::Jastva, [a]) => jastva(*a),
        (TransformOp::ToggleVoice, [a]) => toggle_voice(*a),
        (TransformOp::ToggleAspiration, [a]) => toggle_aspiration(*a),
        (TransformOp::MakeNasal, [a]) => make_nasal(*a),
        (TransformOp::HomorganicNasalFor, [a]) => homorganic_nasal_for(*a),
        (_, got) => {
            return exit::report(format!(
                "this op expects a different number of byte arguments, got {}",
                got.len()
            ))
        }
    };

    match result {
        Ok(byte) => {
            let token = slbc_varna::token_for_byte(byte).unwrap_or("-");
            println!("{byte:#04x} ({token})");
            ExitCode::SUCCESS
        }
        Err(e) => exit::report(e),
    }
}
