use std::process::ExitCode;

use slbc_prakriya::{read_container, ChunkType};

use crate::exit;
use crate::io_util::read_binary_input;
use crate::Script;

pub fn run(input: Option<&str>, to: Script) -> ExitCode {
    let bytes = match read_binary_input(input) {
        Ok(b) => b,
        Err(e) => return exit::report_io(e),
    };

    let (_, chunks) = match read_container(&bytes) {
        Ok(v) => v,
        Err(e) => return exit::report_slbc(&e.into()),
    };

    let mut rendered = Vec::new();
    for chunk in &chunks {
        if chunk.chunk_type != ChunkType::Data {
            continue;
        }
        let events = match slbc_parikshak::decode(&chunk.payload) {
            Ok(e) => e,
            Err(e) => return exit::report_slbc(&e),
        };
        rendered.push(match to {
            Script::Iast => slbc_parikshak::events_to_iast(&events),
            Script::Devanagari => slbc_parikshak::events_to_devanagari(&events),
        });
    }

    println!("{}", rendered.join(""));
    ExitCode::SUCCESS
}
