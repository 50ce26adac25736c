use std::process::ExitCode;

use slbc_prakriya::read_container;
use slbc_vyakaran::{extract, ExtractedChunk, ExtractionMode};

use crate::exit;
use crate::io_util::read_binary_input;
use crate::ExtractionModeArg;

fn to_extraction_mode(mode: ExtractionModeArg) -> ExtractionMode {
    match mode {
        ExtractionModeArg::Patha => ExtractionMode::Patha,
        ExtractionModeArg::BhashaOnly => ExtractionMode::BhashaOnly,
        ExtractionModeArg::Vyakhya => ExtractionMode::Vyakhya,
    }
}

pub fn run(input: Option<&str>, mode: ExtractionModeArg) -> ExitCode {
    let bytes = match read_binary_input(input) {
        Ok(b) => b,
        Err(e) => return exit::report_io(e),
    };

    let (_, chunks) = match read_container(&bytes) {
        Ok(v) => v,
        Err(e) => return exit::report_slbc(&e.into()),
    };

    let extracted = match extract(to_extraction_mode(mode), &chunks) {
        Ok(v) => v,
        Err(e) => return exit::report_slbc(&e),
    };

    for item in &extracted {
        match item {
            ExtractedChunk::Data(events) => {
                println!("{}", slbc_parikshak::events_to_iast(events));
            }
            ExtractedChunk::Other { chunk_type, payload } => {
                println!("[{chunk_type:?} chunk, {} bytes]", payload.len());
            }
        }
    }

    ExitCode::SUCCESS
}
