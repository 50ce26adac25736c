use std::process::ExitCode;

use slbc_prakriya::{write_container, ChunkType, Flags, Header};

use crate::exit;
use crate::io_util::{read_text_input, write_binary_output};

pub fn run(input: Option<&str>, output: Option<&str>) -> ExitCode {
    let (_, text) = match read_text_input(input) {
        Ok(v) => v,
        Err(e) => return exit::report_io(e),
    };

    let stream = match slbc_lekhya::encode(text.trim_end_matches('\n')) {
        Ok(s) => s,
        Err(e) => return exit::report(e),
    };

    let header = Header::new(Flags::default().with(Flags::HAS_LIPI).with(Flags::INTERLEAVED));
    let bytes = write_container(&header, &[(ChunkType::Data, stream)]);

    match write_binary_output(output, &bytes) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit::report_io(e),
    }
}
