//! Exit code mapping: `0` success, `1` user error, `2` format error,
//! `3` I/O error.

use std::process::ExitCode;

use slbc_types::SlbcError;

pub fn user_error() -> ExitCode {
    ExitCode::from(1)
}

pub fn format_error() -> ExitCode {
    ExitCode::from(2)
}

pub fn io_error() -> ExitCode {
    ExitCode::from(3)
}

/// Maps a library error to its exit code per the error-kind taxonomy.
#[must_use]
pub fn for_slbc_error(e: &SlbcError) -> ExitCode {
    match e {
        SlbcError::InputEncoding(_) | SlbcError::Domain(_) => user_error(),
        SlbcError::Container(_) | SlbcError::Span(_) | SlbcError::Registry(_) | SlbcError::Invariant(_) => {
            format_error()
        }
        SlbcError::Io(_) => io_error(),
    }
}

pub fn report(e: impl std::fmt::Display) -> ExitCode {
    eprintln!("error: {e}");
    user_error()
}

pub fn report_slbc(e: &SlbcError) -> ExitCode {
    eprintln!("error: {e}");
    for_slbc_error(e)
}

pub fn report_io(e: impl std::fmt::Display) -> ExitCode {
    eprintln!("error: {e}");
    io_error()
}
