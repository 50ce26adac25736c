//! Stdin/file reads and writes shared by every subcommand.

use std::io::{Read, Write};

/// Reads text input from stdin or a file. Returns `(source_name, text)`.
pub fn read_text_input(input: Option<&str>) -> Result<(String, String), String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(("<stdin>".to_string(), buf))
        }
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            Ok((path.to_string(), text))
        }
    }
}

/// Reads binary input from a file (or stdin for `-`/`None`). `.slbc`
/// containers and registry blobs are binary-safe; they never come from a
/// CLI positional string.
pub fn read_binary_input(input: Option<&str>) -> Result<Vec<u8>, String> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(buf)
        }
        Some(path) => std::fs::read(path).map_err(|e| format!("{path}: {e}")),
    }
}

/// Writes binary output to a file (or stdout for `-`/`None`).
pub fn write_binary_output(output: Option<&str>, bytes: &[u8]) -> Result<(), String> {
    match output {
        None | Some("-") => std::io::stdout()
            .write_all(bytes)
            .map_err(|e| format!("failed to write stdout: {e}")),
        Some(path) => std::fs::write(path, bytes).map_err(|e| format!("{path}: {e}")),
    }
}
