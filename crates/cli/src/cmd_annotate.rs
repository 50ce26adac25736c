use std::process::ExitCode;

use serde::Deserialize;
use slbc_kosha::{Entry, RegistryKind};
use slbc_prakriya::{read_container, write_container, ChunkType};
use slbc_samasa::DictPayload;

use crate::exit;
use crate::hex;
use crate::io_util::write_binary_output;
use crate::RegistryKindArg;

#[derive(Deserialize)]
struct JsonEntry {
    id: u64,
    iast: String,
    #[serde(default)]
    metadata_hex: String,
}

fn to_registry_kind(kind: RegistryKindArg) -> RegistryKind {
    match kind {
        RegistryKindArg::Dhatu => RegistryKind::Dhatu,
        RegistryKindArg::Pratipadika => RegistryKind::Pratipadika,
        RegistryKindArg::SandhiRule => RegistryKind::SandhiRule,
    }
}

pub fn run(
    input: &str,
    add: RegistryKindArg,
    from: Option<&str>,
    sldr: Option<&str>,
    slpr: Option<&str>,
    slsr: Option<&str>,
    output: &str,
) -> ExitCode {
    let kind = to_registry_kind(add);
    let external = match kind {
        RegistryKind::Dhatu => sldr,
        RegistryKind::Pratipadika => slpr,
        RegistryKind::SandhiRule => slsr,
    };

    let entries = match from {
        Some(path) => match load_entries(path) {
            Ok(e) => e,
            Err(e) => return exit::report_io(e),
        },
        None => Vec::new(),
    };

    let payload = match (from, external) {
        (Some(_), Some(filename)) => DictPayload::Hybrid {
            kind,
            version: 1,
            filename: filename.to_string(),
            overrides: entries,
        },
        (Some(_), None) => DictPayload::Embedded { kind, entries },
        (None, Some(filename)) => DictPayload::External {
            kind,
            version: 1,
            filename: filename.to_string(),
        },
        (None, None) => {
            return exit::report("annotate requires --from, an external registry flag, or both")
        }
    };

    let bytes = match std::fs::read(input) {
        Ok(b) => b,
        Err(e) => return exit::report_io(format!("{input}: {e}")),
    };
    let (header, chunks) = match read_container(&bytes) {
        Ok(v) => v,
        Err(e) => return exit::report_slbc(&e.into()),
    };

    let mut new_chunks: Vec<(ChunkType, Vec<u8>)> = chunks
        .into_iter()
        .map(|c| (c.chunk_type, c.payload))
        .collect();
    new_chunks.push((ChunkType::Dict, payload.encode()));

    let out_bytes = write_container(&header, &new_chunks);
    match write_binary_output(Some(output), &out_bytes) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit::report_io(e),
    }
}

fn load_entries(path: &str) -> Result<Vec<Entry>, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let json_entries: Vec<JsonEntry> =
        serde_json::from_str(&text).map_err(|e| format!("{path}: invalid JSON: {e}"))?;
    json_entries
        .into_iter()
        .map(|e| {
            let metadata = hex::decode(&e.metadata_hex)?;
            Ok(Entry {
                id: e.id,
                iast: e.iast,
                metadata,
            })
        })
        .collect()
}
