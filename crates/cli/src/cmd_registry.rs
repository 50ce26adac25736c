use std::process::ExitCode;

use slbc_kosha::{
    compile_dhatu_tsv, compile_pratipadika_tsv, compile_sandhi_rule_tsv, Kosha, RegistryKind,
};

use crate::exit;
use crate::hex;
use crate::io_util::{read_binary_input, read_text_input, write_binary_output};
use crate::{RegistryCommands, RegistryKindArg};

fn to_registry_kind(kind: RegistryKindArg) -> RegistryKind {
    match kind {
        RegistryKindArg::Dhatu => RegistryKind::Dhatu,
        RegistryKindArg::Pratipadika => RegistryKind::Pratipadika,
        RegistryKindArg::SandhiRule => RegistryKind::SandhiRule,
    }
}

pub fn run(command: RegistryCommands) -> ExitCode {
    match command {
        RegistryCommands::Compile { kind, input, output } => compile(kind, input.as_deref(), &output),
        RegistryCommands::Inspect { kind, input } => inspect(kind, &input),
        RegistryCommands::Lookup { kind, input, iast, id } => {
            lookup(kind, &input, iast.as_deref(), id)
        }
        RegistryCommands::Stats { kind, input } => stats(kind, &input),
        RegistryCommands::Builtin { kind } => builtin(kind),
    }
}

fn compile(kind: RegistryKindArg, input: Option<&str>, output: &str) -> ExitCode {
    let (_, text) = match read_text_input(input) {
        Ok(v) => v,
        Err(e) => return exit::report_io(e),
    };

    let registry_kind = to_registry_kind(kind);
    let entries = match registry_kind {
        RegistryKind::Dhatu => compile_dhatu_tsv(&text),
        RegistryKind::Pratipadika => compile_pratipadika_tsv(&text),
        RegistryKind::SandhiRule => compile_sandhi_rule_tsv(&text),
    };
    let entries = match entries {
        Ok(e) => e,
        Err(e) => return exit::report_slbc(&e.into()),
    };

    let kosha = Kosha::from_entries(registry_kind, 1, entries);
    match write_binary_output(Some(output), &kosha.to_bytes()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit::report_io(e),
    }
}

fn load_kosha(kind: RegistryKindArg, input: &str) -> Result<Kosha, ExitCode> {
    let bytes = read_binary_input(Some(input)).map_err(exit::report_io)?;
    Kosha::from_bytes(&bytes, to_registry_kind(kind)).map_err(|e| exit::report_slbc(&e))
}

fn inspect(kind: RegistryKindArg, input: &str) -> ExitCode {
    let kosha = match load_kosha(kind, input) {
        Ok(k) => k,
        Err(code) => return code,
    };
    for entry in kosha.entries() {
        println!(
            "{}\t{}\t{}",
            entry.id,
            entry.iast,
            hex::encode(&entry.metadata)
        );
    }
    ExitCode::SUCCESS
}

fn lookup(kind: RegistryKindArg, input: &str, iast: Option<&str>, id: Option<u64>) -> ExitCode {
    let kosha = match load_kosha(kind, input) {
        Ok(k) => k,
        Err(code) => return code,
    };

    let found = match (iast, id) {
        (Some(iast), _) => kosha.lookup_by_iast(iast),
        (None, Some(id)) => kosha.lookup_by_id(id),
        (None, None) => return exit::report("lookup requires --iast or --id"),
    };

    match found {
        Some(entry) => {
            println!(
                "{}\t{}\t{}",
                entry.id,
                entry.iast,
                hex::encode(&entry.metadata)
            );
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: no matching entry");
            exit::user_error()
        }
    }
}

fn stats(kind: RegistryKindArg, input: &str) -> ExitCode {
    let kosha = match load_kosha(kind, input) {
        Ok(k) => k,
        Err(code) => return code,
    };
    println!("kind: {:?}", kosha.kind());
    println!("entries: {}", kosha.len());
    ExitCode::SUCCESS
}

fn builtin(kind: RegistryKindArg) -> ExitCode {
    let kosha = slbc_kosha::builtin(to_registry_kind(kind));
    for entry in kosha.entries() {
        println!(
            "{}\t{}\t{}",
            entry.id,
            entry.iast,
            hex::encode(&entry.metadata)
        );
    }
    ExitCode::SUCCESS
}
