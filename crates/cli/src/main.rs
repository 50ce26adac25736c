mod cmd_annotate;
mod cmd_decode;
mod cmd_encode;
mod cmd_extract;
mod cmd_inspect;
mod cmd_registry;
mod cmd_roundtrip;
mod cmd_transform;
mod exit;
mod hex;
mod io_util;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "slbc", about = "Sanskrit Linguistic Binary Codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode IAST text into a `.slbc` container
    Encode {
        /// IAST source (use - or omit for stdin)
        input: Option<String>,

        /// Output path (use - or omit for stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decode a `.slbc` container back to text
    Decode {
        /// `.slbc` file to read (use - for stdin)
        input: Option<String>,

        /// Target script
        #[arg(long, value_enum, default_value = "iast")]
        to: Script,
    },

    /// Extract a `.slbc` container under a named extraction mode
    Extract {
        /// `.slbc` file to read (use - for stdin)
        input: Option<String>,

        #[arg(long, value_enum)]
        mode: ExtractionModeArg,
    },

    /// Inspect a phoneme byte or a raw byte sequence
    Inspect {
        /// A single phoneme byte, as hex (e.g. 00 or 0x00)
        #[arg(long, conflicts_with = "from_hex")]
        byte: Option<String>,

        /// A raw hex byte sequence to classify byte-by-byte
        #[arg(long, conflicts_with = "byte")]
        from_hex: Option<String>,
    },

    /// Apply an algebra-kernel transform to one or two phoneme bytes
    Transform {
        #[arg(long, value_enum)]
        op: TransformOp,

        /// Phoneme byte(s) as hex, one per `op`'s arity
        bytes: Vec<String>,
    },

    /// Encode then decode IAST text and report the first disagreement
    Roundtrip {
        /// IAST source (use - or omit for stdin)
        input: Option<String>,
    },

    /// Append a DICT chunk (embedded, external, or hybrid) to a container
    Annotate {
        /// `.slbc` file to read
        input: String,

        /// Registry kind the DICT chunk annotates
        #[arg(long, value_enum)]
        add: RegistryKindArg,

        /// JSON file of entries to embed (array of {id, iast, metadata_hex})
        #[arg(long)]
        from: Option<String>,

        /// External dhātu registry filename to reference
        #[arg(long)]
        sldr: Option<String>,

        /// External prātipadika registry filename to reference
        #[arg(long)]
        slpr: Option<String>,

        /// External sandhi-rule registry filename to reference
        #[arg(long)]
        slsr: Option<String>,

        /// Output path for the annotated container
        #[arg(short, long)]
        output: String,
    },

    /// Compile, inspect, query, or summarize a registry binary
    Registry {
        #[command(subcommand)]
        command: RegistryCommands,
    },
}

#[derive(Subcommand)]
enum RegistryCommands {
    /// Compile a TSV source file into a registry binary
    Compile {
        #[arg(long, value_enum)]
        kind: RegistryKindArg,

        /// TSV source (use - or omit for stdin)
        input: Option<String>,

        #[arg(short, long)]
        output: String,
    },

    /// List every entry in a registry binary
    Inspect {
        #[arg(long, value_enum)]
        kind: RegistryKindArg,

        input: String,
    },

    /// Look up one entry by IAST spelling or numeric ID
    Lookup {
        #[arg(long, value_enum)]
        kind: RegistryKindArg,

        input: String,

        #[arg(long)]
        iast: Option<String>,

        #[arg(long)]
        id: Option<u64>,
    },

    /// Print entry count and kind for a registry binary
    Stats {
        #[arg(long, value_enum)]
        kind: RegistryKindArg,

        input: String,
    },

    /// List every entry in the bundled builtin registry of one kind
    Builtin {
        #[arg(long, value_enum)]
        kind: RegistryKindArg,
    },
}

#[derive(ValueEnum, Clone, Copy)]
pub enum Script {
    Iast,
    Devanagari,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum ExtractionModeArg {
    Patha,
    BhashaOnly,
    Vyakhya,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum RegistryKindArg {
    Dhatu,
    Pratipadika,
    SandhiRule,
}

#[derive(ValueEnum, Clone, Copy)]
pub enum TransformOp {
    Guna,
    Vrddhi,
    Dirgha,
    Hrasva,
    SavarnaDirgha,
    SamprasaranaToSvara,
    Jastva,
    ToggleVoice,
    ToggleAspiration,
    MakeNasal,
    HomorganicNasalFor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => cmd_encode::run(input.as_deref(), output.as_deref()),
        Commands::Decode { input, to } => cmd_decode::run(input.as_deref(), to),
        Commands::Extract { input, mode } => cmd_extract::run(input.as_deref(), mode),
        Commands::Inspect { byte, from_hex } => cmd_inspect::run(byte.as_deref(), from_hex.as_deref()),
        Commands::Transform { op, bytes } => cmd_transform::run(op, &bytes),
        Commands::Roundtrip { input } => cmd_roundtrip::run(input.as_deref()),
        Commands::Annotate {
            input,
            add,
            from,
            sldr,
            slpr,
            slsr,
            output,
        } => cmd_annotate::run(
            &input,
            add,
            from.as_deref(),
            sldr.as_deref(),
            slpr.as_deref(),
            slsr.as_deref(),
            &output,
        ),
        Commands::Registry { command } => cmd_registry::run(command),
    }
}
