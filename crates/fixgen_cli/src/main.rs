//! fixgen CLI — fixed-point format derivation and SystemVerilog package generation.
//!
//! Provides `fixgen init` for manifest scaffolding, `fixgen format` and
//! `fixgen encode` for inspecting individual values, and `fixgen generate` for
//! emitting the package described by a `fixgen.toml` manifest.

#![warn(missing_docs)]

mod generate;
mod init;
mod inspect;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use fixgen_fixed::RoundMode;
use tracing_subscriber::EnvFilter;

/// fixgen — minimal-width fixed-point formats as SystemVerilog packages.
#[derive(Parser, Debug)]
#[command(name = "fixgen", version, about = "Fixed-point package generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `fixgen.toml` manifest.
    #[arg(long, global = true)]
    pub manifest: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a template `fixgen.toml`.
    Init {
        /// Directory to create. If omitted, the manifest is written to the
        /// current directory.
        name: Option<String>,
    },
    /// Derive the minimal fixed-point format for a value.
    Format(FormatArgs),
    /// Print the fixed-width binary encoding of an integer.
    Encode(EncodeArgs),
    /// Generate the package described by the manifest.
    Generate(GenerateArgs),
}

/// Arguments for the `fixgen format` subcommand.
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Real value the format must hold.
    #[arg(allow_hyphen_values = true)]
    pub value: f64,

    /// Required resolution (smallest step).
    #[arg(short, long)]
    pub resolution: f64,

    /// Use an unsigned format instead of two's complement.
    #[arg(long)]
    pub unsigned: bool,

    /// Rounding applied when scaling the value.
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = ModeArg::Round)]
    pub mode: ModeArg,
}

/// Rounding mode selection for `fixgen format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Round to nearest, ties to even.
    Round,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward negative infinity.
    Floor,
}

impl From<ModeArg> for RoundMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Round => RoundMode::Round,
            ModeArg::Ceil => RoundMode::Ceil,
            ModeArg::Floor => RoundMode::Floor,
        }
    }
}

/// Arguments for the `fixgen encode` subcommand.
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Integer to encode.
    #[arg(allow_hyphen_values = true)]
    pub value: i64,

    /// Number of bits.
    #[arg(short, long)]
    pub width: u32,

    /// Encode as two's complement.
    #[arg(short, long)]
    pub signed: bool,
}

/// Arguments for the `fixgen generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Output path, overriding the manifest's `package.output`.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the package to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom manifest.
    pub manifest: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        manifest: cli.manifest,
    };
    init_logging(&global);

    let result = match cli.command {
        Command::Init { name } => init::run(name, &global),
        Command::Format(ref args) => inspect::run_format(args),
        Command::Encode(ref args) => inspect::run_encode(args),
        Command::Generate(ref args) => generate::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over flags.
fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(global)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log level selected by `--quiet` / `--verbose`.
fn default_log_level(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "warn"
    }
}
