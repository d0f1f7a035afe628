//! lzstring CLI - LZ-String compression from the command line
//!
//! Compresses text into raw, UTF-16 safe, Base64 or URI safe LZ-String
//! payloads and back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info};
use std::path::PathBuf;
use utils::Format;

#[derive(Parser)]
#[command(name = "lzstring")]
#[command(author, version, about = "LZ-String compression for URLs and storage")]
#[command(long_about = "
lzstring compresses UTF-8 text with the LZ-String algorithm.
Supported formats: raw, utf16, base64, uri

Examples:
  lzstring compress -i document.txt -f uri
  echo 'Hello, World!' | lzstring compress -f base64
  lzstring decompress -f base64 -i payload.txt -o document.txt
  lzstring info -i document.txt --json
")]
struct Cli {
    /// Log debug output (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text
    #[command(alias = "c")]
    Compress {
        /// Output format
        #[arg(short, long, value_enum, default_value = "base64")]
        format: Format,

        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a payload back to text
    #[command(alias = "d")]
    Decompress {
        /// Input format
        #[arg(short, long, value_enum, default_value = "base64")]
        format: Format,

        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show compressed sizes of text in every format
    #[command(alias = "i")]
    Info {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            format,
            input,
            output,
        } => cmd_compress(format, input.as_deref(), output.as_deref()),
        Commands::Decompress {
            format,
            input,
            output,
        } => cmd_decompress(format, input.as_deref(), output.as_deref()),
        Commands::Info { input, json } => cmd_info(input.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
