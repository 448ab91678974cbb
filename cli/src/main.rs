//! hexpng
//!
//! Command line shell over hexpng-core: files in, files or stdout out.

use clap::{Parser, Subcommand};
use colored::Colorize;
use hexpng_core::DecodeError;

mod commands;
mod logging;
mod utils;

use commands::{decode, encode};

/// Convert binary files (PNG by default) to hex dumps and back
#[derive(Parser)]
#[command(name = "hexpng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump a binary file as plain or xxd-style hex
    Encode(encode::EncodeArgs),

    /// Rebuild a binary file from a hex dump
    Decode(decode::DecodeArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encode(args) => encode::execute(&args),
        Commands::Decode(args) => decode::execute(&args),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if let Some(decode_err) = e.downcast_ref::<DecodeError>() {
            eprintln!();
            eprintln!("{}", utils::decode_hint(decode_err));
        }
        std::process::exit(1);
    }
}
