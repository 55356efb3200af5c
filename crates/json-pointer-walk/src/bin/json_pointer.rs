//! `json-pointer`: look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer [--file doc.json] [--get | --reference] '<pointer>'
//!
//! The document is read from `--file`, or from stdin when omitted.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_pointer_walk::cli::{lookup_pointer, CliError, Mode};
use json_pointer_walk::validate::{Limits, MAX_PATH_LENGTH, MAX_POINTER_LENGTH};

#[derive(Debug, Parser)]
#[command(name = "json-pointer", about = "Look up a JSON Pointer in a JSON document")]
struct Args {
    /// JSON Pointer, e.g. `/foo/0/bar`. Empty for the whole document.
    pointer: String,

    /// Read the document from this file instead of stdin.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Permissive lookup: anything unresolvable is reported as absent.
    #[arg(long, conflicts_with = "reference")]
    get: bool,

    /// Print the value, its container and its key.
    #[arg(long)]
    reference: bool,

    #[arg(long, default_value_t = MAX_POINTER_LENGTH)]
    max_pointer_length: usize,

    #[arg(long, default_value_t = MAX_PATH_LENGTH)]
    max_path_length: usize,
}

fn run(args: &Args) -> Result<String, CliError> {
    let doc = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mode = if args.get {
        Mode::Get
    } else if args.reference {
        Mode::Reference
    } else {
        Mode::Find
    };
    let limits = Limits {
        max_pointer_length: args.max_pointer_length,
        max_path_length: args.max_path_length,
    };
    log::debug!("lookup {:?} in {:?} mode", args.pointer, mode);

    lookup_pointer(doc.trim(), &args.pointer, mode, &limits)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{result}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
