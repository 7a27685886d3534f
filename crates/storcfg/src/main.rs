//! storcfg entry point.
//!
//! One-shot tool that edits a JSON configuration file in place, setting its
//! `storage` key to the optimized-local adapter block for a given path.
//!
//! # Usage
//!
//! ```text
//! storcfg <CONFIG_FILE> <STORAGE_PATH>
//!
//! Arguments:
//!   <CONFIG_FILE>   Path to the JSON configuration file to edit in place
//!   <STORAGE_PATH>  Filesystem path for the optimized-local adapter
//! ```
//!
//! # Exit codes
//!
//! - `0` on success; a confirmation line is printed to stdout.
//! - `1` with the usage text on stdout when the argument count is wrong.
//! - `1` with a diagnostic on stderr when the file cannot be read, parsed,
//!   edited, or written.
//!
//! Log output goes to stderr via `tracing`, controlled by `RUST_LOG`
//! (default `info`), so stdout carries only the tool's result line.

use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storcfg::application::configure_storage;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Sets the optimized-local storage adapter in a JSON config file.
///
/// The `#[derive(Parser)]` macro from `clap` generates the argument parser
/// from the struct fields.
#[derive(Debug, Parser)]
#[command(
    name = "storcfg",
    about = "Set the optimized-local storage adapter in a JSON config file",
    version
)]
struct Cli {
    /// Path to the JSON configuration file to edit in place.
    config_file: PathBuf,

    /// Filesystem path the optimized-local adapter stores images under.
    ///
    /// Written into the config verbatim; not checked for existence.
    storage_path: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Structured logging to stderr. Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // `try_parse` instead of `parse`: the tool's CLI contract puts usage
    // problems on stdout with exit code 1, while clap's default is stderr
    // with exit code 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_on_parse_error(err),
    };

    configure_storage(&cli.config_file, &cli.storage_path).with_context(|| {
        format!(
            "failed to configure storage adapter in {}",
            cli.config_file.display()
        )
    })?;

    println!("Storage adapter configured successfully");
    Ok(())
}

/// Prints the clap error and exits.
///
/// `--help` and `--version` are not failures: they print to stdout and exit
/// 0. Everything else (missing argument, unexpected extra argument) prints
/// the error with its usage text to stdout and exits 1.
fn exit_on_parse_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{err}");
            std::process::exit(0);
        }
        _ => {
            print!("{err}");
            std::process::exit(1);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
