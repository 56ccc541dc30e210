//! chipgray CLI
//!
//! Convert a chip SVG into a grayscale BMP, dropping its unstyled overlay path.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chipgray_svg::RasterOptions;

mod convert;

/// Exit status for a wrong argument count
const USAGE_EXIT: u8 = 1;

/// Both arguments are always paths, even when they start with `-`
#[derive(Parser, Debug)]
#[command(name = "chipgray")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// SVG file to read
    #[arg(allow_hyphen_values = true)]
    inputfile: PathBuf,

    /// BMP file to write
    #[arg(allow_hyphen_values = true)]
    outputfile: PathBuf,
}

fn main() -> Result<ExitCode> {
    run(std::env::args_os()).map(ExitCode::from)
}

/// Check the argument count, then run the conversion, returning the process
/// exit status
///
/// `args` starts with the program name. Exactly two more arguments are
/// accepted; anything else prints the usage line and returns 1 without
/// touching the file system.
fn run<I, T>(args: I) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("chipgray"));
    let paths: Vec<OsString> = args.collect();

    if paths.len() != 2 {
        print_usage(&program);
        return Ok(USAGE_EXIT);
    }

    let Some(cli) = parse_paths(&program, paths) else {
        print_usage(&program);
        return Ok(USAGE_EXIT);
    };

    init_tracing();

    convert::convert(&cli.inputfile, &cli.outputfile, &RasterOptions::default())?;
    Ok(0)
}

fn parse_paths(program: &OsString, paths: Vec<OsString>) -> Option<Cli> {
    // `--` keeps clap from reading either path as a flag
    let args = [program.clone(), OsString::from("--")]
        .into_iter()
        .chain(paths);
    Cli::try_parse_from(args).ok()
}

fn print_usage(program: &OsString) {
    println!(
        "Usage: {} <inputfile> <outputfile>",
        program.to_string_lossy()
    );
}

/// Verbosity comes from `RUST_LOG`, defaulting to warnings only
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr; stdout only ever carries the usage message.
    // A subscriber may already be installed when run() is called from tests.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
