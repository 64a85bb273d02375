//! Compares two test-case outputs to a configurable absolute tolerance.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use sanity_check::compare::DEFAULT_TOLERANCE;
use sanity_check::{compare, read_complex_lines, CompareOptions, Complex64};

/// This tool reads two test case outputs and compares them sample by sample.
/// The exit status is the number of mismatches, capped at 255.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(value_name = "INPUT1")]
    input1: PathBuf,

    #[arg(value_name = "INPUT2")]
    input2: PathBuf,

    /// Don't stop after the first mismatch
    #[arg(short, long)]
    all: bool,

    /// Absolute tolerance for the comparison
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Extra output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn load(path: &Path) -> anyhow::Result<Vec<Complex64>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let values = read_complex_lines(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    debug!(
        "collected {} samples from {}: {:?}",
        values.len(),
        path.display(),
        values
    );
    Ok(values)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    env_logger::builder()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();
    debug!("{args:?}");

    let left = load(&args.input1)?;
    let right = load(&args.input2)?;
    let options = CompareOptions {
        tolerance: args.tolerance,
        all: args.all,
    };
    let report = compare(&left, &right, options);
    for mismatch in &report.mismatches {
        eprintln!("{mismatch}");
    }
    Ok(ExitCode::from(report.exit_code()))
}
