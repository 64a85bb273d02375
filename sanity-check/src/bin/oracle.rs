//! Reads a `.tc` test case and prints its reference spectrum.
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{warn, LevelFilter};
use sanity_check::oracle::{transform, write_spectrum};
use sanity_check::read_test_case;

/// This tool reads a test case .tc file and passes it through a reference FFT
/// before printing the output.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn open_input(path: Option<&PathBuf>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) if p.as_os_str() != "-" => Box::new(BufReader::new(File::open(p)?)),
        _ => Box::new(BufReader::new(io::stdin())),
    })
}

fn open_output(path: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) if p.as_os_str() != "-" => Box::new(BufWriter::new(File::create(p)?)),
        _ => Box::new(BufWriter::new(io::stdout())),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();
    log::debug!("{args:?}");

    let input = open_input(args.input.as_ref()).context("opening test case")?;
    let case = read_test_case(input).context("reading test case")?;
    if let Err(e) = case.check() {
        warn!("Format Error: {e}");
    }

    let spectrum = transform(&case.samples);
    let mut out = open_output(args.output.as_ref()).context("opening output")?;
    write_spectrum(&spectrum, &mut out).context("writing spectrum")?;
    out.flush()?;
    Ok(())
}
