use clap::{Parser, Subcommand};
use std::path::PathBuf;
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for twiddlegen")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build {
        #[arg(long)]
        release: bool,
    },
    Test,
    Clippy,
    Fmt,
    /// Run fmt, then clippy if formatting succeeded
    Analyze,
    /// Regenerate a twiddle header
    Header {
        #[arg(short, long, default_value_t = 4096)]
        max: usize,
        #[arg(short, long, default_value = "twiddle.h")]
        output: PathBuf,
    },
    /// Check an FFT output against the reference oracle
    Verify {
        /// Test case (.tc) file
        case: PathBuf,
        /// Output to check; produced by `--program` when given
        actual: PathBuf,
        /// FFT program that reads the test case on stdin
        #[arg(long)]
        program: Option<PathBuf>,
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Build { release } => build_command(release).status()?.code(),
        Commands::Test => test_command().status()?.code(),
        Commands::Clippy => clippy_command().status()?.code(),
        Commands::Fmt => fmt_command().status()?.code(),
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                fmt.code()
            } else {
                clippy_command().status()?.code()
            }
        }
        Commands::Header { max, output } => header_command(max, &output).status()?.code(),
        Commands::Verify {
            case,
            actual,
            program,
            tolerance,
        } => {
            if let Some(program) = program {
                run_program(&program, &case, &actual)?;
            }
            Some(verify(&case, &actual, tolerance)?)
        }
    };

    std::process::exit(code.unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_command() {
        let cli = Cli::parse_from(["xtask", "header", "-m", "256"]);
        match cli.command {
            Commands::Header { max, output } => {
                assert_eq!(max, 256);
                assert_eq!(output, PathBuf::from("twiddle.h"));
            }
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_verify_command() {
        let cli = Cli::parse_from(["xtask", "verify", "a.tc", "a.out", "--program", "./fft"]);
        match cli.command {
            Commands::Verify { case, program, .. } => {
                assert_eq!(case, PathBuf::from("a.tc"));
                assert_eq!(program, Some(PathBuf::from("./fft")));
            }
            _ => panic!("parsed wrong command"),
        }
    }
}
