use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use twiddlegen::config::DEFAULT_OUTPUT;
use twiddlegen::{Config, MaxSize, Output};

/// This tool generates twiddle.h, the precomputed FFT twiddle-factor tables.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Maximum FFT size (must be a power of 2)
    #[arg(short, long, env = "TWIDDLEGEN_MAX", default_value_t = MaxSize::DEFAULT)]
    max: MaxSize,

    /// Output file, or `-` for stdout
    #[arg(short, long, env = "TWIDDLEGEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: Output,

    /// Extra output for debugging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.max, cli.output).verbose(cli.verbose)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::from(cli);
    twiddlegen::run(&config)
        .with_context(|| format!("generating twiddle table into {}", config.output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["twiddlegen"]);
        assert_eq!(cli.max, MaxSize::DEFAULT);
        assert_eq!(cli.output, Output::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from(["twiddlegen", "-m", "16", "-o", "-", "-v"]);
        assert_eq!(cli.max.get(), 16);
        assert_eq!(cli.output, Output::Stdout);
        assert!(cli.verbose);
    }

    #[test]
    fn reject_non_power_of_two() {
        assert!(Cli::try_parse_from(["twiddlegen", "--max", "3"]).is_err());
        assert!(Cli::try_parse_from(["twiddlegen", "--max", "abc"]).is_err());
    }
}
