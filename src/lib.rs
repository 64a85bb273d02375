//! # twiddlegen - precomputed FFT twiddle-factor tables
//!
//! Generates the complex roots of unity used by every stage of a radix-2
//! FFT, for all power-of-two sizes from 2 up to a chosen maximum, and emits
//! them as a C header that a fixed-size transform can index statically.
//!
//! ## Pipeline
//!
//! 1. [`MaxSize`] validates the requested maximum.
//! 2. [`TwiddleTable::generate`] computes one [`Stage`] per size.
//! 3. [`emit::write_header`] serializes the stages to any [`std::io::Write`].
//!
//! ```
//! use twiddlegen::{emit, MaxSize, TwiddleTable};
//!
//! let max: MaxSize = "8".parse().unwrap();
//! let table = TwiddleTable::generate(max);
//! assert_eq!(table.len(), 3);
//! let header = emit::render_header(&table);
//! assert!(header.contains("const double complex* const W[3] = {"));
//! ```
//!
//! ## Output format
//!
//! Each factor is written as `re + im * I` (or `re - |im| * I`) with the
//! shortest decimal digits that reproduce the exact `f64` value, so the
//! header carries full double precision.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

use std::io;

use log::debug;
use thiserror::Error;

/// Complex arithmetic for the generated factors.
pub mod num;

/// Validation of the requested maximum transform size.
pub mod size;

/// Per-stage twiddle-factor generation.
pub mod twiddle;

/// C header serialization.
pub mod emit;

/// Run configuration and output sinks.
pub mod config;

pub use config::{Config, Output};
pub use num::Complex64;
pub use size::{MaxSize, SizeError};
pub use twiddle::{Stage, TwiddleTable};

/// Failures of a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid maximum size: {0}")]
    InvalidSize(#[from] SizeError),
    #[error("failed to write twiddle table: {0}")]
    Io(#[from] io::Error),
}

/// Generate the table described by `config` and write it to its output.
///
/// The table is computed in full before the output is opened, and file
/// outputs are replaced atomically, so a failed run leaves no partial header.
///
/// # Errors
///
/// Returns [`Error::Io`] if the output cannot be created, written or
/// persisted.
pub fn run(config: &Config) -> Result<(), Error> {
    debug!("{config:?}");
    let table = TwiddleTable::generate(config.max);
    config
        .output
        .write_with(|out| emit::write_header(&table, out))?;
    Ok(())
}
