//! Reference DFT computed with `rustfft`.

use std::io::{self, Write};

use log::debug;
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

use crate::format::format_bin;

/// Forward, unnormalized DFT of real `samples` (`e^{-2πi kn/N}` convention).
///
/// An empty input yields an empty spectrum.
pub fn transform(samples: &[f64]) -> Vec<Complex64> {
    if samples.is_empty() {
        return Vec::new();
    }
    let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    debug!("transformed {} samples", buffer.len());
    buffer
}

/// Write a spectrum in test-case output format: a `# N Frequency Bins`
/// header followed by one bin per line.
pub fn write_spectrum<W: Write>(bins: &[Complex64], out: &mut W) -> io::Result<()> {
    writeln!(out, "# {} Frequency Bins", bins.len())?;
    for &bin in bins {
        writeln!(out, "{}", format_bin(bin))?;
    }
    Ok(())
}
