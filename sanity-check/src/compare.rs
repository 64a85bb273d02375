//! Element-wise comparison of two complex streams.

use core::fmt;

use rustfft::num_complex::Complex64;

use crate::format::format_complex;

/// Absolute tolerance used when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Largest accepted `|a - b|`.
    pub tolerance: f64,
    /// Keep going after the first mismatch.
    pub all: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            all: false,
        }
    }
}

/// One discrepancy between the two inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    Length {
        left: usize,
        right: usize,
    },
    Value {
        index: usize,
        left: Complex64,
        right: Complex64,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { left, right } => {
                write!(f, "File length mismatch: input1={left}, input2={right}")
            }
            Mismatch::Value { index, left, right } => write!(
                f,
                "Mismatch in sample {index}: input1={}, input2={}",
                format_complex(*left),
                format_complex(*right)
            ),
        }
    }
}

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Mismatch count saturated to a process exit status.
    pub fn exit_code(&self) -> u8 {
        self.mismatches.len().min(u8::MAX as usize) as u8
    }
}

/// Absolute-tolerance closeness with no relative term.
///
/// Identical values (including equal infinities) always match; otherwise
/// both must be finite and `|a - b| <= tolerance`.
pub fn is_close(a: Complex64, b: Complex64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let finite = |c: Complex64| c.re.is_finite() && c.im.is_finite();
    if !finite(a) || !finite(b) {
        return false;
    }
    (a - b).norm() <= tolerance
}

/// Compare `left` against `right` element by element.
///
/// A length difference counts as one mismatch and, unless `options.all` is
/// set, suppresses the value comparison. Values are compared over the common
/// prefix, stopping at the first mismatch unless `options.all` is set.
pub fn compare(left: &[Complex64], right: &[Complex64], options: CompareOptions) -> Report {
    let mut report = Report::default();
    if left.len() != right.len() {
        report.mismatches.push(Mismatch::Length {
            left: left.len(),
            right: right.len(),
        });
    }
    if report.is_match() || options.all {
        for (index, (&l, &r)) in left.iter().zip(right).enumerate() {
            if !is_close(l, r, options.tolerance) {
                report.mismatches.push(Mismatch::Value {
                    index,
                    left: l,
                    right: r,
                });
                if !options.all {
                    break;
                }
            }
        }
    }
    report
}
