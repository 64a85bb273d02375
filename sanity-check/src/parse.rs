//! Lenient line-oriented readers for test-case files.
//!
//! Both readers accept partial or garbled input: lines that do not parse are
//! skipped (and logged at debug level) instead of aborting the read.

use std::io::{self, BufRead};

use log::debug;
use rustfft::num_complex::Complex64;
use thiserror::Error;

/// A line that is not a complex literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed complex literal `{0}`")]
pub struct ParseComplexError(String);

/// Problems with the shape of a test case. Never fatal to the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("no sample count found in input")]
    MissingCount,
    #[error("not enough samples received, expected {expected}, got {got}")]
    ShortInput { expected: usize, got: usize },
}

fn parse_part(s: &str) -> Option<f64> {
    if s.is_empty() || s.contains(char::is_whitespace) {
        return None;
    }
    s.parse().ok()
}

/// Parse a complex literal in `re`, `imj`, `re±imj` or `(…)` form.
///
/// `j` or `J` marks the imaginary part; a bare `j` means one. Surrounding
/// whitespace is ignored, whitespace between the parts is not.
pub fn parse_complex(s: &str) -> Result<Complex64, ParseComplexError> {
    let err = || ParseComplexError(s.trim().to_string());
    let mut body = s.trim();
    if let Some(inner) = body.strip_prefix('(') {
        body = inner.strip_suffix(')').ok_or_else(err)?.trim();
    }
    if body.is_empty() {
        return Err(err());
    }
    let Some(imag) = body.strip_suffix(&['j', 'J'][..]) else {
        let re = parse_part(body).ok_or_else(err)?;
        return Ok(Complex64::new(re, 0.0));
    };
    // last sign that does not belong to an exponent
    let bytes = imag.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
    let (re, im) = match split {
        Some(i) => (parse_part(&imag[..i]).ok_or_else(err)?, &imag[i..]),
        None => (0.0, imag),
    };
    let im = match im {
        "" | "+" => 1.0,
        "-" => -1.0,
        other => parse_part(other).ok_or_else(err)?,
    };
    Ok(Complex64::new(re, im))
}

/// Collect every line of `reader` that parses as a complex literal.
pub fn read_complex_lines<R: BufRead>(reader: R) -> io::Result<Vec<Complex64>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match parse_complex(&line) {
            Ok(c) => values.push(c),
            Err(e) => debug!("skipping line: {e}"),
        }
    }
    Ok(values)
}

/// Samples read from a `.tc` test case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestCase {
    /// Count announced by the first integer line, if one was found.
    pub expected: Option<usize>,
    pub samples: Vec<f64>,
}

impl TestCase {
    /// Report whether the announced number of samples was collected.
    pub fn check(&self) -> Result<(), FormatError> {
        match self.expected {
            None => Err(FormatError::MissingCount),
            Some(expected) if self.samples.len() < expected => Err(FormatError::ShortInput {
                expected,
                got: self.samples.len(),
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Read a test case: a sample-count line followed by one real sample per line.
///
/// Lines before the count that are not a non-negative integer are skipped, as
/// are sample lines that are not numbers. Reading stops once the announced
/// number of samples is collected; anything after that is ignored.
pub fn read_test_case<R: BufRead>(reader: R) -> io::Result<TestCase> {
    let mut case = TestCase::default();
    let mut lines = reader.lines();

    for line in lines.by_ref() {
        let line = line?;
        debug!("{line}");
        if let Ok(n) = line.trim().parse::<usize>() {
            case.expected = Some(n);
            break;
        }
    }
    let Some(expected) = case.expected else {
        return Ok(case);
    };

    while case.samples.len() < expected {
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        debug!("{line}");
        match line.trim().parse::<f64>() {
            Ok(v) => case.samples.push(v),
            Err(_) => debug!("skipping malformed sample line"),
        }
    }
    debug!("collected samples: {:?}", case.samples);
    Ok(case)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_part_rejects_inner_whitespace() {
        assert_eq!(parse_part("1.5"), Some(1.5));
        assert_eq!(parse_part("1 .5"), None);
        assert_eq!(parse_part(""), None);
    }
}
