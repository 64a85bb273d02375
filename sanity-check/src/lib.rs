//! Validation tools for FFT test cases.
//!
//! - [`oracle`] computes the reference spectrum of a test case with `rustfft`.
//! - [`compare`] checks two spectra against an absolute tolerance.
//! - [`parse`] holds the lenient readers both of them share.

pub mod compare;
pub mod format;
pub mod oracle;
pub mod parse;

pub use compare::{compare, is_close, CompareOptions, Mismatch, Report};
pub use parse::{
    parse_complex, read_complex_lines, read_test_case, FormatError, ParseComplexError, TestCase,
};
pub use rustfft::num_complex::Complex64;
