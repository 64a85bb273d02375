//! C header emission for a [`TwiddleTable`].
//!
//! The layout is one `const double complex` array per stage followed by a
//! master array of stage pointers, all inside an include guard. Output depends
//! only on the table, so the same maximum always yields identical bytes.

use std::io::{self, Write};

use log::debug;

use crate::num::Complex64;
use crate::twiddle::{Stage, TwiddleTable};

/// Include-guard macro wrapped around the generated declarations.
pub const INCLUDE_GUARD: &str = "FFT_TWIDDLE_H";

/// Name of the master array indexed by `log2(N) - 1`.
pub const MASTER_ARRAY: &str = "W";

/// Render an `f64` as a C floating literal that round-trips exactly.
///
/// `Display` yields the shortest decimal that parses back to the same value
/// and never uses exponent notation; `.0` is appended when the result would
/// otherwise be an integer literal.
fn c_double(value: f64) -> String {
    let mut s = value.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Render a factor as `re + im * I` using the `I` macro from `<complex.h>`.
pub fn complex_literal(c: Complex64) -> String {
    let sign = if c.im.is_sign_negative() { '-' } else { '+' };
    format!("{} {} {} * I", c_double(c.re), sign, c_double(c.im.abs()))
}

fn write_preamble<W: Write + ?Sized>(table: &TwiddleTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "/* Precomputed Twiddle Factors for FFT up to {} bins */",
        table.max()
    )?;
    writeln!(out, "/* NOTE: THIS IS A GENERATED FILE, DO NOT EDIT */")?;
    writeln!(out, "#ifndef {INCLUDE_GUARD}")?;
    writeln!(out, "#define {INCLUDE_GUARD}")?;
    writeln!(out, "#include <complex.h>")?;
    writeln!(out)
}

fn write_stage<W: Write + ?Sized>(stage: &Stage, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "const double complex {}[{}] = {{",
        stage.name(),
        stage.half_size()
    )?;
    for &factor in stage.factors() {
        writeln!(out, "\t{},", complex_literal(factor))?;
    }
    writeln!(out, "}};")?;
    writeln!(out)
}

fn write_master<W: Write + ?Sized>(table: &TwiddleTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "const double complex* const {MASTER_ARRAY}[{}] = {{",
        table.len()
    )?;
    for stage in table {
        writeln!(out, "\t{},", stage.name())?;
    }
    writeln!(out, "}};")
}

fn write_postamble<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "#endif /* {INCLUDE_GUARD} */")
}

/// Write the complete header for `table` to `out`.
///
/// # Errors
///
/// Propagates the first write error from `out`; nothing is retried.
pub fn write_header<W: Write + ?Sized>(table: &TwiddleTable, out: &mut W) -> io::Result<()> {
    write_preamble(table, out)?;
    for stage in table {
        debug!("emitting {} ({} factors)", stage.name(), stage.half_size());
        write_stage(stage, out)?;
    }
    write_master(table, out)?;
    write_postamble(out)
}

/// Render the header into memory.
pub fn render_header(table: &TwiddleTable) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_header(table, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
