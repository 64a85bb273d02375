//! Text rendering of floating-point and complex values.
//!
//! Test-case outputs are exchanged as text, so the oracle has to print numbers
//! the way C's `%g` does and the harness echoes values in the familiar
//! `(re+imj)` notation.

use rustfft::num_complex::Complex64;

/// Significant digits used for oracle output.
pub const ORACLE_PRECISION: usize = 14;

/// Decimal digits (no leading or trailing zeros) and base-10 exponent of `|v|`.
///
/// With `precision`, the value is first rounded to that many significant
/// digits; without it the shortest round-trip digits are used.
fn decompose(v: f64, precision: Option<usize>) -> (String, i32) {
    let sci = match precision {
        Some(p) => format!("{:.*e}", p.saturating_sub(1), v.abs()),
        None => format!("{:e}", v.abs()),
    };
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits = mantissa.replace('.', "");
    let digits = digits.trim_end_matches('0');
    if digits.is_empty() {
        ("0".to_string(), 0)
    } else {
        (digits.to_string(), exp)
    }
}

fn render(negative: bool, digits: &str, exp: i32, scientific: bool) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if scientific {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("e{sign}{:02}", exp.unsigned_abs()));
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() > int_len {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        } else {
            out.push_str(digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        }
    }
    out
}

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("nan")
    } else if v == f64::INFINITY {
        Some("inf")
    } else if v == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// Format like C's `%.<precision>g`: significant digits, trailing zeros
/// removed, exponent notation when the exponent is below -4 or reaches the
/// precision.
pub fn format_g(v: f64, precision: usize) -> String {
    if let Some(s) = non_finite(v) {
        return s.to_string();
    }
    let p = precision.max(1);
    let (digits, exp) = decompose(v, Some(p));
    let scientific = exp < -4 || exp >= p as i32;
    render(v.is_sign_negative(), &digits, exp, scientific)
}

/// Shortest round-trip rendering, switching to exponent notation outside
/// `1e-4 <= |v| < 1e16`. Integral values carry no fractional part.
pub fn format_shortest(v: f64) -> String {
    if let Some(s) = non_finite(v) {
        return s.to_string();
    }
    let (digits, exp) = decompose(v, None);
    let scientific = !(-4..16).contains(&exp);
    render(v.is_sign_negative(), &digits, exp, scientific)
}

fn signed(s: String) -> String {
    if s.starts_with('-') {
        s
    } else {
        format!("+{s}")
    }
}

/// Oracle bin format: `%.14g` real part, signed imaginary part, `j` suffix.
pub fn format_bin(c: Complex64) -> String {
    format!(
        "{}{}j",
        format_g(c.re, ORACLE_PRECISION),
        signed(format_g(c.im, ORACLE_PRECISION))
    )
}

/// Display form used in mismatch reports, e.g. `(1+0j)` or `-2j`.
pub fn format_complex(c: Complex64) -> String {
    let im = format_shortest(c.im);
    if c.re == 0.0 && c.re.is_sign_positive() {
        format!("{im}j")
    } else {
        format!("({}{}j)", format_shortest(c.re), signed(im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn g_fixed_range() {
        assert_eq!(format_g(10.0, 14), "10");
        assert_eq!(format_g(-2.0, 14), "-2");
        assert_eq!(format_g(0.0, 14), "0");
        assert_eq!(format_g(-0.0, 14), "-0");
        assert_eq!(format_g(0.5, 14), "0.5");
        assert_eq!(format_g(0.0001, 14), "0.0001");
        assert_eq!(format_g(123456.789, 14), "123456.789");
        assert_eq!(format_g(2.0f64.sqrt(), 14), "1.4142135623731");
    }

    #[test]
    fn g_scientific_range() {
        assert_eq!(format_g(0.00001, 14), "1e-05");
        assert_eq!(format_g(1.2345678901234e-5, 14), "1.2345678901234e-05");
        assert_eq!(format_g(1e14, 14), "1e+14");
        assert_eq!(format_g(99999999999999.9, 14), "1e+14");
        assert_eq!(format_g(-6.123233995736766e-17, 14), "-6.1232339957368e-17");
        assert_eq!(format_g(1e100, 14), "1e+100");
    }

    #[test]
    fn g_non_finite() {
        assert_eq!(format_g(f64::NAN, 14), "nan");
        assert_eq!(format_g(f64::INFINITY, 14), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY, 14), "-inf");
    }

    #[test]
    fn shortest_forms() {
        assert_eq!(format_shortest(1.0), "1");
        assert_eq!(format_shortest(0.1), "0.1");
        assert_eq!(format_shortest(1e16), "1e+16");
        assert_eq!(format_shortest(1e15), "1000000000000000");
        assert_eq!(format_shortest(6.123233995736766e-17), "6.123233995736766e-17");
    }

    #[test]
    fn bins_and_reports() {
        assert_eq!(format_bin(Complex64::new(10.0, 0.0)), "10+0j");
        assert_eq!(format_bin(Complex64::new(-2.0, 2.0)), "-2+2j");
        assert_eq!(format_bin(Complex64::new(0.0, -3.5)), "0-3.5j");
        assert_eq!(format_complex(Complex64::new(1.0, 0.0)), "(1+0j)");
        assert_eq!(format_complex(Complex64::new(0.0, -1.0)), "-1j");
        assert_eq!(format_complex(Complex64::new(-0.5, -0.25)), "(-0.5-0.25j)");
    }
}
