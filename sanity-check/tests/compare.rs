// Test intent: verifies tolerance comparison and mismatch reporting.
use sanity_check::{compare, is_close, CompareOptions, Complex64, Mismatch};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn identical_streams_match() {
    let a = [c(1.0, 0.0), c(0.0, -1.0)];
    let report = compare(&a, &a, CompareOptions::default());
    assert!(report.is_match());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn tolerance_is_absolute() {
    assert!(is_close(c(1.0, 0.0), c(1.0 + 5e-10, 0.0), 1e-9));
    assert!(!is_close(c(1.0, 0.0), c(1.0 + 5e-9, 0.0), 1e-9));
    // no relative slack for large magnitudes
    assert!(!is_close(c(1e12, 0.0), c(1e12 + 1e-3, 0.0), 1e-9));
    // distance is the complex magnitude
    assert!(!is_close(c(0.0, 0.0), c(8e-10, 8e-10), 1e-9));
}

#[test]
fn non_finite_values() {
    let inf = f64::INFINITY;
    assert!(is_close(c(inf, 0.0), c(inf, 0.0), 1e-9));
    assert!(!is_close(c(inf, 0.0), c(-inf, 0.0), 1e-9));
    assert!(!is_close(c(f64::NAN, 0.0), c(f64::NAN, 0.0), 1.0));
}

#[test]
fn stops_at_first_mismatch() {
    let a = [c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)];
    let b = [c(1.0, 0.0), c(2.5, 0.0), c(3.5, 0.0)];
    let report = compare(&a, &b, CompareOptions::default());
    assert_eq!(
        report.mismatches,
        [Mismatch::Value {
            index: 1,
            left: c(2.0, 0.0),
            right: c(2.5, 0.0)
        }]
    );
    assert_eq!(
        report.mismatches[0].to_string(),
        "Mismatch in sample 1: input1=(2+0j), input2=(2.5+0j)"
    );
}

#[test]
fn all_reports_every_mismatch() {
    let a = [c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)];
    let b = [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 3.0)];
    let options = CompareOptions {
        all: true,
        ..CompareOptions::default()
    };
    let report = compare(&a, &b, options);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn length_mismatch_skips_values_unless_all() {
    let a = [c(1.0, 0.0), c(2.0, 0.0)];
    let b = [c(9.0, 0.0)];
    let report = compare(&a, &b, CompareOptions::default());
    assert_eq!(report.mismatches, [Mismatch::Length { left: 2, right: 1 }]);
    assert_eq!(
        report.mismatches[0].to_string(),
        "File length mismatch: input1=2, input2=1"
    );

    let options = CompareOptions {
        all: true,
        ..CompareOptions::default()
    };
    assert_eq!(compare(&a, &b, options).exit_code(), 2);
}

#[test]
fn exit_code_saturates() {
    let a = vec![c(0.0, 0.0); 300];
    let b = vec![c(1.0, 0.0); 300];
    let options = CompareOptions {
        all: true,
        ..CompareOptions::default()
    };
    let report = compare(&a, &b, options);
    assert_eq!(report.mismatches.len(), 300);
    assert_eq!(report.exit_code(), 255);
}
