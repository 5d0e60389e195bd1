use crate::utility::{float_eq, partial_max, partial_min};

#[test]
fn inlines_float_eq_exact() {
    let a = 0.0;
    let b = 0.0;
    assert!(float_eq(a, b, 1E-9));
}

#[test]
fn inlines_float_eq_inexact() {
    let a = 0.3;
    let errored = a + f64::EPSILON;
    assert_ne!(a, errored);
    assert!(float_eq(a, errored, 1E-9));
    assert!(!float_eq(a, errored, 1E-20));
}

#[test]
fn inlines_float_eq_negative_epsilon() {
    assert!(!float_eq(1.0, 1.0, -1.0));
}

#[test]
fn inlines_partial_min() {
    assert_eq!(partial_min(-3, 7), -3);
    assert_eq!(partial_min(7, -3), -3);
    assert_eq!(partial_min(0.5, 0.25), 0.25);
}

#[test]
fn inlines_partial_max() {
    assert_eq!(partial_max(-3, 7), 7);
    assert_eq!(partial_max(7, -3), 7);
    assert_eq!(partial_max(0.5, 0.25), 0.5);
}

#[test]
fn inlines_partial_nan_keeps_first() {
    assert_eq!(partial_min(1.0, f64::NAN), 1.0);
    assert_eq!(partial_max(1.0, f64::NAN), 1.0);
    assert!(partial_min(f64::NAN, 1.0).is_nan());
}
