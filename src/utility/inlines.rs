/// Performs an equality comparison between two double precision floats with a given margin of
/// error. This error is represented by `epsilon` and is the maximum allowed difference between the
/// two numbers to still be counted as equality. A negative value will result in every number being
/// different from any other.
/// # Examples
/// Basic usage:
/// ```
/// use planar::utility::float_eq;
///
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert!(float_eq(0.1 + 0.2, 0.3, 1E-9));
/// ```
#[inline]
pub fn float_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Returns the smallest of two partially ordered values.
///
/// The canonical std::cmp::min requires the trait Ord, which floating point values do not
/// implement. When the two values are equivalent, or not comparable, `a` is returned.
/// # Examples
/// ```
/// use planar::utility::partial_min;
///
/// assert_eq!(partial_min(2.5, -1.0), -1.0);
/// assert_eq!(partial_min(3, 3), 3);
/// ```
#[inline]
pub fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the biggest of two partially ordered values.
///
/// When the two values are equivalent, or not comparable, `a` is returned.
/// # Examples
/// ```
/// use planar::utility::partial_max;
///
/// assert_eq!(partial_max(2.5, -1.0), 2.5);
/// ```
#[inline]
pub fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}
