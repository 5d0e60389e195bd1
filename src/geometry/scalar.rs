use num_traits::{Num, NumAssignOps, NumCast};
use std::fmt::{Debug, Display};

/// Numeric type usable as a component of a [`Vector2`](crate::geometry::Vector2) or a
/// [`Rect`](crate::shapes::Rect).
///
/// Every primitive integer and floating point type implements this trait. Operations that can
/// not be expressed in the element type itself (lengths, angles, scaling by a real factor) are
/// carried out in double precision and converted back with the same semantics as the `as`
/// operator.
pub trait Scalar:
    Copy + PartialOrd + Debug + Display + Default + Num + NumAssignOps + NumCast + 'static
{
    /// Tolerance used when comparing lengths computed from components of this type.
    ///
    /// It accounts for the rounding of the components themselves, so it is zero for integers.
    const LENGTH_TOLERANCE: f64;

    /// Widens the value into a double precision float.
    /// # Examples
    /// ```
    /// use planar::geometry::Scalar;
    ///
    /// assert_eq!(7_u8.to_double(), 7.0);
    /// ```
    fn to_double(self) -> f64;

    /// Narrows a double precision float into this type.
    ///
    /// Integers truncate toward zero and saturate at their bounds, `NaN` becomes `0`.
    /// # Examples
    /// ```
    /// use planar::geometry::Scalar;
    ///
    /// assert_eq!(i32::from_double(-2.7), -2);
    /// assert_eq!(u8::from_double(300.0), 255);
    /// assert_eq!(i16::from_double(f64::NAN), 0);
    /// ```
    fn from_double(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($eps:expr; $($t:ty)*) => {$(
        impl Scalar for $t {
            const LENGTH_TOLERANCE: f64 = $eps;

            #[inline]
            fn to_double(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_double(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_scalar!(0.0; i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
impl_scalar!(1E-6; f32);
impl_scalar!(1E-12; f64);
