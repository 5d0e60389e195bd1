use crate::geometry::Scalar;
use crate::utility::{float_eq, partial_max, partial_min};
use num_traits::{AsPrimitive, NumCast};
use std::fmt::Formatter;
use std::ops;

/// A vector of two components.
///
/// Vector2 represents either a location or a displacement in a 2D cartesian space. The
/// components are generic over any [`Scalar`] type, so the same type works for pixel coordinates
/// (`Vector2<i32>`, `Vector2<u32>`) and world coordinates (`Vector2<f32>`, `Vector2<f64>`).
///
/// A Vector2 consist of two coordinates, usually called `x`, and `y`.
///
/// No operation validates its input: zero-length normalization or division by zero result in
/// `NaN` or infinite components for floating point types, exactly as the IEEE-754 arithmetic
/// would.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    /// The `x` component of the vector.
    pub x: T,
    /// The `y` component of the vector.
    pub y: T,
}

/// A vector with double precision components.
pub type Vector2d = Vector2<f64>;
/// A vector with single precision components.
pub type Vector2f = Vector2<f32>;
/// A vector with signed integer components.
pub type Vector2i = Vector2<i32>;
/// A vector with unsigned integer components.
pub type Vector2u = Vector2<u32>;

impl<T: Scalar> Vector2<T> {
    /// Constructs a 2D zero vector, a vector in the form `(0, 0)`.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::<f32>::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// ```
    pub fn zero() -> Vector2<T> {
        Vector2 {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Constructs a vector with the given `(x, y)` components.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::new(3.5, -2.2);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.2);
    /// ```
    pub fn new(x: T, y: T) -> Vector2<T> {
        Vector2 { x, y }
    }

    /// Performs the dot product between two vectors.
    ///
    /// The product is always evaluated in double precision, regardless of the component type.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::new(1, 2);
    /// let v2 = Vector2::new(4, -5);
    ///
    /// assert_eq!(v.dot(&v2), -6.0);
    /// ```
    pub fn dot(&self, other: &Vector2<T>) -> f64 {
        self.x.to_double() * other.x.to_double() + self.y.to_double() * other.y.to_double()
    }

    /// Returns the euclidean length (or magnitude) of the vector.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::new(3, 4);
    ///
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        let x = self.x.to_double();
        let y = self.y.to_double();
        (x * x + y * y).sqrt()
    }

    /// Returns the argument of the vector: the angle in radians between the positive `x` axis and
    /// the vector itself.
    ///
    /// The returned value lies in the range (-π, π]. The zero vector has an argument of `0.0`.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_eq!(Vector2::new(1.0, 0.0).arg(), 0.0);
    /// assert!((Vector2::new(0.0, 1.0).arg() - FRAC_PI_2).abs() < 1E-12);
    /// ```
    pub fn arg(&self) -> f64 {
        self.y.to_double().atan2(self.x.to_double())
    }

    /// Returns the normalized version of the current vector. A vector is normalized if its
    /// euclidean length is equal to 1.0.
    ///
    /// Normalizing a zero-length vector divides by zero: floating point components become `NaN`.
    /// If compiled with debug assertions, a warning is issued in this case.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::new(0.0, 5.0);
    /// let normalized = v.norm();
    ///
    /// assert_eq!(normalized.magnitude(), 1.0);
    /// assert!(Vector2::new(0.0_f64, 0.0).norm().x.is_nan());
    /// ```
    #[must_use = "Vector2::norm() does not act in place!"]
    pub fn norm(&self) -> Vector2<T> {
        let len = self.magnitude();
        #[cfg(debug_assertions)]
        {
            if len == 0.0 {
                log::warn!("Normalizing a zero-length vector");
            }
        }
        *self / len
    }

    /// Checks whether the vector is normalized or not.
    ///
    /// The length is compared against 1.0 with the tolerance of the component type,
    /// [`Scalar::LENGTH_TOLERANCE`].
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let normalized = Vector2::new(1.0, 0.0);
    /// let not_normalized = Vector2::new(1.5, 0.5);
    ///
    /// assert!(normalized.is_normalized());
    /// assert!(!not_normalized.is_normalized());
    /// ```
    pub fn is_normalized(&self) -> bool {
        float_eq(self.magnitude(), 1.0, T::LENGTH_TOLERANCE)
    }

    /// Computes the euclidean distance between two points, by computing the length of the segment
    /// between them.
    ///
    /// The difference is taken in double precision, so unsigned vectors do not underflow.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let p1 = Vector2::new(-1, -1);
    /// let p2 = Vector2::new(2, 3);
    ///
    /// assert_eq!(p1.distance(&p2), 5.0);
    /// ```
    pub fn distance(&self, other: &Vector2<T>) -> f64 {
        (self.to_f64() - other.to_f64()).magnitude()
    }

    /// Converts the vector into a double precision one.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::new(3_u8, 250_u8).to_f64();
    ///
    /// assert_eq!(v, Vector2::new(3.0, 250.0));
    /// ```
    pub fn to_f64(&self) -> Vector2<f64> {
        Vector2 {
            x: self.x.to_double(),
            y: self.y.to_double(),
        }
    }

    /// Converts every component into another numeric type.
    ///
    /// The conversion has the same semantics of the `as` keyword: floats are truncated toward
    /// zero when converted into integers, and values not fitting the target type saturate.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let v = Vector2::new(2.9_f64, -2.9_f64);
    /// let truncated = v.cast::<i32>();
    ///
    /// assert_eq!(truncated, Vector2::new(2, -2));
    /// ```
    pub fn cast<U: Scalar>(&self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
    {
        Vector2 {
            x: self.x.as_(),
            y: self.y.as_(),
        }
    }

    /// Converts every component into another numeric type, returning `None` if any of them can
    /// not be represented by the target type.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// assert_eq!(Vector2::new(12, 7).try_cast::<u8>(), Some(Vector2::new(12_u8, 7_u8)));
    /// assert_eq!(Vector2::new(-1, 7).try_cast::<u8>(), None);
    /// ```
    pub fn try_cast<U: Scalar>(&self) -> Option<Vector2<U>> {
        Some(Vector2 {
            x: <U as NumCast>::from(self.x)?,
            y: <U as NumCast>::from(self.y)?,
        })
    }

    /// Calculates the minimum between two vectors.
    /// The returned vector will have the minimum value for each component.
    ///
    /// This function is implemented because the canonical std::cmp::min requires the trait Ord
    /// which in turn requires Eq. The trait Eq, however, has subtle implication for floating point
    /// values.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let a = Vector2::new(-1.0, 1.0);
    /// let b = Vector2::new(-2.0, 2.0);
    /// let min = Vector2::min(&a, &b);
    ///
    /// assert_eq!(min.x, b.x);
    /// assert_eq!(min.y, a.y);
    /// ```
    pub fn min(a: &Vector2<T>, b: &Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: partial_min(a.x, b.x),
            y: partial_min(a.y, b.y),
        }
    }

    /// Calculates the maximum between two vectors.
    /// The returned vector will have the maximum value for each component.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    ///
    /// let a = Vector2::new(-1.0, 1.0);
    /// let b = Vector2::new(-2.0, 2.0);
    /// let max = Vector2::max(&a, &b);
    ///
    /// assert_eq!(max.x, a.x);
    /// assert_eq!(max.y, b.y);
    /// ```
    pub fn max(a: &Vector2<T>, b: &Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: partial_max(a.x, b.x),
            y: partial_max(a.y, b.y),
        }
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from(coords: (T, T)) -> Self {
        Vector2 {
            x: coords.0,
            y: coords.1,
        }
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(vec: Vector2<T>) -> Self {
        (vec.x, vec.y)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl<T: Scalar + ops::Neg<Output = T>> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> ops::Add for Vector2<T> {
    type Output = Vector2<T>;

    fn add(self, rhs: Vector2<T>) -> Self::Output {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> ops::Sub for Vector2<T> {
    type Output = Vector2<T>;

    fn sub(self, rhs: Vector2<T>) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> ops::AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Vector2<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> ops::SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Vector2<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// Scaling happens in double precision, then each component is narrowed back into T.
impl<T: Scalar> ops::Mul<f64> for Vector2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector2 {
            x: T::from_double(rhs * self.x.to_double()),
            y: T::from_double(rhs * self.y.to_double()),
        }
    }
}

impl<T: Scalar> ops::Mul<Vector2<T>> for f64 {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Self::Output {
        rhs * self
    }
}

impl<T: Scalar> ops::Div<f64> for Vector2<T> {
    type Output = Vector2<T>;

    fn div(self, rhs: f64) -> Self::Output {
        Vector2 {
            x: T::from_double(self.x.to_double() / rhs),
            y: T::from_double(self.y.to_double() / rhs),
        }
    }
}

impl<T: Scalar> ops::MulAssign<f64> for Vector2<T> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> ops::DivAssign<f64> for Vector2<T> {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
