use crate::geometry::{Scalar, Vector2};
use num_traits::AsPrimitive;
use std::fmt::Formatter;

/// An axis aligned rectangle.
///
/// The rectangle is defined by two corners: `p1`, usually the top left one, and `p2`, usually the
/// bottom right one. The order of the corners is never enforced nor corrected, so a rectangle
/// built with inverted corners has negative width or height and contains no points. Only
/// [`Rect::intersect`] and [`Rect::intersection`] are independent of the corners order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    /// The first corner of the rectangle, expected to have the minimum coordinates.
    pub p1: Vector2<T>,
    /// The second corner of the rectangle, expected to have the maximum coordinates.
    pub p2: Vector2<T>,
}

/// A rectangle with double precision corners.
pub type Rectd = Rect<f64>;
/// A rectangle with single precision corners.
pub type Rectf = Rect<f32>;
/// A rectangle with signed integer corners.
pub type Recti = Rect<i32>;
/// A rectangle with unsigned integer corners.
pub type Rectu = Rect<u32>;

impl<T: Scalar> Rect<T> {
    /// Constructs a degenerate rectangle with both corners in the origin.
    pub fn zero() -> Rect<T> {
        Rect {
            p1: Vector2::zero(),
            p2: Vector2::zero(),
        }
    }

    /// Constructs a rectangle given the coordinates of its two corners.
    ///
    /// Note that `x2` and `y2` are coordinates, not the width and height of the rectangle.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(1, 2, 4, 6);
    ///
    /// assert_eq!(rect.p1, Vector2::new(1, 2));
    /// assert_eq!(rect.p2, Vector2::new(4, 6));
    /// ```
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Rect<T> {
        Rect {
            p1: Vector2::new(x1, y1),
            p2: Vector2::new(x2, y2),
        }
    }

    /// Constructs a rectangle given its two corners.
    pub fn from_corners(p1: Vector2<T>, p2: Vector2<T>) -> Rect<T> {
        Rect { p1, p2 }
    }

    /// Constructs a rectangle spanning from the origin to the point `(x2, y2)`.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::origin_to(3.0, 2.0);
    ///
    /// assert_eq!(rect, Rect::new(0.0, 0.0, 3.0, 2.0));
    /// ```
    pub fn origin_to(x2: T, y2: T) -> Rect<T> {
        Rect::origin_to_point(Vector2::new(x2, y2))
    }

    /// Constructs a rectangle spanning from the origin to the given point.
    pub fn origin_to_point(p2: Vector2<T>) -> Rect<T> {
        Rect {
            p1: Vector2::zero(),
            p2,
        }
    }

    /// Legacy inequality comparison.
    ///
    /// Returns true if the second corner of `other` differs from either of the corners of `self`.
    /// This is **not** the negation of `==`: two equal degenerate rectangles are never different,
    /// but two equal non-degenerate rectangles always are. The `!=` operator should be preferred,
    /// this function exists for consumers depending on the old truth table.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(0, 0, 10, 10);
    ///
    /// assert!(rect == rect);
    /// assert!(rect.compat_ne(&rect));
    /// ```
    pub fn compat_ne(&self, other: &Rect<T>) -> bool {
        other.p2 != self.p1 || other.p2 != self.p2
    }

    // signed p2 - p1, without underflowing unsigned types
    fn diagonal(&self) -> Vector2<f64> {
        self.p2.to_f64() - self.p1.to_f64()
    }

    /// Returns the width of the rectangle, `p2.x - p1.x`.
    ///
    /// The result is negative if the corners are inverted along the `x` axis.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// assert_eq!(Rect::new(0, 0, 10, 10).width(), 10.0);
    /// assert_eq!(Rect::new(10, 0, 0, 10).width(), -10.0);
    /// ```
    pub fn width(&self) -> f64 {
        self.diagonal().x
    }

    /// Returns the height of the rectangle, `p2.y - p1.y`.
    ///
    /// The result is negative if the corners are inverted along the `y` axis.
    pub fn height(&self) -> f64 {
        self.diagonal().y
    }

    /// Returns the area of the rectangle, as `width * height`.
    ///
    /// The area is negative if the corners are inverted along exactly one axis.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// assert_eq!(Rect::new(0, 0, 10, 10).area(), 100.0);
    /// ```
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns true if the given point is inside the rectangle or on its edges.
    ///
    /// The check assumes `p1` to be the minimum corner and `p2` the maximum one.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(0, 0, 10, 10);
    ///
    /// assert!(rect.contains(&Vector2::new(5, 5)));
    /// assert!(rect.contains(&Vector2::new(10, 10)));
    /// assert!(!rect.contains(&Vector2::new(11, 5)));
    /// ```
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        point.x >= self.p1.x && point.x <= self.p2.x && point.y >= self.p1.y && point.y <= self.p2.y
    }

    // Lower and upper corners of the overlap span, computed on each axis independently.
    fn overlap(&self, other: &Rect<T>) -> (Vector2<T>, Vector2<T>) {
        let low = Vector2::max(
            &Vector2::min(&self.p1, &self.p2),
            &Vector2::min(&other.p1, &other.p2),
        );
        let high = Vector2::min(
            &Vector2::max(&self.p1, &self.p2),
            &Vector2::max(&other.p1, &other.p2),
        );
        (low, high)
    }

    /// Returns true if the two rectangles overlap.
    ///
    /// Rectangles sharing only an edge or a corner are not considered intersecting.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(0, 0, 10, 10);
    ///
    /// assert!(rect.intersect(&Rect::new(5, 5, 15, 15)));
    /// assert!(!rect.intersect(&Rect::new(10, 0, 20, 10)));
    /// ```
    pub fn intersect(&self, other: &Rect<T>) -> bool {
        let (low, high) = self.overlap(other);
        low.x < high.x && low.y < high.y
    }

    /// Returns the overlapping region of two rectangles.
    ///
    /// The rectangles are not required to actually intersect: in that case the returned rectangle
    /// is degenerate or has its corners inverted on at least one axis. Use [`Rect::intersect`] to
    /// check beforehand.
    /// If compiled with debug assertions, a warning is issued when the rectangles do not intersect.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(0, 0, 10, 10);
    /// let other = Rect::new(15, 15, 5, 5);
    ///
    /// assert_eq!(rect.intersection(&other), Rect::new(5, 5, 10, 10));
    /// ```
    pub fn intersection(&self, other: &Rect<T>) -> Rect<T> {
        let (low, high) = self.overlap(other);
        #[cfg(debug_assertions)]
        {
            if !(low.x < high.x && low.y < high.y) {
                log::warn!("Computing the intersection of non-intersecting rectangles");
            }
        }
        Rect::from_corners(low, high)
    }

    /// Returns a new rectangle translated by the given amount.
    /// # Examples
    /// ```
    /// use planar::geometry::Vector2;
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(0, 0, 10, 10);
    /// let moved = rect.transform(&Vector2::new(-2, 3));
    ///
    /// assert_eq!(moved, Rect::new(-2, 3, 8, 13));
    /// ```
    #[must_use = "Rect::transform() does not act in place!"]
    pub fn transform(&self, shift: &Vector2<T>) -> Rect<T> {
        Rect {
            p1: self.p1 + *shift,
            p2: self.p2 + *shift,
        }
    }

    /// Converts both corners into another numeric type, with the semantics of the `as` keyword.
    pub fn cast<U: Scalar>(&self) -> Rect<U>
    where
        T: AsPrimitive<U>,
    {
        Rect {
            p1: self.p1.cast::<U>(),
            p2: self.p2.cast::<U>(),
        }
    }

    /// Converts both corners into another numeric type, returning `None` if any coordinate can
    /// not be represented by the target type.
    pub fn try_cast<U: Scalar>(&self) -> Option<Rect<U>> {
        Some(Rect {
            p1: self.p1.try_cast::<U>()?,
            p2: self.p2.try_cast::<U>()?,
        })
    }
}

impl<T: Scalar> From<Vector2<T>> for Rect<T> {
    fn from(p2: Vector2<T>) -> Self {
        Rect::origin_to_point(p2)
    }
}

impl<T> From<(Vector2<T>, Vector2<T>)> for Rect<T> {
    fn from(corners: (Vector2<T>, Vector2<T>)) -> Self {
        Rect {
            p1: corners.0,
            p2: corners.1,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {})", self.p1, self.p2)
    }
}
