use crate::geometry::{Scalar, Vector2};
use crate::shapes::Rect;
use ::euclid::{Box2D, Point2D, Size2D, Vector2D};

impl<T, U> From<Vector2D<T, U>> for Vector2<T> {
    fn from(vec: Vector2D<T, U>) -> Self {
        Vector2 { x: vec.x, y: vec.y }
    }
}

impl<T, U> From<Vector2<T>> for Vector2D<T, U> {
    fn from(vec: Vector2<T>) -> Self {
        Vector2D::new(vec.x, vec.y)
    }
}

impl<T, U> From<Point2D<T, U>> for Vector2<T> {
    fn from(point: Point2D<T, U>) -> Self {
        Vector2 {
            x: point.x,
            y: point.y,
        }
    }
}

impl<T, U> From<Vector2<T>> for Point2D<T, U> {
    fn from(vec: Vector2<T>) -> Self {
        Point2D::new(vec.x, vec.y)
    }
}

impl<T, U> From<Size2D<T, U>> for Vector2<T> {
    fn from(size: Size2D<T, U>) -> Self {
        Vector2 {
            x: size.width,
            y: size.height,
        }
    }
}

impl<T, U> From<Vector2<T>> for Size2D<T, U> {
    fn from(vec: Vector2<T>) -> Self {
        Size2D::new(vec.x, vec.y)
    }
}

/// The euclid rectangle is expressed as an origin and a size: `p2` becomes `left + width` and
/// `top + height`.
impl<T: Scalar, U> From<::euclid::Rect<T, U>> for Rect<T> {
    fn from(rect: ::euclid::Rect<T, U>) -> Self {
        let left = rect.origin.x;
        let top = rect.origin.y;
        Rect::new(left, top, left + rect.size.width, top + rect.size.height)
    }
}

/// The size of the resulting rectangle is `p2 - p1`.
impl<T: Scalar, U> From<Rect<T>> for ::euclid::Rect<T, U> {
    fn from(rect: Rect<T>) -> Self {
        ::euclid::Rect::new(rect.p1.into(), (rect.p2 - rect.p1).into())
    }
}

impl<T, U> From<Box2D<T, U>> for Rect<T> {
    fn from(bbox: Box2D<T, U>) -> Self {
        Rect {
            p1: bbox.min.into(),
            p2: bbox.max.into(),
        }
    }
}

impl<T, U> From<Rect<T>> for Box2D<T, U> {
    fn from(rect: Rect<T>) -> Self {
        Box2D::new(rect.p1.into(), rect.p2.into())
    }
}

impl<T: Scalar> Rect<T> {
    /// Converts the rectangle into an euclid one, using `p1` as origin and `p2` as size.
    ///
    /// The resulting rectangle is geometrically correct only if `p1` is the origin. This function
    /// reproduces the historical conversion, new code should use the `From` implementation, that
    /// computes the size as `p2 - p1`.
    /// # Examples
    /// ```
    /// use planar::shapes::Rect;
    ///
    /// let rect = Rect::new(2, 2, 5, 6);
    /// let legacy: euclid::default::Rect<i32> = rect.to_euclid_rect_compat();
    /// let correct: euclid::default::Rect<i32> = rect.into();
    ///
    /// assert_eq!(legacy.size, euclid::size2(5, 6));
    /// assert_eq!(correct.size, euclid::size2(3, 4));
    /// ```
    pub fn to_euclid_rect_compat<U>(&self) -> ::euclid::Rect<T, U> {
        ::euclid::Rect::new(self.p1.into(), self.p2.into())
    }
}
