use crate::geometry::Vector2;
use ::cgmath::Point2;

impl<T> From<::cgmath::Vector2<T>> for Vector2<T> {
    fn from(vec: ::cgmath::Vector2<T>) -> Self {
        Vector2 { x: vec.x, y: vec.y }
    }
}

impl<T> From<Vector2<T>> for ::cgmath::Vector2<T> {
    fn from(vec: Vector2<T>) -> Self {
        ::cgmath::Vector2::new(vec.x, vec.y)
    }
}

impl<T> From<Point2<T>> for Vector2<T> {
    fn from(point: Point2<T>) -> Self {
        Vector2 {
            x: point.x,
            y: point.y,
        }
    }
}

impl<T> From<Vector2<T>> for Point2<T> {
    fn from(vec: Vector2<T>) -> Self {
        Point2::new(vec.x, vec.y)
    }
}
