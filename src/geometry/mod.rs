mod scalar;
pub use self::scalar::Scalar;
mod vec;
pub use self::vec::{Vector2, Vector2d, Vector2f, Vector2i, Vector2u};
