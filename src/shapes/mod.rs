mod rect;
pub use crate::shapes::rect::{Rect, Rectd, Rectf, Recti, Rectu};
