/// Module containing the element type contract and the two dimensional vector.
pub mod geometry;
/// Module containing conversions from and to other math crates. Each conversion is enabled by the
/// cargo feature with the name of the foreign crate: `euclid` or `cgmath`.
pub mod interop;
/// Module containing geometric primitives built on top of vectors, like Rectangles.
pub mod shapes;
/// Module containing utility functions that does not properly fit anywhere else.
pub mod utility;
