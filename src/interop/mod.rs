#[cfg(feature = "cgmath")]
mod cgmath;
#[cfg(feature = "euclid")]
mod euclid;
