mod inlines;
pub use self::inlines::float_eq;
pub use self::inlines::partial_max;
pub use self::inlines::partial_min;

#[cfg(test)]
mod tests;
