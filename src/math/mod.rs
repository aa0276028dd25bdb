pub mod interpolate;
pub mod rotation;
pub mod vector;
pub mod vector_n;

pub use interpolate::Interpolate;
pub use rotation::Rotation;
pub use vector::{Axis, Vector, Vector2, Vector3};
pub use vector_n::VectorN;

/// Global tolerance for floating-point comparisons of vector components.
pub const TOLERANCE: f64 = 1e-13;

/// Returns whether `a` and `b` are close enough to be considered equal.
///
/// Any comparison involving NaN is unequal.
#[must_use]
pub fn precision_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Compares two component slices with [`precision_eq`].
///
/// Slices of different length are never equal.
#[must_use]
pub fn components_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| precision_eq(x, y))
}
