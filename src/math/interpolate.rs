use super::vector::Vector;
use super::vector_n::VectorN;
use super::TOLERANCE;
use crate::error::VectorError;

/// Sweep angle used by [`Interpolate::slerp_default`], in degrees.
pub const DEFAULT_SLERP_ANGLE: f64 = 90.0;

/// Linear and spherical interpolation between two vectors.
///
/// Implementors only provide [`Interpolate::combine`]; the interpolation
/// formulas are shared by every vector type.
pub trait Interpolate: Sized {
    /// Returns `a * self + b * other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the operands have
    /// different dimensions.
    fn combine(&self, a: f64, other: &Self, b: f64) -> Result<Self, VectorError>;

    /// `start + t * (end - start)`. `t` is not restricted to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the operands have
    /// different dimensions.
    fn lerp(start: &Self, end: &Self, t: f64) -> Result<Self, VectorError> {
        let delta = end.combine(1.0, start, -1.0)?;
        start.combine(1.0, &delta, t)
    }

    /// Spherical interpolation with a sweep angle `omega` in degrees:
    /// `sin((1-t)ω)/sin(ω) * start + sin(tω)/sin(ω) * end`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DegenerateInterpolation`] if `sin(ω)` is zero
    /// (ω a multiple of 180°), or [`VectorError::DimensionMismatch`] if the
    /// operands have different dimensions.
    fn slerp(start: &Self, end: &Self, t: f64, omega: f64) -> Result<Self, VectorError> {
        let w = omega.to_radians();
        let s = w.sin();
        if s.abs() < TOLERANCE {
            return Err(VectorError::DegenerateInterpolation { omega });
        }
        start.combine(((1.0 - t) * w).sin() / s, end, (t * w).sin() / s)
    }

    /// [`Interpolate::slerp`] with a sweep of [`DEFAULT_SLERP_ANGLE`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the operands have
    /// different dimensions.
    fn slerp_default(start: &Self, end: &Self, t: f64) -> Result<Self, VectorError> {
        Self::slerp(start, end, t, DEFAULT_SLERP_ANGLE)
    }
}

impl<const N: usize> Interpolate for Vector<N> {
    fn combine(&self, a: f64, other: &Self, b: f64) -> Result<Self, VectorError> {
        Ok(self.linear_combination(a, other, b))
    }
}

impl Interpolate for VectorN {
    fn combine(&self, a: f64, other: &Self, b: f64) -> Result<Self, VectorError> {
        self.linear_combination(a, other, b)
    }
}
