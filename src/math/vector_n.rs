use std::fmt;
use std::ops::{Div, Mul, Neg};

use nalgebra::DVector;

use super::components_eq;
use super::vector::{write_components, Vector};
use crate::error::VectorError;

/// Euclidean vector whose dimension is chosen at runtime.
///
/// Binary operations between vectors of different dimensions return
/// [`VectorError::DimensionMismatch`] instead of truncating. A vector of
/// dimension 0 is allowed and has magnitude 0.
#[derive(Debug, Clone)]
pub struct VectorN(DVector<f64>);

impl VectorN {
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self(DVector::from_vec(components))
    }

    /// The zero vector with `dimensions` components.
    #[must_use]
    pub fn zero(dimensions: usize) -> Self {
        Self(DVector::zeros(dimensions))
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Index`] if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        self.0.get(index).copied().ok_or(VectorError::Index {
            index,
            dimensions: self.dimensions(),
        })
    }

    /// Returns a copy of this vector with one component replaced.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Index`] if `index` is out of range.
    pub fn with_component(&self, index: usize, value: f64) -> Result<Self, VectorError> {
        let dimensions = self.dimensions();
        let mut inner = self.0.clone();
        let slot = inner
            .get_mut(index)
            .ok_or(VectorError::Index { index, dimensions })?;
        *slot = value;
        Ok(Self(inner))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Euclidean length, computed on components scaled by the largest
    /// absolute component so that finite inputs cannot overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let scale = self.0.amax();
        if scale > 0.0 && scale.is_finite() {
            (&self.0 / scale).norm() * scale
        } else {
            self.0.norm()
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    fn check_dimensions(&self, other: &Self) -> Result<(), VectorError> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            })
        }
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_dimensions(other)?;
        Ok(Self(&self.0 + &other.0))
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_dimensions(other)?;
        Ok(Self(&self.0 - &other.0))
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, other: &Self) -> Result<f64, VectorError> {
        self.check_dimensions(other)?;
        Ok(self.0.dot(&other.0))
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] for a zero or empty vector.
    pub fn normalized(&self) -> Result<Self, VectorError> {
        let len = self.magnitude();
        if len <= 0.0 {
            return Err(VectorError::ZeroVector);
        }
        Ok(self / len)
    }

    /// Divides by `scalar`, refusing an exact zero.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `scalar` is zero.
    #[allow(clippy::float_cmp)]
    pub fn checked_div(&self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self / scalar)
    }

    /// Rounds every component to the nearest integer, ties to even.
    #[must_use]
    pub fn int_clamp(&self) -> Self {
        Self(self.0.map(f64::round_ties_even))
    }

    /// Displacement from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn direction(a: &Self, b: &Self) -> Result<Self, VectorError> {
        b.try_sub(a)
    }

    /// Unsigned angle in radians between two vectors, in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ,
    /// or [`VectorError::ZeroVector`] if either vector has zero length.
    pub fn angle_between(&self, other: &Self) -> Result<f64, VectorError> {
        self.check_dimensions(other)?;
        let a = self.normalized()?;
        let b = other.normalized()?;
        Ok(a.dot(&b)?.clamp(-1.0, 1.0).acos())
    }

    pub(crate) fn linear_combination(
        &self,
        a: f64,
        other: &Self,
        b: f64,
    ) -> Result<Self, VectorError> {
        self.check_dimensions(other)?;
        Ok(Self(&self.0 * a + &other.0 * b))
    }
}

impl PartialEq for VectorN {
    fn eq(&self, other: &Self) -> bool {
        components_eq(self.as_slice(), other.as_slice())
    }
}

impl PartialEq<Option<VectorN>> for VectorN {
    fn eq(&self, other: &Option<VectorN>) -> bool {
        other.as_ref().is_some_and(|o| self == o)
    }
}

impl Neg for VectorN {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &VectorN {
    type Output = VectorN;

    fn neg(self) -> VectorN {
        VectorN(-&self.0)
    }
}

impl Mul<f64> for VectorN {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}

impl Mul<f64> for &VectorN {
    type Output = VectorN;

    fn mul(self, scalar: f64) -> VectorN {
        VectorN(&self.0 * scalar)
    }
}

impl Mul<VectorN> for f64 {
    type Output = VectorN;

    fn mul(self, v: VectorN) -> VectorN {
        v * self
    }
}

impl Div<f64> for VectorN {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self(self.0 / scalar)
    }
}

impl Div<f64> for &VectorN {
    type Output = VectorN;

    fn div(self, scalar: f64) -> VectorN {
        VectorN(&self.0 / scalar)
    }
}

impl From<Vec<f64>> for VectorN {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl From<&[f64]> for VectorN {
    fn from(components: &[f64]) -> Self {
        Self(DVector::from_column_slice(components))
    }
}

impl<const N: usize> From<Vector<N>> for VectorN {
    fn from(v: Vector<N>) -> Self {
        Self::from(v.as_slice())
    }
}

impl<const N: usize> TryFrom<&VectorN> for Vector<N> {
    type Error = VectorError;

    fn try_from(v: &VectorN) -> Result<Self, Self::Error> {
        Self::try_from(v.as_slice())
    }
}

impl FromIterator<f64> for VectorN {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.as_slice())
    }
}
