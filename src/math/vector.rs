use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use nalgebra::SVector;

use super::components_eq;
use crate::error::VectorError;

/// Named axis of a fixed-dimension vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the 0-based component index of this axis.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl FromStr for Axis {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(VectorError::UnknownAxis(s.to_owned())),
        }
    }
}

/// Euclidean vector with a compile-time dimension.
///
/// Values are immutable: every operation returns a new vector, and the
/// magnitude is always computed from the current components.
/// Equality is tolerance-based, see [`super::precision_eq`].
#[derive(Debug, Clone, Copy)]
pub struct Vector<const N: usize>(SVector<f64, N>);

/// 2D vector.
pub type Vector2 = Vector<2>;

/// 3D vector.
pub type Vector3 = Vector<3>;

impl<const N: usize> Vector<N> {
    /// Creates a vector from its components.
    #[must_use]
    pub fn from_array(components: [f64; N]) -> Self {
        Self(SVector::from(components))
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self(SVector::zeros())
    }

    /// Number of components.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        N
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Index`] if `index >= N`.
    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        self.0.get(index).copied().ok_or(VectorError::Index {
            index,
            dimensions: N,
        })
    }

    /// Returns the component along a named axis.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Index`] if the axis does not exist in this dimension.
    pub fn component(&self, axis: Axis) -> Result<f64, VectorError> {
        self.get(axis.index())
    }

    /// Returns the component named `"x"`, `"y"` or `"z"`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UnknownAxis`] for any other name, or
    /// [`VectorError::Index`] if the axis does not exist in this dimension.
    pub fn get_named(&self, name: &str) -> Result<f64, VectorError> {
        self.component(name.parse()?)
    }

    /// Returns a copy of this vector with one component replaced.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Index`] if `index >= N`.
    pub fn with_component(&self, index: usize, value: f64) -> Result<Self, VectorError> {
        let mut inner = self.0;
        let slot = inner.get_mut(index).ok_or(VectorError::Index {
            index,
            dimensions: N,
        })?;
        *slot = value;
        Ok(Self(inner))
    }

    /// Components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Components as an array.
    #[must_use]
    pub fn to_array(&self) -> [f64; N] {
        self.0.into()
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Euclidean length.
    ///
    /// Components are scaled by the largest absolute component first, so
    /// finite inputs neither overflow nor underflow when squared.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        let scale = self.0.amax();
        if scale > 0.0 && scale.is_finite() {
            (self.0 / scale).norm() * scale
        } else {
            self.0.norm()
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Dot product `Σ aᵢ·bᵢ`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] for the zero vector.
    pub fn normalized(&self) -> Result<Self, VectorError> {
        let len = self.magnitude();
        if len <= 0.0 {
            return Err(VectorError::ZeroVector);
        }
        Ok(*self / len)
    }

    /// Divides by `scalar`, refusing an exact zero instead of producing
    /// infinities or NaN like the `/` operator does.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `scalar` is zero.
    #[allow(clippy::float_cmp)]
    pub fn checked_div(&self, scalar: f64) -> Result<Self, VectorError> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(*self / scalar)
    }

    /// Rounds every component to the nearest integer, ties to even.
    #[must_use]
    pub fn int_clamp(&self) -> Self {
        Self(self.0.map(f64::round_ties_even))
    }

    /// Displacement from `a` to `b`, i.e. `b - a`.
    #[must_use]
    pub fn direction(a: &Self, b: &Self) -> Self {
        *b - *a
    }

    /// Unsigned angle in radians between two vectors, in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] if either vector has zero length.
    pub fn angle_between(&self, other: &Self) -> Result<f64, VectorError> {
        let a = self.normalized()?;
        let b = other.normalized()?;
        // Rounding can push the cosine just past ±1.
        Ok(a.dot(&b).clamp(-1.0, 1.0).acos())
    }

    /// `a * self + b * other`.
    pub(crate) fn linear_combination(&self, a: f64, other: &Self, b: f64) -> Self {
        Self(self.0 * a + other.0 * b)
    }
}

impl Vector2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_array([x, y])
    }

    /// Creates a vector from a length and an angle in radians.
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Creates a vector from a length and an angle in degrees.
    #[must_use]
    pub fn from_polar_deg(r: f64, theta: f64) -> Self {
        Self::from_polar(r, theta.to_radians())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Scalar cross product `a.x·b.y - a.y·b.x` (signed parallelogram area).
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Signed angle from the positive x axis, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y().atan2(self.x())
    }

    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        self.angle().to_degrees()
    }

    /// `self.angle() - other.angle()`.
    ///
    /// The result is not wrapped and may lie outside `(-π, π]`.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        self.angle() - other.angle()
    }

    #[must_use]
    pub fn angle_to_deg(&self, other: &Self) -> f64 {
        self.angle_to(other).to_degrees()
    }

    #[must_use]
    pub fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    #[must_use]
    pub fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    #[must_use]
    pub fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    #[must_use]
    pub fn right() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Vector3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_array([x, y, z])
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    /// Angle in radians between two vectors, in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] if either vector has zero length.
    pub fn angle(&self, other: &Self) -> Result<f64, VectorError> {
        self.angle_between(other)
    }

    /// Angle in degrees between two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] if either vector has zero length.
    pub fn angle_deg(&self, other: &Self) -> Result<f64, VectorError> {
        self.angle(other).map(f64::to_degrees)
    }

    #[must_use]
    pub fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[must_use]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Self) -> bool {
        components_eq(self.as_slice(), other.as_slice())
    }
}

impl<const N: usize> PartialEq<Option<Vector<N>>> for Vector<N> {
    fn eq(&self, other: &Option<Vector<N>>) -> bool {
        other.as_ref().is_some_and(|o| self == o)
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn mul(self, v: Vector<N>) -> Vector<N> {
        v * self
    }
}

/// Division by zero follows IEEE-754; see [`Vector::checked_div`].
impl<const N: usize> Div<f64> for Vector<N> {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self(self.0 / scalar)
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(components: [f64; N]) -> Self {
        Self::from_array(components)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    fn from(v: Vector<N>) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x(), v.y())
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x(), v.y(), v.z())
    }
}

impl<const N: usize> TryFrom<&[f64]> for Vector<N> {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        <[f64; N]>::try_from(components)
            .map(Self::from_array)
            .map_err(|_| VectorError::DimensionMismatch {
                expected: N,
                found: components.len(),
            })
    }
}

impl<const N: usize> TryFrom<Vec<f64>> for Vector<N> {
    type Error = VectorError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(components.as_slice())
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.as_slice())
    }
}

/// Writes components as a parenthesised tuple, e.g. `(3.0, 4.0)`.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c:?}")?;
    }
    f.write_str(")")
}
