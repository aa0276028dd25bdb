use super::vector::{Vector2, Vector3};
use crate::error::VectorError;

/// Rotation of a vector about the origin.
pub trait Rotation: Sized {
    /// Rotates by `angle` radians.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Unsupported`] if the type has no canonical
    /// rotation axis.
    fn rotate(&self, angle: f64) -> Result<Self, VectorError>;

    /// Rotates by `angle` degrees.
    ///
    /// # Errors
    ///
    /// Same as [`Rotation::rotate`].
    fn rotate_deg(&self, angle: f64) -> Result<Self, VectorError> {
        self.rotate(angle.to_radians())
    }
}

/// Counter-clockwise rotation, rebuilt in polar form from the current
/// magnitude and angle.
impl Rotation for Vector2 {
    fn rotate(&self, angle: f64) -> Result<Self, VectorError> {
        Ok(Self::from_polar(self.magnitude(), self.angle() + angle))
    }
}

/// There is no canonical axis to rotate a 3D vector about.
impl Rotation for Vector3 {
    fn rotate(&self, _angle: f64) -> Result<Self, VectorError> {
        tracing::debug!(vector = %self, "refusing to rotate a 3D vector without an axis");
        Err(VectorError::Unsupported {
            operation: "rotate",
            dimensions: 3,
        })
    }
}
