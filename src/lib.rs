pub mod clock;
pub mod error;
pub mod math;

pub use clock::{Clock, Timer, TimerId};
pub use error::{ClockError, Error, Result, VectorError};
pub use math::{Interpolate, Rotation, Vector, Vector2, Vector3, VectorN};
