//! Small vector helpers on top of nalgebra.

use nalgebra::Vector2;

use crate::error::SimError;

/// Returns the unit vector pointing in the direction of `v`.
///
/// Normalizing a zero-length vector has no defined direction, so it is
/// rejected with [`SimError::DegenerateVector`] instead of dividing by zero.
/// Callers must supply their own fallback direction.
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use gravitree::vector::normalized;
///
/// let unit = normalized(Vector2::new(3.0, 4.0)).unwrap();
/// assert!((unit.magnitude() - 1.0).abs() < 1e-12);
///
/// assert!(normalized(Vector2::zeros()).is_err());
/// ```
pub fn normalized(v: Vector2<f64>) -> Result<Vector2<f64>, SimError> {
    let length = v.magnitude();
    if length == 0.0 {
        return Err(SimError::DegenerateVector);
    }
    Ok(v / length)
}
