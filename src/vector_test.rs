use approx::assert_relative_eq;
use nalgebra::Vector2;

use crate::error::SimError;
use crate::vector::normalized;

#[test]
fn test_normalized_returns_unit_vector() {
    let unit = normalized(Vector2::new(3.0, 4.0)).unwrap();

    assert_relative_eq!(unit, Vector2::new(0.6, 0.8));
    assert_relative_eq!(unit.magnitude(), 1.0);
}

#[test]
fn test_normalized_rejects_zero_vector() {
    assert_eq!(
        normalized(Vector2::zeros()).unwrap_err(),
        SimError::DegenerateVector
    );
}
