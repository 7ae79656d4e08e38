//! Direct N-body gravity (O(N²) implementation).

use nalgebra::Vector2;

use crate::error::SimError;
use crate::forces::{pairwise_force, ForceModel, G};
use crate::state::SystemState;

/// Exhaustive pairwise gravitational force computation.
///
/// Sums [`pairwise_force`] over every other body. Exact but quadratic, so
/// it serves as the correctness reference for [`crate::TreeGravity`] and is
/// fine for small systems.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use gravitree::{DirectGravity, ForceModel, SystemState};
///
/// let mut system = SystemState::new();
/// system.add_body(10.0, Point2::new(0.0, 0.0), Vector2::zeros());
/// system.add_body(10.0, Point2::new(3.0, 3.0), Vector2::zeros());
///
/// let force = DirectGravity::new().force(0, &system).unwrap();
/// assert!(force.x > 0.0 && force.y > 0.0);
/// ```
pub struct DirectGravity;

impl DirectGravity {
    pub fn new() -> Self {
        DirectGravity
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn force(&self, idx: usize, state: &SystemState) -> Result<Vector2<f64>, SimError> {
        let body = &state.bodies[idx];
        Ok(state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| pairwise_force(body, other))
            .fold(Vector2::zeros(), |acc, f| acc + f))
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        // each pair counted once; coincident pairs contribute nothing
        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let r = (a.position - b.position).magnitude();
                    if r == 0.0 {
                        0.0
                    } else {
                        -G * a.mass * b.mass / r
                    }
                })
            })
            .sum()
    }
}
