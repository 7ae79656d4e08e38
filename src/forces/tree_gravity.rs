//! Tree-based gravity using the Barnes-Hut algorithm (O(N log N)).

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::error::SimError;
use crate::forces::{ForceModel, G};
use crate::state::SystemState;
use crate::tree::SpatialTree;

/// Barnes-Hut tree-based gravitational force computation.
///
/// Builds a fresh [`SpatialTree`] per bulk force evaluation and approximates
/// distant clusters as pseudo-bodies, controlled by the opening angle θ:
///
/// - θ = 0.0: exact, identical to [`crate::DirectGravity`]
/// - θ = 0.5: high accuracy, the usual default
/// - θ ≥ 1.0: fast, coarser
///
/// Once the tree is aggregated it is immutable, so per-body force queries
/// run in parallel with no synchronization.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use gravitree::{ForceModel, SystemState, TreeGravity};
///
/// let mut system = SystemState::new();
/// system.add_body(1.0e12, Point2::new(0.0, 0.0), Vector2::zeros());
/// system.add_body(1.0e12, Point2::new(4.0, 0.0), Vector2::zeros());
///
/// let forces = TreeGravity::new().forces(&system).unwrap();
/// assert!(forces[0].x > 0.0);
/// assert!(forces[1].x < 0.0);
/// ```
pub struct TreeGravity {
    /// Opening-angle threshold
    pub theta: f64,
}

impl TreeGravity {
    /// Default θ = 0.5.
    pub fn new() -> Self {
        TreeGravity { theta: 0.5 }
    }

    pub fn with_theta(theta: f64) -> Self {
        TreeGravity { theta }
    }
}

impl Default for TreeGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for TreeGravity {
    fn force(&self, idx: usize, state: &SystemState) -> Result<Vector2<f64>, SimError> {
        let tree = SpatialTree::build(&state.bodies, state.bounding_side())?;
        Ok(tree.compute_force(&state.bodies[idx], self.theta))
    }

    fn forces(&self, state: &SystemState) -> Result<Vec<Vector2<f64>>, SimError> {
        if state.bodies.is_empty() {
            return Ok(Vec::new());
        }

        // One build per step; the aggregated tree is read-only from here on,
        // which makes the per-body queries embarrassingly parallel.
        let tree = SpatialTree::build(&state.bodies, state.bounding_side())?;
        Ok(state
            .bodies
            .par_iter()
            .map(|body| tree.compute_force(body, self.theta))
            .collect())
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        // Direct summation: tree approximation errors would show up as
        // spurious energy drift in conservation diagnostics.
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
