//! Force models for N-body simulations.
//!
//! The [`ForceModel`] trait is the seam between force laws and integrators:
//! `DirectGravity` is the exact O(N²) reference, `TreeGravity` the Barnes-Hut
//! approximation, and `CompositeForce` sums several models.

use nalgebra::Vector2;

use crate::body::Body;
use crate::error::SimError;
use crate::state::SystemState;

pub mod gravity;
pub mod tree_gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::DirectGravity;
pub use tree_gravity::TreeGravity;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.6726e-11;

/// The Newtonian attraction exerted on `s1` by `s2`.
///
/// `F = G·m1·m2 / d²`, directed along the unit vector from `s1` toward
/// `s2`. Two bodies at the same position exert no force on each other —
/// coincident positions are a legitimate degenerate state, so the
/// contribution is defined as zero rather than an error.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use gravitree::{pairwise_force, Body, BodyId, G};
///
/// let a = Body::at_rest(BodyId(0), 10.0, Point2::new(0.0, 0.0));
/// let b = Body::at_rest(BodyId(1), 10.0, Point2::new(3.0, 3.0));
///
/// let force = pairwise_force(&a, &b);
/// let expected = G * 100.0 / 18.0; // d = 3√2, d² = 18
/// assert!((force.magnitude() - expected).abs() < 1e-24);
/// ```
pub fn pairwise_force(s1: &Body, s2: &Body) -> Vector2<f64> {
    let distance = s1.distance_to(s2);
    if distance == 0.0 {
        return Vector2::zeros();
    }
    let magnitude = G * s1.mass * s2.mass / (distance * distance);
    let direction = (s2.position - s1.position) / distance;
    direction * magnitude
}

/// A source of force on bodies in an N-body system.
pub trait ForceModel: Send + Sync {
    /// Net force on the body at index `idx`.
    ///
    /// Structural failures (a body that cannot be placed in the tree) are
    /// surfaced as typed errors; numeric degeneracies inside the force law
    /// are handled locally as zero contributions.
    fn force(&self, idx: usize, state: &SystemState) -> Result<Vector2<f64>, SimError>;

    /// Net force on every body, in body order.
    ///
    /// The default maps [`ForceModel::force`] over all indices; models with
    /// shared per-step work (such as a Barnes-Hut tree build) override this.
    fn forces(&self, state: &SystemState) -> Result<Vec<Vector2<f64>>, SimError> {
        (0..state.bodies.len())
            .map(|i| self.force(i, state))
            .collect()
    }

    /// Potential energy contribution, for conservation diagnostics.
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }
}

/// Combines multiple force models into a single one.
///
/// # Examples
///
/// ```
/// use gravitree::{CompositeForce, DirectGravity};
///
/// let composite = CompositeForce::new().with_force(DirectGravity::new());
/// ```
pub struct CompositeForce {
    models: Vec<Box<dyn ForceModel>>,
}

impl CompositeForce {
    pub fn new() -> Self {
        CompositeForce { models: Vec::new() }
    }

    pub fn with_force<F: ForceModel + 'static>(mut self, force: F) -> Self {
        self.models.push(Box::new(force));
        self
    }
}

impl Default for CompositeForce {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for CompositeForce {
    fn force(&self, idx: usize, state: &SystemState) -> Result<Vector2<f64>, SimError> {
        let mut total = Vector2::zeros();
        for model in &self.models {
            total += model.force(idx, state)?;
        }
        Ok(total)
    }

    fn forces(&self, state: &SystemState) -> Result<Vec<Vector2<f64>>, SimError> {
        let mut totals = vec![Vector2::zeros(); state.bodies.len()];
        for model in &self.models {
            for (total, f) in totals.iter_mut().zip(model.forces(state)?) {
                *total += f;
            }
        }
        Ok(totals)
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        self.models.iter().map(|m| m.potential_energy(state)).sum()
    }
}
