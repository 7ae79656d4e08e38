use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Stable identity of a body, independent of its numeric state.
///
/// Two bodies may legitimately occupy the same position with the same mass;
/// the id is what distinguishes a body from its coincident neighbors (and
/// from itself during force evaluation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// A point mass with position, velocity and mass.
///
/// An absent body is always represented as `Option<Body>`, never as a body
/// whose fields happen to be zero — a mass of exactly `0.0` is a valid
/// (massless test particle) state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    /// Mass in kilograms
    pub mass: f64,
    /// Position in meters
    pub position: Point2<f64>,
    /// Velocity in meters per second
    pub velocity: Vector2<f64>,
}

impl Body {
    pub fn new(id: BodyId, mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Body {
            id,
            mass,
            position,
            velocity,
        }
    }

    /// Creates a body at rest, for tests and examples.
    pub fn at_rest(id: BodyId, mass: f64, position: Point2<f64>) -> Self {
        Body::new(id, mass, position, Vector2::zeros())
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Angular momentum scalar per unit mass (the z-component of r × v).
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.x * self.velocity.y - self.position.y * self.velocity.x
    }

    /// Advances this body by `dt` under the given force.
    ///
    /// Uses semi-implicit (symplectic) Euler: the velocity is updated first,
    /// then the position moves with the *new* velocity. Swapping the order
    /// gives explicit Euler, which does not conserve energy on orbits.
    ///
    /// A body with exactly zero mass cannot be accelerated; under a nonzero
    /// force this fails with [`SimError::ZeroMass`] and leaves the body
    /// untouched. Under zero force a massless body simply drifts.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use gravitree::{Body, BodyId};
    ///
    /// let mut body = Body::new(
    ///     BodyId(0),
    ///     2.0,
    ///     Point2::new(0.0, 0.0),
    ///     Vector2::new(1.0, 0.0),
    /// );
    /// body.integrate(Vector2::new(4.0, 0.0), 1.0).unwrap();
    ///
    /// // v = 1 + (4/2)*1 = 3, then x = 0 + 3*1 = 3
    /// assert_eq!(body.velocity, Vector2::new(3.0, 0.0));
    /// assert_eq!(body.position, Point2::new(3.0, 0.0));
    /// ```
    pub fn integrate(&mut self, force: Vector2<f64>, dt: f64) -> Result<(), SimError> {
        if self.mass == 0.0 {
            if force != Vector2::zeros() {
                return Err(SimError::ZeroMass { id: self.id });
            }
            self.position += self.velocity * dt;
            return Ok(());
        }

        let acceleration = force / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        Ok(())
    }
}
