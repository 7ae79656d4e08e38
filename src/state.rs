use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyId};

/// Complete state of an N-body system at a given time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemState {
    /// Current simulation time in seconds
    pub time: f64,
    /// All bodies in the system
    pub bodies: Vec<Body>,
    /// Next available body id
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system at `time = 0`.
    pub fn new() -> Self {
        SystemState {
            time: 0.0,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a new body and returns its id.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use gravitree::SystemState;
    ///
    /// let mut system = SystemState::new();
    /// let id = system.add_body(5.0, Point2::new(1.0, 0.0), Vector2::new(0.0, 2.0));
    ///
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(system.get_body(id).unwrap().mass, 5.0);
    /// ```
    pub fn add_body(&mut self, mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, mass, position, velocity));
        id
    }

    /// Removes a body, returning it if present.
    ///
    /// This is the recovery path after a [`crate::SimError::DepthExceeded`]:
    /// drop the offending body and continue with the rest of the system.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total momentum; should stay near constant for an isolated system
    /// (useful for checking numerical drift).
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Total angular momentum about the origin.
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Side of the smallest origin-centered square that strictly contains
    /// every body, with a small margin so the farthest body stays inside the
    /// half-open root region. Used to size per-step trees.
    pub fn bounding_side(&self) -> f64 {
        let extent = self
            .bodies
            .iter()
            .fold(0.0f64, |acc, b| acc.max(b.position.x.abs()).max(b.position.y.abs()));
        (extent * 2.0).max(1.0) * 1.001
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}
