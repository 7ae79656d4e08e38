//! Time integration for N-body systems.
//!
//! Integrators advance a [`SystemState`] by computing forces through a
//! [`ForceModel`] and updating velocities and positions. Structural errors
//! from the force phase propagate to the caller; a zero-mass body under a
//! nonzero force is recovered locally by treating it as an immovable test
//! particle.

use crate::error::SimError;
use crate::forces::ForceModel;
use crate::state::SystemState;

/// A time integrator for N-body systems.
pub trait Integrator: Send + Sync {
    /// Advances the system by one timestep.
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), SimError>;

    /// Advances the system by `n_steps` timesteps, returning the final time.
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Result<f64, SimError> {
        for _ in 0..n_steps {
            self.step(state, dt, force)?;
        }
        Ok(state.time)
    }
}

/// Semi-implicit (symplectic) Euler integrator, the primary step driver.
///
/// One bulk force evaluation per step, then each body updates its velocity
/// first and moves with the new velocity — the ordering
/// [`crate::Body::integrate`] guarantees.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use gravitree::{DirectGravity, Integrator, SemiImplicitEuler, SystemState};
///
/// let mut system = SystemState::new();
/// system.add_body(1.0e12, Point2::new(0.0, 0.0), Vector2::zeros());
/// system.add_body(1.0e12, Point2::new(4.0, 0.0), Vector2::zeros());
///
/// SemiImplicitEuler.step(&mut system, 1.0, &DirectGravity::new()).unwrap();
/// assert_eq!(system.time, 1.0);
/// ```
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), SimError> {
        let forces = force.forces(state)?;
        for (body, f) in state.bodies.iter_mut().zip(forces) {
            match body.integrate(f, dt) {
                Ok(()) => {}
                Err(SimError::ZeroMass { id }) => {
                    // massless body under a nonzero force: hold it in place
                    log::warn!("skipping integration of zero-mass body {:?}", id);
                }
                Err(other) => return Err(other),
            }
        }
        state.time += dt;
        Ok(())
    }
}

/// Symplectic leapfrog integrator (kick-drift-kick, 2nd order).
///
/// Better long-horizon energy behavior than [`SemiImplicitEuler`] at the
/// cost of two force evaluations per step.
pub struct Leapfrog;

impl Leapfrog {
    /// Half-step velocity update.
    fn kick(
        &self,
        state: &mut SystemState,
        dt_half: f64,
        force: &dyn ForceModel,
    ) -> Result<(), SimError> {
        let forces = force.forces(state)?;
        for (body, f) in state.bodies.iter_mut().zip(forces) {
            if body.mass == 0.0 {
                if f != nalgebra::Vector2::zeros() {
                    log::warn!("skipping kick of zero-mass body {:?}", body.id);
                }
                continue;
            }
            body.velocity += f / body.mass * dt_half;
        }
        Ok(())
    }

    /// Full-step position update.
    fn drift(&self, state: &mut SystemState, dt: f64) {
        for body in state.bodies.iter_mut() {
            body.position += body.velocity * dt;
        }
    }
}

impl Integrator for Leapfrog {
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), SimError> {
        self.kick(state, dt / 2.0, force)?;
        self.drift(state, dt);
        self.kick(state, dt / 2.0, force)?;
        state.time += dt;
        Ok(())
    }
}
