//! Seeded random star-field generators.
//!
//! Deterministic per seed, so scenarios double as reproducible test
//! fixtures.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::forces::G;
use crate::state::SystemState;
use crate::vector::normalized;

/// Bodies distributed uniformly over an origin-centered square of the given
/// side, at rest, with masses uniform in `mass_range`.
///
/// # Examples
///
/// ```
/// use gravitree::scenario::uniform_field;
///
/// let field = uniform_field(50, 100.0, (1.0, 10.0), 42);
/// assert_eq!(field.body_count(), 50);
///
/// // Same seed, same field.
/// let again = uniform_field(50, 100.0, (1.0, 10.0), 42);
/// assert_eq!(field.bodies[17].position, again.bodies[17].position);
/// ```
pub fn uniform_field(n: usize, side: f64, mass_range: (f64, f64), seed: u64) -> SystemState {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut state = SystemState::new();
    let half = side / 2.0;
    for _ in 0..n {
        let position = Point2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
        let mass = rng.gen_range(mass_range.0..mass_range.1);
        state.add_body(mass, position, Vector2::zeros());
    }
    state
}

/// A central mass orbited by `n` bodies scattered over an annulus, each with
/// the circular-orbit speed for its radius, counterclockwise.
pub fn rotating_disc(
    n: usize,
    inner_radius: f64,
    outer_radius: f64,
    body_mass: f64,
    central_mass: f64,
    seed: u64,
) -> SystemState {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut state = SystemState::new();
    state.add_body(central_mass, Point2::origin(), Vector2::zeros());

    for _ in 0..n {
        let radius = rng.gen_range(inner_radius..outer_radius);
        let angle = rng.gen_range(0.0..TAU);
        let position = Point2::new(radius * angle.cos(), radius * angle.sin());

        let speed = (G * central_mass / radius).sqrt();
        let velocity = match normalized(position.coords) {
            // rotate the outward unit vector a quarter turn for the
            // tangential direction
            Ok(outward) => Vector2::new(-outward.y, outward.x) * speed,
            Err(_) => Vector2::zeros(),
        };
        state.add_body(body_mass, position, velocity);
    }
    state
}
