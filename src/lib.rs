//! 2-D gravitational N-body simulation with a Barnes-Hut quadtree.
//!
//! Main components:
//! - [`tree`] — the region quadrant tree: insertion, aggregation, and the
//!   approximate force query.
//! - [`body`] — point masses and kinematic integration.
//! - [`bounds`] — square regions and quadrant geometry.
//! - [`forces`] — the `ForceModel` seam: direct O(N²) and tree gravity.
//! - [`integrator`] — step drivers advancing a system in time.
//! - [`state`] — system state: bodies plus the simulation clock.
//! - [`scenario`] — seeded random star fields.

pub mod body;
pub mod bounds;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod state;
pub mod tree;
pub mod vector;

#[cfg(test)]
mod bounds_test;
#[cfg(test)]
mod vector_test;

pub use body::{Body, BodyId};
pub use bounds::{BoundingRegion, Quadrant};
pub use error::SimError;
pub use forces::{pairwise_force, CompositeForce, DirectGravity, ForceModel, TreeGravity, G};
pub use integrator::{Integrator, Leapfrog, SemiImplicitEuler};
pub use state::SystemState;
pub use tree::{NodeVisit, SpatialTree, TreeEvent, MAX_DEPTH, MIN_SIDE};
