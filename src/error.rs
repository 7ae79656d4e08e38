//! Error types for tree construction and body integration.
//!
//! Every failure in this crate is recoverable: a caller can drop or merge
//! the offending body and continue with the rest of the simulation.

use std::error::Error;
use std::fmt;

use crate::body::{Body, BodyId};

/// Typed, recoverable simulation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// A body could not be separated from an existing one before the tree
    /// hit its depth or minimum-cell-size limit. The tree is left exactly as
    /// it was before the failed insertion.
    DepthExceeded {
        /// The body that could not be placed
        body: Body,
        /// Depth at which the guard tripped
        depth: u32,
    },

    /// A zero-length vector was normalized.
    DegenerateVector,

    /// A body with exactly zero mass was integrated under a nonzero force.
    ZeroMass {
        /// The body whose integration was rejected
        id: BodyId,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::DepthExceeded { body, depth } => write!(
                f,
                "body {:?} at ({}, {}) cannot be placed: depth limit reached at depth {}",
                body.id, body.position.x, body.position.y, depth
            ),
            SimError::DegenerateVector => {
                write!(f, "cannot normalize a zero-length vector")
            }
            SimError::ZeroMass { id } => {
                write!(f, "body {:?} has zero mass and cannot be accelerated", id)
            }
        }
    }
}

impl Error for SimError {}
