//! Arena-based Barnes-Hut quadtree.
//!
//! Nodes are stored contiguously in a `Vec` and reference their children by
//! index, giving a strict ownership tree with good cache locality. A tree is
//! built fresh each simulation step: bodies are inserted sequentially, one
//! [`SpatialTree::aggregate`] pass caches total mass and center of mass per
//! node, and force queries then read the tree without writing to it.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use gravitree::{Body, BodyId, SpatialTree};
//!
//! let bodies = vec![
//!     Body::at_rest(BodyId(0), 10.0, Point2::new(0.0, 0.0)),
//!     Body::at_rest(BodyId(1), 10.0, Point2::new(3.0, 3.0)),
//! ];
//!
//! let tree = SpatialTree::build(&bodies, 100.0).unwrap();
//! assert_eq!(tree.total_mass(), 20.0);
//!
//! // Net force on the first body pulls it toward the second.
//! let force = tree.compute_force(&bodies[0], 0.5);
//! assert!(force.x > 0.0 && force.y > 0.0);
//! ```

use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::bounds::BoundingRegion;
use crate::error::SimError;
use crate::forces::{pairwise_force, G};

/// Hard bound on tree depth. Guarantees termination when bodies are
/// extremely close together.
pub const MAX_DEPTH: u32 = 48;

/// Cells are never subdivided below this side length.
pub const MIN_SIDE: f64 = 1e-10;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

impl NodeId {
    fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "node arena overflow");
        NodeId(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single cell of the quadtree.
///
/// A node is a leaf iff it has no children; leaves hold zero or one body.
/// Once a node subdivides, all four children exist together and the node
/// never holds a body again.
#[derive(Debug, Clone)]
struct Node {
    boundary: BoundingRegion,
    body: Option<Body>,
    children: Option<[NodeId; 4]>,
    total_mass: f64,
    center_of_mass: Point2<f64>,
    depth: u32,
}

impl Node {
    fn new(boundary: BoundingRegion, depth: u32) -> Self {
        Node {
            center_of_mass: boundary.center,
            boundary,
            body: None,
            children: None,
            total_mass: 0.0,
            depth,
        }
    }
}

/// Build-phase observer events.
///
/// A trace callback passed to [`SpatialTree::build_with_trace`] sees these
/// at well-defined points. Tracing is purely diagnostic and never required
/// for correctness.
#[derive(Debug, Clone, Copy)]
pub enum TreeEvent {
    /// A body came to rest in a leaf at the given depth.
    Placed { body: Body, depth: u32 },
    /// A leaf split into four children.
    Subdivided { region: BoundingRegion, depth: u32 },
}

/// A visited node, as yielded by [`SpatialTree::traverse`].
///
/// Pre-order position plus depth is enough for a renderer to draw every
/// region and body, or for an exporter to reconstruct the tree's nesting.
#[derive(Debug, Clone, Copy)]
pub struct NodeVisit<'a> {
    pub region: BoundingRegion,
    pub body: Option<&'a Body>,
    pub depth: u32,
}

/// The Barnes-Hut region quadrant tree.
pub struct SpatialTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SpatialTree {
    /// Creates an empty tree covering the given region.
    pub fn new(boundary: BoundingRegion) -> Self {
        SpatialTree {
            nodes: vec![Node::new(boundary, 0)],
            root: NodeId(0),
        }
    }

    /// Builds and aggregates a tree over the given bodies, rooted at a
    /// square of side `bounding_side` centered at the origin.
    ///
    /// Fails with [`SimError::DepthExceeded`] if any body cannot be placed;
    /// all bodies inserted before the failing one remain in the tree.
    pub fn build(bodies: &[Body], bounding_side: f64) -> Result<Self, SimError> {
        Self::build_with_trace(bodies, bounding_side, &mut |_| {})
    }

    /// Same as [`SpatialTree::build`], invoking `trace` on every placement
    /// and subdivision.
    pub fn build_with_trace(
        bodies: &[Body],
        bounding_side: f64,
        trace: &mut dyn FnMut(TreeEvent),
    ) -> Result<Self, SimError> {
        let mut tree = SpatialTree::new(BoundingRegion::centered_at_origin(bounding_side));
        for body in bodies {
            tree.insert_with_trace(*body, trace)?;
        }
        tree.aggregate();
        Ok(tree)
    }

    /// Inserts a single body.
    ///
    /// Routing walks internal nodes by quadrant. An empty leaf takes the
    /// body directly; an occupied leaf subdivides until the resident and the
    /// incoming body separate into different quadrants. Separation
    /// feasibility is checked against [`MAX_DEPTH`] and [`MIN_SIDE`]
    /// *before* any mutation, so a failed insert leaves the tree exactly as
    /// it was.
    pub fn insert(&mut self, body: Body) -> Result<(), SimError> {
        self.insert_with_trace(body, &mut |_| {})
    }

    /// [`SpatialTree::insert`] with a trace callback.
    pub fn insert_with_trace(
        &mut self,
        body: Body,
        trace: &mut dyn FnMut(TreeEvent),
    ) -> Result<(), SimError> {
        let mut id = self.root;
        loop {
            let node = &self.nodes[id.index()];
            if let Some(children) = node.children {
                debug_assert!(node.body.is_none(), "internal node holding a body");
                let quadrant = node.boundary.quadrant_of(&body.position);
                id = children[quadrant.index()];
                continue;
            }

            match node.body {
                None => {
                    let depth = node.depth;
                    self.nodes[id.index()].body = Some(body);
                    trace(TreeEvent::Placed { body, depth });
                    return Ok(());
                }
                Some(resident) => {
                    self.check_separable(&resident, &body, id)?;
                    self.split_and_place(id, resident, body, trace);
                    return Ok(());
                }
            }
        }
    }

    /// Walks the (hypothetical) subdivision chain under `leaf` without
    /// mutating anything, erroring out if the two bodies would not separate
    /// before the depth or cell-size limit.
    fn check_separable(
        &self,
        resident: &Body,
        incoming: &Body,
        leaf: NodeId,
    ) -> Result<(), SimError> {
        let mut region = self.nodes[leaf.index()].boundary;
        let mut depth = self.nodes[leaf.index()].depth;
        loop {
            if depth >= MAX_DEPTH || region.side < MIN_SIDE {
                return Err(SimError::DepthExceeded {
                    body: *incoming,
                    depth,
                });
            }
            let resident_quadrant = region.quadrant_of(&resident.position);
            let incoming_quadrant = region.quadrant_of(&incoming.position);
            if resident_quadrant != incoming_quadrant {
                return Ok(());
            }
            region = region.subdivide()[resident_quadrant.index()];
            depth += 1;
        }
    }

    /// Subdivides the occupied leaf `id` (repeatedly, if both bodies keep
    /// landing in the same quadrant) until the resident and incoming body
    /// rest in separate child leaves. `check_separable` has already proven
    /// this terminates.
    fn split_and_place(
        &mut self,
        mut id: NodeId,
        resident: Body,
        incoming: Body,
        trace: &mut dyn FnMut(TreeEvent),
    ) {
        self.nodes[id.index()].body = None;
        loop {
            let children = self.subdivide(id, trace);
            let boundary = self.nodes[id.index()].boundary;
            let resident_quadrant = boundary.quadrant_of(&resident.position);
            let incoming_quadrant = boundary.quadrant_of(&incoming.position);
            if resident_quadrant != incoming_quadrant {
                let depth = self.nodes[id.index()].depth + 1;
                self.nodes[children[resident_quadrant.index()].index()].body = Some(resident);
                trace(TreeEvent::Placed {
                    body: resident,
                    depth,
                });
                self.nodes[children[incoming_quadrant.index()].index()].body = Some(incoming);
                trace(TreeEvent::Placed {
                    body: incoming,
                    depth,
                });
                return;
            }
            id = children[resident_quadrant.index()];
        }
    }

    /// Splits a leaf into four children covering its quadrants.
    fn subdivide(&mut self, id: NodeId, trace: &mut dyn FnMut(TreeEvent)) -> [NodeId; 4] {
        let boundary = self.nodes[id.index()].boundary;
        let depth = self.nodes[id.index()].depth;

        let regions = boundary.subdivide();
        let children = std::array::from_fn(|i| {
            let child = NodeId::new(self.nodes.len());
            self.nodes.push(Node::new(regions[i], depth + 1));
            child
        });
        self.nodes[id.index()].children = Some(children);
        trace(TreeEvent::Subdivided {
            region: boundary,
            depth,
        });
        children
    }

    /// Computes and caches `total_mass` and `center_of_mass` for every node
    /// in one post-order pass.
    ///
    /// Must run once after the last insertion; force evaluation reads the
    /// cached values and never recomputes them. A subtree with zero total
    /// mass reports its region center as its center of mass.
    pub fn aggregate(&mut self) {
        self.aggregate_node(self.root);
    }

    /// Returns `(mass, mass-weighted position sum)` for the subtree.
    fn aggregate_node(&mut self, id: NodeId) -> (f64, Vector2<f64>) {
        let children = self.nodes[id.index()].children;
        let (mass, weighted) = match children {
            None => match self.nodes[id.index()].body {
                Some(body) => (body.mass, body.position.coords * body.mass),
                None => (0.0, Vector2::zeros()),
            },
            Some(kids) => kids
                .iter()
                .fold((0.0, Vector2::zeros()), |(mass, weighted), &child| {
                    let (child_mass, child_weighted) = self.aggregate_node(child);
                    (mass + child_mass, weighted + child_weighted)
                }),
        };

        let node = &mut self.nodes[id.index()];
        node.total_mass = mass;
        node.center_of_mass = if mass > 0.0 {
            Point2::from(weighted / mass)
        } else {
            node.boundary.center
        };
        (mass, weighted)
    }

    /// Net Barnes-Hut force on `on`, using opening-angle threshold `theta`.
    ///
    /// A subtree whose angular size `s/d` falls below `theta` is treated as
    /// a single pseudo-body of its total mass at its center of mass;
    /// otherwise the four children are summed recursively. Leaves contribute
    /// the exact pairwise force, except the leaf holding `on` itself
    /// (identified by id, not by value). `theta = 0` therefore reproduces
    /// the exhaustive pairwise sum exactly.
    pub fn compute_force(&self, on: &Body, theta: f64) -> Vector2<f64> {
        self.force_from(self.root, on, theta)
    }

    fn force_from(&self, id: NodeId, on: &Body, theta: f64) -> Vector2<f64> {
        let node = &self.nodes[id.index()];
        match node.children {
            None => match &node.body {
                Some(other) if other.id != on.id => pairwise_force(on, other),
                _ => Vector2::zeros(),
            },
            Some(children) => {
                if node.total_mass == 0.0 {
                    return Vector2::zeros();
                }

                let offset = node.center_of_mass - on.position;
                let distance = offset.magnitude();

                // A query sitting exactly on the aggregate center of mass
                // cannot be approximated; recurse instead of dividing by
                // zero (the comparison below is false for distance == 0).
                if distance > 0.0 && node.boundary.side / distance < theta {
                    let magnitude = G * on.mass * node.total_mass / (distance * distance);
                    offset * (magnitude / distance)
                } else {
                    children
                        .iter()
                        .map(|&child| self.force_from(child, on, theta))
                        .fold(Vector2::zeros(), |acc, f| acc + f)
                }
            }
        }
    }

    /// Lazy pre-order traversal of every node, NW-first.
    ///
    /// Each call starts a fresh traversal; the iterator borrows the tree
    /// read-only, so renderers and exporters can walk a tree that is
    /// concurrently being queried for forces.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// All bodies stored anywhere in the tree.
    ///
    /// Yields exactly the multiset of successfully inserted bodies,
    /// regardless of insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.traverse().filter_map(|visit| visit.body)
    }

    /// Number of nodes in the arena (diagnostics).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root region.
    pub fn boundary(&self) -> BoundingRegion {
        self.nodes[self.root.index()].boundary
    }

    /// Total mass of all bodies in the tree. Valid after `aggregate`.
    pub fn total_mass(&self) -> f64 {
        self.nodes[self.root.index()].total_mass
    }

    /// Mass-weighted mean position of all bodies. Valid after `aggregate`.
    pub fn center_of_mass(&self) -> Point2<f64> {
        self.nodes[self.root.index()].center_of_mass
    }
}

/// Depth-first node iterator returned by [`SpatialTree::traverse`].
pub struct Traverse<'a> {
    tree: &'a SpatialTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = NodeVisit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id.index()];
        if let Some(children) = node.children {
            // reversed so NW pops first
            self.stack.extend(children.iter().rev());
        }
        Some(NodeVisit {
            region: node.boundary,
            body: node.body.as_ref(),
            depth: node.depth,
        })
    }
}
