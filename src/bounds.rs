//! Axis-aligned square regions and their quadrant geometry.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// The four quadrants of a region, in the fixed child order NW, NE, SW, SE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Sw, Quadrant::Se];

    /// Index into a node's child array.
    pub fn index(self) -> usize {
        match self {
            Quadrant::Nw => 0,
            Quadrant::Ne => 1,
            Quadrant::Sw => 2,
            Quadrant::Se => 3,
        }
    }
}

/// A square region given by its center and full side length.
///
/// Containment is half-open: a point is inside iff both coordinates lie in
/// `[center - side/2, center + side/2)`. The same convention decides
/// quadrant routing, so a point exactly on a center line goes east/south and
/// never lands between two children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub center: Point2<f64>,
    /// Full side length
    pub side: f64,
}

impl BoundingRegion {
    pub fn new(center: Point2<f64>, side: f64) -> Self {
        BoundingRegion { center, side }
    }

    pub fn centered_at_origin(side: f64) -> Self {
        BoundingRegion::new(Point2::origin(), side)
    }

    /// Bottom-left corner, for renderers working in min/max form.
    pub fn min(&self) -> Point2<f64> {
        let half = self.side / 2.0;
        Point2::new(self.center.x - half, self.center.y - half)
    }

    /// Top-right corner (exclusive).
    pub fn max(&self) -> Point2<f64> {
        let half = self.side / 2.0;
        Point2::new(self.center.x + half, self.center.y + half)
    }

    /// Half-open containment test.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::Point2;
    /// use gravitree::BoundingRegion;
    ///
    /// let region = BoundingRegion::centered_at_origin(100.0);
    /// assert!(region.contains(&Point2::new(12.0, 34.0)));
    /// assert!(region.contains(&Point2::new(-50.0, 0.0))); // low edge inside
    /// assert!(!region.contains(&Point2::new(50.0, 0.0))); // high edge outside
    /// ```
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    /// The quadrant a point routes to: `x < center.x` is west, `y >=
    /// center.y` is north (math-style Y-up).
    pub fn quadrant_of(&self, point: &Point2<f64>) -> Quadrant {
        let west = point.x < self.center.x;
        let north = point.y >= self.center.y;
        match (west, north) {
            (true, true) => Quadrant::Nw,
            (false, true) => Quadrant::Ne,
            (true, false) => Quadrant::Sw,
            (false, false) => Quadrant::Se,
        }
    }

    /// The four child regions in NW, NE, SW, SE order.
    ///
    /// Each child has half this region's side and is centered a quarter of
    /// the side away from the parent center along each axis, so the children
    /// exactly quarter the parent.
    pub fn subdivide(&self) -> [BoundingRegion; 4] {
        let quarter = self.side / 4.0;
        let side = self.side / 2.0;
        let (cx, cy) = (self.center.x, self.center.y);
        [
            BoundingRegion::new(Point2::new(cx - quarter, cy + quarter), side),
            BoundingRegion::new(Point2::new(cx + quarter, cy + quarter), side),
            BoundingRegion::new(Point2::new(cx - quarter, cy - quarter), side),
            BoundingRegion::new(Point2::new(cx + quarter, cy - quarter), side),
        ]
    }
}
