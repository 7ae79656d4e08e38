use nalgebra::Point2;

use crate::bounds::{BoundingRegion, Quadrant};

#[test]
fn test_contains_half_open_edges() {
    let region = BoundingRegion::centered_at_origin(100.0);

    assert!(region.contains(&Point2::new(0.0, 0.0)));
    assert!(region.contains(&Point2::new(-50.0, -50.0))); // low edges inside
    assert!(region.contains(&Point2::new(49.999, 49.999)));
    assert!(!region.contains(&Point2::new(50.0, 0.0))); // high edges outside
    assert!(!region.contains(&Point2::new(0.0, 50.0)));
    assert!(!region.contains(&Point2::new(-50.001, 0.0)));
}

#[test]
fn test_quadrant_of_interior_points() {
    let region = BoundingRegion::centered_at_origin(100.0);

    assert_eq!(region.quadrant_of(&Point2::new(-1.0, 1.0)), Quadrant::Nw);
    assert_eq!(region.quadrant_of(&Point2::new(1.0, 1.0)), Quadrant::Ne);
    assert_eq!(region.quadrant_of(&Point2::new(-1.0, -1.0)), Quadrant::Sw);
    assert_eq!(region.quadrant_of(&Point2::new(1.0, -1.0)), Quadrant::Se);
}

#[test]
fn test_quadrant_of_center_lines_route_east_and_south() {
    let region = BoundingRegion::centered_at_origin(100.0);

    // x on the center line is east, y on the center line is north
    assert_eq!(region.quadrant_of(&Point2::new(0.0, 0.0)), Quadrant::Ne);
    assert_eq!(region.quadrant_of(&Point2::new(0.0, -1.0)), Quadrant::Se);
    assert_eq!(region.quadrant_of(&Point2::new(-1.0, 0.0)), Quadrant::Nw);
}

#[test]
fn test_subdivide_geometry() {
    let region = BoundingRegion::new(Point2::new(10.0, -10.0), 100.0);
    let children = region.subdivide();

    for child in &children {
        assert_eq!(child.side, 50.0);
    }
    assert_eq!(children[0].center, Point2::new(-15.0, 15.0)); // NW
    assert_eq!(children[1].center, Point2::new(35.0, 15.0)); // NE
    assert_eq!(children[2].center, Point2::new(-15.0, -35.0)); // SW
    assert_eq!(children[3].center, Point2::new(35.0, -35.0)); // SE
}

#[test]
fn test_subdivide_consistent_with_quadrant_routing() {
    let region = BoundingRegion::centered_at_origin(64.0);
    let children = region.subdivide();

    let probes = [
        Point2::new(0.0, 0.0),
        Point2::new(-32.0, -32.0),
        Point2::new(15.9, -0.1),
        Point2::new(-0.1, 31.9),
        Point2::new(31.9, 31.9),
    ];
    for point in &probes {
        assert!(region.contains(point));
        let quadrant = region.quadrant_of(point);
        // the child a point routes to is the child that contains it
        assert!(children[quadrant.index()].contains(point));
        for (i, child) in children.iter().enumerate() {
            if i != quadrant.index() {
                assert!(!child.contains(point));
            }
        }
    }
}

#[test]
fn test_children_tile_the_parent() {
    let region = BoundingRegion::centered_at_origin(100.0);
    let children = region.subdivide();

    // corners of the parent land in exactly one child each
    assert!(children[Quadrant::Sw.index()].contains(&Point2::new(-50.0, -50.0)));
    assert!(children[Quadrant::Ne.index()].contains(&Point2::new(0.0, 0.0)));
    assert!(children[Quadrant::Nw.index()].contains(&Point2::new(-50.0, 0.0)));
    assert!(children[Quadrant::Se.index()].contains(&Point2::new(0.0, -50.0)));
}

#[test]
fn test_min_max_corners() {
    let region = BoundingRegion::new(Point2::new(4.0, 6.0), 8.0);

    assert_eq!(region.min(), Point2::new(0.0, 2.0));
    assert_eq!(region.max(), Point2::new(8.0, 10.0));
}
