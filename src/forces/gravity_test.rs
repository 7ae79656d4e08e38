use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::forces::{pairwise_force, CompositeForce, DirectGravity, ForceModel, G};
use crate::state::SystemState;
use crate::Body;
use crate::BodyId;

#[test]
fn test_pairwise_magnitude_and_direction() {
    let a = Body::at_rest(BodyId(0), 10.0, Point2::new(0.0, 0.0));
    let b = Body::at_rest(BodyId(1), 10.0, Point2::new(3.0, 3.0));

    let force = pairwise_force(&a, &b);
    let expected = G * 100.0 / 18.0;

    assert_relative_eq!(force.magnitude(), expected, max_relative = 1e-12);
    // attraction pulls a toward b, along the diagonal
    assert_relative_eq!(force.x, force.y, max_relative = 1e-12);
    assert!(force.x > 0.0);
}

#[test]
fn test_pairwise_antisymmetry() {
    let a = Body::at_rest(BodyId(0), 3.0, Point2::new(-2.0, 1.0));
    let b = Body::at_rest(BodyId(1), 7.0, Point2::new(4.0, -5.0));

    assert_relative_eq!(pairwise_force(&a, &b), -pairwise_force(&b, &a));
}

#[test]
fn test_pairwise_coincident_bodies_exert_nothing() {
    let a = Body::at_rest(BodyId(0), 10.0, Point2::new(1.0, 1.0));
    let b = Body::at_rest(BodyId(1), 10.0, Point2::new(1.0, 1.0));

    assert_eq!(pairwise_force(&a, &b), Vector2::zeros());
}

#[test]
fn test_direct_force_excludes_self() {
    let mut system = SystemState::new();
    system.add_body(5.0, Point2::new(2.0, 2.0), Vector2::zeros());

    let force = DirectGravity::new().force(0, &system).unwrap();

    assert_eq!(force, Vector2::zeros());
}

#[test]
fn test_direct_force_cancels_in_the_middle() {
    let mut system = SystemState::new();
    system.add_body(10.0, Point2::new(-1.0, 0.0), Vector2::zeros());
    system.add_body(10.0, Point2::new(0.0, 0.0), Vector2::zeros());
    system.add_body(10.0, Point2::new(1.0, 0.0), Vector2::zeros());

    let force = DirectGravity::new().force(1, &system).unwrap();

    assert_relative_eq!(force, Vector2::zeros(), epsilon = 1e-24);
}

#[test]
fn test_direct_potential_energy() {
    let mut system = SystemState::new();
    system.add_body(10.0, Point2::new(0.0, 0.0), Vector2::zeros());
    system.add_body(20.0, Point2::new(4.0, 0.0), Vector2::zeros());

    let pe = DirectGravity::new().potential_energy(&system);

    assert_relative_eq!(pe, -G * 200.0 / 4.0, max_relative = 1e-12);
}

#[test]
fn test_potential_energy_ignores_coincident_pairs() {
    let mut system = SystemState::new();
    system.add_body(10.0, Point2::new(1.0, 1.0), Vector2::zeros());
    system.add_body(10.0, Point2::new(1.0, 1.0), Vector2::zeros());

    assert_eq!(DirectGravity::new().potential_energy(&system), 0.0);
}

#[test]
fn test_composite_of_one_matches_direct() {
    let system = crate::scenario::uniform_field(10, 100.0, (1.0e10, 1.0e11), 9);
    let composite = CompositeForce::new().with_force(DirectGravity::new());

    let direct = DirectGravity::new().forces(&system).unwrap();
    let combined = composite.forces(&system).unwrap();

    for (a, b) in direct.iter().zip(&combined) {
        assert_relative_eq!(a, b);
    }
}

#[test]
fn test_composite_sums_models() {
    let mut system = SystemState::new();
    system.add_body(10.0, Point2::new(0.0, 0.0), Vector2::zeros());
    system.add_body(10.0, Point2::new(3.0, 0.0), Vector2::zeros());

    let doubled = CompositeForce::new()
        .with_force(DirectGravity::new())
        .with_force(DirectGravity::new());

    let single = DirectGravity::new().force(0, &system).unwrap();
    let combined = doubled.force(0, &system).unwrap();

    assert_relative_eq!(combined, single * 2.0);
    assert_relative_eq!(
        doubled.potential_energy(&system),
        2.0 * DirectGravity::new().potential_energy(&system)
    );
}

#[test]
fn test_empty_composite_is_inert() {
    let mut system = SystemState::new();
    system.add_body(10.0, Point2::new(0.0, 0.0), Vector2::zeros());

    let composite = CompositeForce::new();

    assert_eq!(composite.force(0, &system).unwrap(), Vector2::zeros());
    assert_eq!(composite.potential_energy(&system), 0.0);
}
