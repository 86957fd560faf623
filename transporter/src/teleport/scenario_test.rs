// Whole-frame teleport scenarios against a real collision scene

use cgmath::{Deg, InnerSpace, Quaternion, Rotation3, Vector3, vec3};
use engine::{Pose, Time};

use super::*;
use crate::{
    input::{ActivationEdge, Hand},
    node::{SpatialNode, TrackedNode},
    physics::{FLOOR_CATEGORY, PhysicsWorld, SceneBuilder},
};

const EPSILON: f32 = 1e-4;

/// A thick slab whose near face sits 5 units ahead of the origin
fn slab_ahead() -> PhysicsWorld {
    SceneBuilder::new()
        .with_cuboid(vec3(0.0, 0.0, 5.5), vec3(50.0, 50.0, 0.5), FLOOR_CATEGORY)
        .build()
}

fn hand_at_origin() -> Hand {
    Hand::at(vec3(0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0))
}

fn assert_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert!(
        (actual - expected).magnitude() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_resolver_reports_slab_face() {
    let world = slab_ahead();
    let resolver = TargetResolver::new(100.0, [FLOOR_CATEGORY]);
    let hand = hand_at_origin();

    let result = resolver.resolve(&world, hand.position, hand.forward());

    assert!(result.hit);
    assert!(result.is_category(FLOOR_CATEGORY));
    assert!((result.distance - 5.0).abs() < EPSILON);
    assert_near(result.point, vec3(0.0, 0.0, 5.0));
}

#[test]
fn test_linear_teleport_over_two_frames() {
    let world = slab_ahead();
    let mut system = TeleportSystem::new(TeleportConfig {
        policy: TransitionPolicy::MoveLinear,
        transition_time: 1.0,
        category_filter: vec![FLOOR_CATEGORY.to_string()],
        ..TeleportConfig::default()
    })
    .unwrap();
    let mut node = TrackedNode::new(Pose::from_position(vec3(0.0, 0.0, 0.0)));
    let half = Time::from_delta_seconds(0.5);
    let hand = hand_at_origin();

    // the transition begins and takes its first step in the press frame
    let effects = system.update_with_edge(&half, ActivationEdge::PRESSED, &hand, &mut node, &world);
    let TeleportEffect::TransitionStarted { to, .. } = effects[0].clone() else {
        panic!("expected a started transition, got {:?}", effects);
    };
    assert_near(to.position, vec3(0.0, 0.0, 5.0));
    assert_eq!(system.transitions().progress(), Some(0.5));
    assert_near(node.pose().position, vec3(0.0, 0.0, 2.5));
    assert!(system.is_teleporting());

    let effects = system.update_with_edge(&half, ActivationEdge::NONE, &hand, &mut node, &world);

    assert_near(node.pose().position, vec3(0.0, 0.0, 5.0));
    assert_eq!(node.pose(), to);
    assert!(matches!(
        effects.as_slice(),
        [
            TeleportEffect::TransitionFinished { .. },
            TeleportEffect::RayDisplayChanged { visible: true },
        ]
    ));
    assert!(!system.is_teleporting());
    assert!(system.pointer().is_enabled());
}

#[test]
fn test_second_press_mid_flight_keeps_first_destination() {
    let world = slab_ahead();
    let mut system = TeleportSystem::new(TeleportConfig {
        policy: TransitionPolicy::MoveSmooth,
        transition_time: 1.0,
        ..TeleportConfig::default()
    })
    .unwrap();
    let mut node = TrackedNode::new(Pose::from_position(vec3(0.0, 0.0, 0.0)));
    let quarter = Time::from_delta_seconds(0.25);
    let hand = hand_at_origin();

    system.update_with_edge(&quarter, ActivationEdge::PRESSED, &hand, &mut node, &world);
    let destination = system.transitions().transition().map(Transition::end);

    // aimed somewhere else entirely; the press must not restart or retarget
    let turned = Hand::at(vec3(3.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0));
    let effects =
        system.update_with_edge(&quarter, ActivationEdge::PRESSED, &turned, &mut node, &world);

    assert_eq!(effects, vec![TeleportEffect::NoEffect]);
    assert_eq!(system.transitions().progress(), Some(0.5));
    assert_eq!(system.transitions().transition().map(Transition::end), destination);

    for _ in 0..2 {
        system.update_with_edge(&quarter, ActivationEdge::NONE, &hand, &mut node, &world);
    }
    assert!(!system.is_teleporting());
    let destination = destination.unwrap();
    assert_near(node.pose().position, destination.position);
}

#[test]
fn test_press_after_finish_starts_a_new_teleport() {
    let world = SceneBuilder::new().with_default_floor().build();
    let mut system = TeleportSystem::new(TeleportConfig {
        policy: TransitionPolicy::Immediate,
        ..TeleportConfig::default()
    })
    .unwrap();
    let mut node = TrackedNode::new(Pose::from_position(vec3(0.0, 0.0, 0.0)));
    let frame = Time::from_delta_seconds(0.125);
    // tilted 45 degrees down from standing height, the floor is 1.5 ahead
    let tilted = Hand::at(vec3(0.0, 1.5, 0.0), Quaternion::from_angle_x(Deg(45.0)));

    system.update_with_edge(&frame, ActivationEdge::PRESSED, &tilted, &mut node, &world);
    assert_near(node.pose().position, vec3(0.0, 0.0, 1.5));

    system.update_with_edge(&frame, ActivationEdge::PRESSED, &tilted, &mut node, &world);
    assert_near(node.pose().position, vec3(0.0, 0.0, 3.0));
    assert_eq!(node.write_count(), 2);
}
