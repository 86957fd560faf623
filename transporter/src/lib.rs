// Ray-targeted teleport locomotion
//
// A pointer ray picks a landing spot on labelled scene geometry, and a small
// frame-driven transition engine carries the player's offset node there using
// one of several motion policies (instant, blink, linear or eased move).

pub mod error;
pub mod input;
pub mod node;
pub mod physics;
pub mod teleport;

pub use engine::{Pose, Time};
pub use error::TeleportError;
pub use input::{ActivationEdge, EdgeDetector, Hand, TeleportButton};
pub use node::{SpatialNode, TrackedNode};
pub use physics::{CollisionQuery, PhysicsWorld, RayResult, SceneBuilder};
pub use teleport::{
    BlinkOverlay, PointerRay, TargetResolver, TeleportConfig, TeleportEffect, TeleportSystem,
    Transition, TransitionEngine, TransitionPolicy,
};
