// VR Teleport Movement System
//
// Point at walkable geometry, press, and the player's offset node is carried
// to the spot using the configured transition policy. The pointer ray is
// hidden while a transition runs and further presses are ignored.

pub mod overlay;
pub mod pointer_ray;
pub mod target_resolver;
pub mod teleport_system;
pub mod transition;
pub mod transition_engine;

#[cfg(test)]
mod scenario_test;

pub use overlay::{BlinkOverlay, EyelidBars, ScreenRect};
pub use pointer_ray::{PointerRay, RayVisual};
pub use target_resolver::{RayQuery, TargetResolver, resolve};
pub use teleport_system::{TeleportConfig, TeleportEffect, TeleportSystem};
pub use transition::{Transition, TransitionPolicy};
pub use transition_engine::TransitionEngine;
