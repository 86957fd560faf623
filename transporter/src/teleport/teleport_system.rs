use cgmath::Vector3;
use engine::{Pose, Time};
use serde::{Deserialize, Serialize};

use super::{BlinkOverlay, PointerRay, TargetResolver, TransitionEngine, TransitionPolicy};
use crate::{
    error::TeleportError,
    input::{ActivationEdge, EdgeDetector, Hand, TeleportButton},
    node::SpatialNode,
    physics::{CollisionQuery, FLOOR_CATEGORY},
};

/// Configuration for the teleport system
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleportConfig {
    pub enabled: bool,
    pub policy: TransitionPolicy,
    /// Seconds; zero or less teleports instantly
    pub transition_time: f32,
    pub max_range: f32,
    /// Categories the pointer reacts to, empty for all
    pub category_filter: Vec<String>,
    /// Category a teleport may land on
    pub ground_category: String,
    pub button_mapping: TeleportButton,
    pub trigger_threshold: f32,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        TeleportConfig {
            enabled: true,
            policy: TransitionPolicy::MoveLinear,
            transition_time: 0.1,
            max_range: 100.0,
            category_filter: Vec::new(),
            ground_category: FLOOR_CATEGORY.to_string(),
            button_mapping: TeleportButton::Trigger,
            trigger_threshold: 0.5,
        }
    }
}

impl TeleportConfig {
    pub fn validate(&self) -> Result<(), TeleportError> {
        if !(self.max_range.is_finite() && self.max_range > 0.0) {
            return Err(TeleportError::invalid_config(
                "max_range",
                format!("must be a positive distance, got {}", self.max_range),
            ));
        }
        if !(self.trigger_threshold > 0.0 && self.trigger_threshold <= 1.0) {
            return Err(TeleportError::invalid_config(
                "trigger_threshold",
                format!("must be in (0, 1], got {}", self.trigger_threshold),
            ));
        }
        if self.ground_category.trim().is_empty() {
            return Err(TeleportError::invalid_config(
                "ground_category",
                "must name a category",
            ));
        }
        Ok(())
    }
}

/// What happened during one teleport update, for the host to react to
#[derive(Clone, Debug, PartialEq)]
pub enum TeleportEffect {
    NoEffect,
    /// The pointer ray stays hidden until the matching `TransitionFinished`
    TransitionStarted {
        policy: TransitionPolicy,
        from: Pose,
        to: Pose,
    },
    TransitionFinished {
        pose: Pose,
    },
    /// Activation with nothing valid under the pointer
    TargetRejected,
    RayDisplayChanged {
        visible: bool,
    },
}

/// Ties pointer, activation button and transition engine together for one
/// controlled node.
pub struct TeleportSystem {
    config: TeleportConfig,
    pointer: PointerRay,
    engine: TransitionEngine,
    button: EdgeDetector,
}

impl TeleportSystem {
    pub fn new(config: TeleportConfig) -> Result<Self, TeleportError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub fn with_default_config() -> Self {
        Self::from_valid_config(TeleportConfig::default())
    }

    fn from_valid_config(config: TeleportConfig) -> Self {
        let resolver = TargetResolver::new(config.max_range, config.category_filter.iter().cloned());
        TeleportSystem {
            config,
            pointer: PointerRay::new(resolver),
            engine: TransitionEngine::new(),
            button: EdgeDetector::new(),
        }
    }

    /// Sample the configured button on `hand` and run one frame
    pub fn update<Q: CollisionQuery + ?Sized>(
        &mut self,
        time: &Time,
        hand: &Hand,
        node: &mut dyn SpatialNode,
        query: &Q,
    ) -> Vec<TeleportEffect> {
        let edge = self.button.sample(
            hand.button_value(self.config.button_mapping),
            self.config.trigger_threshold,
        );
        self.update_with_edge(time, edge, hand, node, query)
    }

    /// Run one frame with an activation edge supplied by the host.
    ///
    /// Order within the frame: resolve the pointer target, start a transition
    /// on a press, advance the running transition, write the node, and clear
    /// the transition once it has finished.
    pub fn update_with_edge<Q: CollisionQuery + ?Sized>(
        &mut self,
        time: &Time,
        edge: ActivationEdge,
        hand: &Hand,
        node: &mut dyn SpatialNode,
        query: &Q,
    ) -> Vec<TeleportEffect> {
        if !self.config.enabled {
            return vec![TeleportEffect::NoEffect];
        }

        let mut effects = Vec::new();

        self.pointer.update(query, hand.position, hand.forward());

        if edge.pressed {
            if self.engine.is_active() {
                engine::teleport_log!(DEBUG, "activation ignored, transition in flight");
            } else {
                effects.push(self.try_begin(hand, node));
            }
        }

        if let Some(pose) = self.engine.advance(time.delta_seconds()) {
            node.set_pose(pose);
        }

        if self.engine.is_finished() {
            if let Some(finished) = self.engine.reset() {
                engine::teleport_log!(
                    DEBUG,
                    "{:?} transition finished: {:?} -> {:?} over {:.3}s",
                    finished.policy(),
                    finished.start().position,
                    finished.end().position,
                    finished.duration()
                );
                effects.push(TeleportEffect::TransitionFinished {
                    pose: finished.end(),
                });
            }
            self.pointer.set_enabled(true);
            effects.push(TeleportEffect::RayDisplayChanged { visible: true });
        }

        if effects.is_empty() {
            vec![TeleportEffect::NoEffect]
        } else {
            effects
        }
    }

    fn try_begin(&mut self, hand: &Hand, node: &mut dyn SpatialNode) -> TeleportEffect {
        let target = self.pointer.target();
        let on_ground = target.distance > 0.0 && target.is_category(&self.config.ground_category);
        if !on_ground {
            engine::teleport_log!(
                DEBUG,
                "no teleport target (hit: {}, category: {:?})",
                target.hit,
                target.category()
            );
            return TeleportEffect::TargetRejected;
        }

        let from = node.pose();
        let to = from.translated(horizontal_offset(hand.position, target.point));

        match self
            .engine
            .begin(self.config.policy, from, to, self.config.transition_time)
        {
            Ok(_) => {
                self.pointer.set_enabled(false);
                TeleportEffect::TransitionStarted {
                    policy: self.config.policy,
                    from,
                    to,
                }
            }
            // unreachable while presses are ignored during a transition
            Err(err) => {
                engine::teleport_log!(WARN, "{}", err);
                TeleportEffect::NoEffect
            }
        }
    }

    /// Show or hide the pointer ray. Forced off again while a transition runs.
    pub fn set_ray_display(&mut self, visible: bool) {
        self.pointer.set_enabled(visible && !self.engine.is_active());
    }

    pub fn pointer(&self) -> &PointerRay {
        &self.pointer
    }

    pub fn transitions(&self) -> &TransitionEngine {
        &self.engine
    }

    pub fn is_teleporting(&self) -> bool {
        self.engine.is_active()
    }

    pub fn overlay(&self) -> Option<BlinkOverlay> {
        self.engine.overlay()
    }

    /// Get current configuration
    pub fn config(&self) -> &TeleportConfig {
        &self.config
    }
}

/// Controller-to-target offset flattened onto the horizontal plane
fn horizontal_offset(controller: Vector3<f32>, target: Vector3<f32>) -> Vector3<f32> {
    let mut offset = target - controller;
    offset.y = 0.0;
    offset
}
