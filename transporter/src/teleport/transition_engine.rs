use engine::Pose;

use super::{BlinkOverlay, Transition, TransitionPolicy};
use crate::error::TeleportError;

/// Owns at most one running [`Transition`] and steps it once per frame.
#[derive(Debug, Default)]
pub struct TransitionEngine {
    active: Option<Transition>,
}

impl TransitionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition.
    ///
    /// Fails without touching the running transition if one is still active;
    /// callers must wait for it to finish or [`reset`](Self::reset) first.
    pub fn begin(
        &mut self,
        policy: TransitionPolicy,
        start: Pose,
        end: Pose,
        duration: f32,
    ) -> Result<&Transition, TeleportError> {
        if let Some(active) = &self.active {
            engine::teleport_log!(
                WARN,
                "begin({:?}) rejected, {:?} transition still running",
                policy,
                active.policy()
            );
            return Err(TeleportError::TransitionActive {
                policy: active.policy(),
                progress: active.progress(),
            });
        }

        engine::teleport_log!(
            DEBUG,
            "begin {:?} transition over {:.3}s: {:?} -> {:?}",
            policy,
            duration,
            start.position,
            end.position
        );

        let transition = self
            .active
            .insert(Transition::new(policy, start, end, duration));
        Ok(&*transition)
    }

    /// Step the active transition by `delta` seconds. Returns the pose to
    /// write to the controlled node this frame, if any. Does nothing when idle.
    pub fn advance(&mut self, delta: f32) -> Option<Pose> {
        self.active.as_mut()?.update(delta)
    }

    /// Target pose of the controlled node, `None` when idle
    pub fn current_pose(&self) -> Option<Pose> {
        self.active.as_ref().map(Transition::current_pose)
    }

    /// True once the active transition has completed. Idle engines report false.
    pub fn is_finished(&self) -> bool {
        self.active.as_ref().is_some_and(Transition::is_finished)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn overlay(&self) -> Option<BlinkOverlay> {
        self.active
            .as_ref()
            .and_then(Transition::overlay_coverage)
            .map(BlinkOverlay::new)
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    pub fn progress(&self) -> Option<f32> {
        self.active.as_ref().map(Transition::progress)
    }

    pub fn policy(&self) -> Option<TransitionPolicy> {
        self.active.as_ref().map(Transition::policy)
    }

    /// Release the active transition and go back to idle
    pub fn reset(&mut self) -> Option<Transition> {
        self.active.take()
    }
}
