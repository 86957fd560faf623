use engine::{Pose, easing::Easing};
use serde::{Deserialize, Serialize};

/// Which motion a teleport uses to carry the node to its destination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Jump on the first update
    Immediate,
    /// Close the "eyelids", jump at the halfway point, open them again
    Blink,
    #[default]
    MoveLinear,
    /// Move along a `sin(p * pi / 2)^2` curve
    MoveSmooth,
}

/// Progress at which a blink swaps the pose (eyelids fully closed)
const BLINK_JUMP_PROGRESS: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Immediate { applied: bool },
    Blink { moved: bool },
    Move { easing: Easing },
}

/// One running teleport: a start and end pose plus the progress between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    start: Pose,
    end: Pose,
    duration: f32,
    progress: f32,
    pose: Pose,
    motion: Motion,
}

impl Transition {
    /// A non-positive or non-finite `duration` completes the transition right away.
    /// The node still gets its single write of `end` from the first `update`.
    pub fn new(policy: TransitionPolicy, start: Pose, end: Pose, duration: f32) -> Self {
        let motion = match policy {
            TransitionPolicy::Immediate => Motion::Immediate { applied: false },
            TransitionPolicy::Blink => Motion::Blink { moved: false },
            TransitionPolicy::MoveLinear => Motion::Move {
                easing: Easing::Linear,
            },
            TransitionPolicy::MoveSmooth => Motion::Move {
                easing: Easing::SineSquared,
            },
        };

        let mut transition = Transition {
            start,
            end,
            duration,
            progress: 0.0,
            pose: start,
            motion,
        };

        if !(duration.is_finite() && duration > 0.0) {
            transition.complete();
        }

        transition
    }

    fn complete(&mut self) {
        self.progress = 1.0;
        self.pose = self.end;
    }

    /// Advance by `delta` seconds. Returns the pose to write to the node this
    /// frame, or `None` when the node should be left alone.
    pub fn update(&mut self, delta: f32) -> Option<Pose> {
        let progress = step_progress(self.progress, delta, self.duration);

        match &mut self.motion {
            Motion::Immediate { applied } => {
                if *applied {
                    return None;
                }
                *applied = true;
                self.progress = 1.0;
                self.pose = self.end;
                Some(self.end)
            }
            Motion::Blink { moved } => {
                self.progress = progress;
                if self.progress >= BLINK_JUMP_PROGRESS && !*moved {
                    // one jump only, no matter how far past the midpoint this step went
                    *moved = true;
                    self.pose = self.end;
                    Some(self.end)
                } else {
                    None
                }
            }
            Motion::Move { easing } => {
                self.progress = progress;
                self.pose = self.start.lerp(&self.end, easing.apply(progress));
                Some(self.pose)
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn policy(&self) -> TransitionPolicy {
        match self.motion {
            Motion::Immediate { .. } => TransitionPolicy::Immediate,
            Motion::Blink { .. } => TransitionPolicy::Blink,
            Motion::Move {
                easing: Easing::Linear,
            } => TransitionPolicy::MoveLinear,
            Motion::Move {
                easing: Easing::SineSquared,
            } => TransitionPolicy::MoveSmooth,
        }
    }

    /// Where the node should be right now
    pub fn current_pose(&self) -> Pose {
        self.pose
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn start(&self) -> Pose {
        self.start
    }

    pub fn end(&self) -> Pose {
        self.end
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Blink eyelid coverage, `1 - |2p - 1|`: 0 when open, 1 at the jump
    pub fn overlay_coverage(&self) -> Option<f32> {
        match self.motion {
            Motion::Blink { .. } => Some(1.0 - (self.progress * 2.0 - 1.0).abs()),
            _ => None,
        }
    }
}

fn step_progress(progress: f32, delta: f32, duration: f32) -> f32 {
    if !(duration.is_finite() && duration > 0.0) {
        return 1.0;
    }
    let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
    (progress + delta / duration).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, vec3};

    const ALL_POLICIES: [TransitionPolicy; 4] = [
        TransitionPolicy::Immediate,
        TransitionPolicy::Blink,
        TransitionPolicy::MoveLinear,
        TransitionPolicy::MoveSmooth,
    ];

    fn start() -> Pose {
        Pose::from_position(vec3(0.0, 0.0, 0.0))
    }

    fn end() -> Pose {
        Pose::from_position(vec3(4.0, 0.0, -8.0))
    }

    #[test]
    fn test_zero_duration_finishes_at_end_for_every_policy() {
        for policy in ALL_POLICIES {
            for duration in [0.0, -1.0, f32::NAN] {
                let transition = Transition::new(policy, start(), end(), duration);
                assert!(transition.is_finished(), "{:?} {}", policy, duration);
                assert_eq!(transition.current_pose(), end(), "{:?} {}", policy, duration);
            }
        }
    }

    #[test]
    fn test_zero_duration_still_writes_end_once() {
        for policy in ALL_POLICIES {
            let mut transition = Transition::new(policy, start(), end(), 0.0);
            assert_eq!(transition.update(0.016), Some(end()), "{:?}", policy);
            assert!(transition.is_finished(), "{:?}", policy);
        }

        for policy in [TransitionPolicy::Immediate, TransitionPolicy::Blink] {
            let mut transition = Transition::new(policy, start(), end(), 0.0);
            transition.update(0.016);
            assert_eq!(transition.update(0.016), None, "{:?}", policy);
        }
    }

    #[test]
    fn test_policy_is_preserved() {
        for policy in ALL_POLICIES {
            assert_eq!(Transition::new(policy, start(), end(), 1.0).policy(), policy);
        }
    }

    #[test]
    fn test_immediate_applies_once() {
        let mut transition = Transition::new(TransitionPolicy::Immediate, start(), end(), 1.0);
        assert!(!transition.is_finished());
        assert_eq!(transition.current_pose(), start());

        assert_eq!(transition.update(0.001), Some(end()));
        assert!(transition.is_finished());
        assert_eq!(transition.update(0.001), None);
        assert_eq!(transition.overlay_coverage(), None);
    }

    #[test]
    fn test_move_linear_endpoints_and_midpoint() {
        let mut transition = Transition::new(TransitionPolicy::MoveLinear, start(), end(), 2.0);
        assert_eq!(transition.current_pose(), start());

        let mid = transition.update(1.0).unwrap();
        assert!((mid.position - vec3(2.0, 0.0, -4.0)).magnitude() < 1e-5);
        assert!(!transition.is_finished());

        assert_eq!(transition.update(1.0), Some(end()));
        assert!(transition.is_finished());
    }

    #[test]
    fn test_move_smooth_differs_from_linear_at_quarter() {
        let mut linear = Transition::new(TransitionPolicy::MoveLinear, start(), end(), 1.0);
        let mut smooth = Transition::new(TransitionPolicy::MoveSmooth, start(), end(), 1.0);

        let linear_pose = linear.update(0.25).unwrap();
        let smooth_pose = smooth.update(0.25).unwrap();

        let expected_factor = (std::f32::consts::PI / 8.0).sin().powi(2);
        let expected = end().position * expected_factor;
        assert!((smooth_pose.position - expected).magnitude() < 1e-4);
        assert!((smooth_pose.position - linear_pose.position).magnitude() > 0.1);
    }

    #[test]
    fn test_move_smooth_reaches_end_exactly() {
        let mut transition = Transition::new(TransitionPolicy::MoveSmooth, start(), end(), 0.3);
        for _ in 0..10 {
            transition.update(0.1);
        }
        assert_eq!(transition.current_pose(), end());
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let mut transition = Transition::new(TransitionPolicy::MoveLinear, start(), end(), 1.0);
        assert_eq!(transition.update(5.0), Some(end()));
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut transition = Transition::new(TransitionPolicy::MoveLinear, start(), end(), 1.0);
        transition.update(0.5);
        transition.update(-0.25);
        assert_eq!(transition.progress(), 0.5);
    }

    #[test]
    fn test_blink_jumps_at_halfway() {
        let mut transition = Transition::new(TransitionPolicy::Blink, start(), end(), 1.0);

        assert_eq!(transition.update(0.25), None);
        assert_eq!(transition.current_pose(), start());

        // progress is exactly 0.5 here
        assert_eq!(transition.update(0.25), Some(end()));
        assert_eq!(transition.current_pose(), end());

        assert_eq!(transition.update(0.25), None);
        assert_eq!(transition.current_pose(), end());
        assert!(!transition.is_finished());

        assert_eq!(transition.update(0.25), None);
        assert!(transition.is_finished());
        assert_eq!(transition.current_pose(), end());
    }

    #[test]
    fn test_blink_jumps_once_when_a_step_straddles_halfway() {
        let mut transition = Transition::new(TransitionPolicy::Blink, start(), end(), 1.0);

        assert_eq!(transition.update(0.4), None);
        assert_eq!(transition.update(0.55), Some(end()));
        assert_eq!(transition.update(0.55), None);
        assert!(transition.is_finished());
    }

    #[test]
    fn test_blink_overlay_profile() {
        let mut transition = Transition::new(TransitionPolicy::Blink, start(), end(), 1.0);
        assert_eq!(transition.overlay_coverage(), Some(0.0));

        let mut samples = vec![0.0];
        for _ in 0..8 {
            transition.update(0.125);
            samples.push(transition.overlay_coverage().unwrap());
        }

        // rising to the midpoint, falling afterwards
        assert_eq!(samples[4], 1.0);
        assert!(samples[..=4].windows(2).all(|w| w[1] > w[0]));
        assert!(samples[4..].windows(2).all(|w| w[1] < w[0]));
        assert_eq!(samples[8], 0.0);
    }

    #[test]
    fn test_move_policies_have_no_overlay() {
        for policy in [TransitionPolicy::MoveLinear, TransitionPolicy::MoveSmooth] {
            assert_eq!(Transition::new(policy, start(), end(), 1.0).overlay_coverage(), None);
        }
    }
}
