use cgmath::{InnerSpace, Quaternion, Rotation, Vector3};
use serde::{Deserialize, Serialize};

/// Direction a controller points at when its rotation is identity
pub const FORWARD: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

/// Button mapping options for teleport activation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeleportButton {
    Trigger,
    AButton,
    Squeeze,
}

/// Per-frame controller sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub trigger_value: f32,
    pub squeeze_value: f32,
    pub a_value: f32,
}

impl Hand {
    pub fn at(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Hand {
            position,
            rotation,
            trigger_value: 0.0,
            squeeze_value: 0.0,
            a_value: 0.0,
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.rotation.rotate_vector(FORWARD).normalize()
    }

    pub fn button_value(&self, button: TeleportButton) -> f32 {
        match button {
            TeleportButton::Trigger => self.trigger_value,
            TeleportButton::AButton => self.a_value,
            TeleportButton::Squeeze => self.squeeze_value,
        }
    }
}

/// Edges of the activation button for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivationEdge {
    pub pressed: bool,
    pub released: bool,
}

impl ActivationEdge {
    pub const NONE: ActivationEdge = ActivationEdge {
        pressed: false,
        released: false,
    };

    pub const PRESSED: ActivationEdge = ActivationEdge {
        pressed: true,
        released: false,
    };

    pub const RELEASED: ActivationEdge = ActivationEdge {
        pressed: false,
        released: true,
    };
}

/// Turns an analog button value into press/release edges. Sample it exactly once per frame.
#[derive(Clone, Debug, Default)]
pub struct EdgeDetector {
    was_pressed: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, value: f32, threshold: f32) -> ActivationEdge {
        let is_pressed = value >= threshold;
        let edge = ActivationEdge {
            pressed: is_pressed && !self.was_pressed,
            released: !is_pressed && self.was_pressed,
        };
        self.was_pressed = is_pressed;

        if edge.pressed {
            engine::input_log!(TRACE, "activation pressed (value {:.2})", value);
        }

        edge
    }

    pub fn is_held(&self) -> bool {
        self.was_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Rotation3, vec3};

    #[test]
    fn test_edges_fire_once() {
        let mut detector = EdgeDetector::new();

        assert_eq!(detector.sample(0.0, 0.5), ActivationEdge::NONE);
        assert_eq!(detector.sample(0.8, 0.5), ActivationEdge::PRESSED);
        assert_eq!(detector.sample(0.9, 0.5), ActivationEdge::NONE);
        assert!(detector.is_held());
        assert_eq!(detector.sample(0.1, 0.5), ActivationEdge::RELEASED);
        assert_eq!(detector.sample(0.0, 0.5), ActivationEdge::NONE);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut detector = EdgeDetector::new();
        assert!(detector.sample(0.5, 0.5).pressed);
    }

    #[test]
    fn test_button_mapping() {
        let hand = Hand {
            trigger_value: 0.1,
            squeeze_value: 0.2,
            a_value: 0.3,
            ..Hand::at(vec3(0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0))
        };

        assert_eq!(hand.button_value(TeleportButton::Trigger), 0.1);
        assert_eq!(hand.button_value(TeleportButton::Squeeze), 0.2);
        assert_eq!(hand.button_value(TeleportButton::AButton), 0.3);
    }

    #[test]
    fn test_forward_follows_rotation() {
        let hand = Hand::at(vec3(0.0, 0.0, 0.0), Quaternion::from_angle_y(Deg(90.0)));
        let forward = hand.forward();
        assert!((forward - vec3(1.0, 0.0, 0.0)).magnitude() < 1e-5);
    }
}
