use cgmath::{Quaternion, Vector3, VectorSpace};
use serde::{Deserialize, Serialize};

/// World-space position with an optional orientation.
///
/// Poses are values: interpolation and offsets always return a new pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub rotation: Option<Quaternion<f32>>,
}

impl Pose {
    pub const fn from_position(position: Vector3<f32>) -> Self {
        Pose {
            position,
            rotation: None,
        }
    }

    pub const fn new(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Pose {
            position,
            rotation: Some(rotation),
        }
    }

    pub fn with_position(self, position: Vector3<f32>) -> Self {
        Pose { position, ..self }
    }

    pub fn translated(self, offset: Vector3<f32>) -> Self {
        self.with_position(self.position + offset)
    }

    /// Interpolate towards `target`. `amount` is clamped to [0, 1] and the
    /// endpoints are returned verbatim, so `lerp(b, 1.0) == b` exactly.
    pub fn lerp(&self, target: &Pose, amount: f32) -> Pose {
        if amount.is_nan() || amount <= 0.0 {
            return *self;
        }
        if amount >= 1.0 {
            return *target;
        }

        let rotation = match (self.rotation, target.rotation) {
            (Some(from), Some(to)) => Some(from.slerp(to, amount)),
            (from, _) => from,
        };

        Pose {
            position: self.position.lerp(target.position, amount),
            rotation,
        }
    }
}

impl From<Vector3<f32>> for Pose {
    fn from(position: Vector3<f32>) -> Self {
        Pose::from_position(position)
    }
}
