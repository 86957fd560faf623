use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Maps normalized progress in [0, 1] to an interpolation factor in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// `sin(p * pi / 2)^2`
    SineSquared,
}

impl Easing {
    pub fn apply(self, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => progress,
            Easing::SineSquared => sine_squared(progress),
        }
    }
}

pub fn sine_squared(progress: f32) -> f32 {
    let s = (progress * FRAC_PI_2).sin();
    s * s
}
