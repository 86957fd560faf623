use std::time::Duration;

/// Frame timing handed to every update. `elapsed` is the step size of this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Time {
    pub elapsed: Duration,
    pub total: Duration,
}

impl Time {
    pub fn from_delta_seconds(delta: f32) -> Self {
        let elapsed = seconds(delta);
        Time {
            elapsed,
            total: elapsed,
        }
    }

    /// The next frame, `delta` seconds later
    pub fn step(&self, delta: f32) -> Self {
        let elapsed = seconds(delta);
        Time {
            elapsed,
            total: self.total + elapsed,
        }
    }

    pub fn delta_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

fn seconds(delta: f32) -> Duration {
    if delta.is_finite() && delta > 0.0 {
        Duration::from_secs_f32(delta)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_accumulates_total() {
        let time = Time::default().step(0.5).step(0.25);
        assert!((time.delta_seconds() - 0.25).abs() < 1e-6);
        assert!((time.total.as_secs_f32() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_is_zero() {
        assert_eq!(Time::from_delta_seconds(-1.0).elapsed, Duration::ZERO);
    }
}
