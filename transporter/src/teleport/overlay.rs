use cgmath::Vector2;

/// Axis-aligned screen rectangle in pixels, origin at the top left
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Full-width bars closing in from the top and bottom of the screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyelidBars {
    pub top: ScreenRect,
    pub bottom: ScreenRect,
}

/// Screen-space overlay for a blink transition.
///
/// `coverage` is 0 with the eyes open and 1 when they are fully closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkOverlay {
    pub coverage: f32,
}

impl BlinkOverlay {
    pub fn new(coverage: f32) -> Self {
        BlinkOverlay {
            coverage: coverage.clamp(0.0, 1.0),
        }
    }

    /// Each lid covers `coverage` of its half of the screen
    pub fn eyelids(&self, screen_size: Vector2<f32>) -> EyelidBars {
        let height = self.coverage * screen_size.y * 0.5;

        EyelidBars {
            top: ScreenRect {
                x: 0.0,
                y: 0.0,
                width: screen_size.x,
                height,
            },
            bottom: ScreenRect {
                x: 0.0,
                y: screen_size.y - height,
                width: screen_size.x,
                height,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.coverage > 0.0
    }
}
