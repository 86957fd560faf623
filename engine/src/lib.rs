// Frame-level plumbing shared by the game crates: scoped logging, pose math and frame time.

#[macro_use]
mod macros;

pub mod easing;
pub mod logging;
pub mod pose;
pub mod time;

pub use pose::Pose;
pub use time::Time;
