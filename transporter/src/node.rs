use engine::Pose;

/// Accessor for the node a teleport moves (usually the tracking-space offset).
/// The teleport system borrows it for one frame at a time and never keeps it.
pub trait SpatialNode {
    fn pose(&self) -> Pose;
    fn set_pose(&mut self, pose: Pose);
}

/// Plain in-memory node, for hosts without a scene graph and for tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedNode {
    pose: Pose,
    writes: u32,
}

impl TrackedNode {
    pub fn new(pose: Pose) -> Self {
        TrackedNode { pose, writes: 0 }
    }

    /// Number of times the pose has been written since creation
    pub fn write_count(&self) -> u32 {
        self.writes
    }
}

impl SpatialNode for TrackedNode {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.writes += 1;
    }
}
