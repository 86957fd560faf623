use cgmath::{Quaternion, Vector3, vec3};
use rapier3d::prelude::ColliderBuilder;

use super::{PhysicsWorld, util::isometry_from};

/// Category label for walkable surfaces
pub const FLOOR_CATEGORY: &str = "floor";
pub const WALL_CATEGORY: &str = "wall";

struct SceneCuboid {
    center: Vector3<f32>,
    half_extents: Vector3<f32>,
    rotation: Quaternion<f32>,
    category: String,
}

/// Convenience builder for collision scenes made of labelled boxes.
pub struct SceneBuilder {
    cuboids: Vec<SceneCuboid>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            cuboids: Vec::new(),
        }
    }

    pub fn with_cuboid(
        self,
        center: Vector3<f32>,
        half_extents: Vector3<f32>,
        category: impl Into<String>,
    ) -> Self {
        self.with_rotated_cuboid(
            center,
            half_extents,
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
            category,
        )
    }

    pub fn with_rotated_cuboid(
        mut self,
        center: Vector3<f32>,
        half_extents: Vector3<f32>,
        rotation: Quaternion<f32>,
        category: impl Into<String>,
    ) -> Self {
        self.cuboids.push(SceneCuboid {
            center,
            half_extents,
            rotation,
            category: category.into(),
        });
        self
    }

    /// Square floor slab whose top face sits at `height`
    pub fn with_floor(self, height: f32, size: f32) -> Self {
        const FLOOR_THICKNESS: f32 = 0.5;
        let half = FLOOR_THICKNESS * 0.5;
        self.with_cuboid(
            vec3(0.0, height - half, 0.0),
            vec3(size * 0.5, half, size * 0.5),
            FLOOR_CATEGORY,
        )
    }

    /// Add a standard floor suitable for most scenes (120x120 units, top face at y = 0)
    pub fn with_default_floor(self) -> Self {
        self.with_floor(0.0, 120.0)
    }

    pub fn with_wall(self, center: Vector3<f32>, half_extents: Vector3<f32>) -> Self {
        self.with_cuboid(center, half_extents, WALL_CATEGORY)
    }

    pub fn build(self) -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        for cuboid in self.cuboids {
            let collider = ColliderBuilder::cuboid(
                cuboid.half_extents.x,
                cuboid.half_extents.y,
                cuboid.half_extents.z,
            )
            .position(isometry_from(cuboid.center, cuboid.rotation))
            .build();
            world.add_collider(collider, cuboid.category);
        }
        world
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
