mod collision_query;
mod physics_world;
mod scene_builder;
pub mod util;

pub use collision_query::{CollisionQuery, RayResult};
pub use physics_world::PhysicsWorld;
pub use scene_builder::{SceneBuilder, FLOOR_CATEGORY, WALL_CATEGORY};
