use std::collections::HashMap;

use cgmath::{InnerSpace, Vector3};
use rapier3d::{
    parry::query::Ray,
    prelude::{Collider, ColliderHandle, ColliderSet},
};

use super::{
    CollisionQuery, RayResult,
    util::{npoint_to_cgvec, vec_to_npoint, vec_to_nvec},
};

/// Static scene geometry with a category label per collider.
///
/// Only answers ray queries; nothing here is simulated.
pub struct PhysicsWorld {
    colliders: ColliderSet,
    categories: HashMap<ColliderHandle, String>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        PhysicsWorld {
            colliders: ColliderSet::new(),
            categories: HashMap::new(),
        }
    }

    pub fn add_collider(
        &mut self,
        collider: Collider,
        category: impl Into<String>,
    ) -> ColliderHandle {
        let category = category.into();
        let handle = self.colliders.insert(collider);
        engine::physics_log!(DEBUG, "added collider {:?} with category '{}'", handle, category);
        self.categories.insert(handle, category);
        handle
    }

    /// Insert a collider that belongs to no category. Rays still hit it, but
    /// any non-empty category filter rejects it.
    pub fn add_unlabelled_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.colliders.insert(collider)
    }

    pub fn category_of(&self, handle: ColliderHandle) -> Option<&str> {
        self.categories.get(&handle).map(String::as_str)
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    fn nearest_hit(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        max_range: f32,
    ) -> Option<(ColliderHandle, f32)> {
        let ray = Ray::new(vec_to_npoint(origin), vec_to_nvec(direction));

        self.colliders
            .iter()
            .filter_map(|(handle, collider)| {
                collider
                    .shape()
                    .cast_ray(collider.position(), &ray, max_range, true)
                    .map(|toi| (handle, toi))
            })
            // A ray starting inside a solid reports 0; that collider is not a target
            .filter(|(_, toi)| *toi > 0.0)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionQuery for PhysicsWorld {
    fn cast(&self, origin: Vector3<f32>, direction: Vector3<f32>, max_range: f32) -> RayResult {
        if max_range.is_nan() || max_range <= 0.0 || direction.magnitude2() <= f32::EPSILON {
            return RayResult::miss();
        }

        let direction = direction.normalize();
        match self.nearest_hit(origin, direction, max_range) {
            Some((handle, toi)) => {
                let point = npoint_to_cgvec(vec_to_npoint(origin) + vec_to_nvec(direction) * toi);
                engine::physics_log!(
                    TRACE,
                    "ray hit {:?} at distance {:.3} ({:?})",
                    handle,
                    toi,
                    self.category_of(handle)
                );
                RayResult::hit(point, toi, self.categories.get(&handle).cloned())
            }
            None => RayResult::miss(),
        }
    }
}
