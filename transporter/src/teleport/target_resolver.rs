use std::collections::HashSet;

use cgmath::{InnerSpace, Vector3};

use crate::physics::{CollisionQuery, RayResult};

/// A single targeting ray: where it starts, where it points, how far it reaches
/// and which categories it may land on. An empty filter accepts every category.
#[derive(Clone, Copy, Debug)]
pub struct RayQuery<'a> {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub max_range: f32,
    pub category_filter: &'a HashSet<String>,
}

/// Resolve `ray` against `query`, keeping only the nearest hit.
///
/// A hit on a category outside a non-empty filter is downgraded by re-issuing
/// the query as a zero-length probe, so it comes back exactly like a miss.
pub fn resolve<Q: CollisionQuery + ?Sized>(query: &Q, ray: &RayQuery<'_>) -> RayResult {
    if ray.direction.magnitude2() <= f32::EPSILON {
        return RayResult::miss();
    }
    let direction = ray.direction.normalize();

    let result = query.cast(ray.origin, direction, ray.max_range);
    if !result.hit || ray.category_filter.is_empty() {
        return result;
    }

    let accepted = result
        .category()
        .is_some_and(|category| ray.category_filter.contains(category));
    if accepted {
        return result;
    }

    engine::teleport_log!(
        TRACE,
        "target category {:?} rejected by filter {:?}",
        result.category(),
        ray.category_filter
    );
    query.cast(ray.origin, direction, 0.0)
}

/// Ray targeting with a fixed range and category filter
#[derive(Clone, Debug)]
pub struct TargetResolver {
    max_range: f32,
    category_filter: HashSet<String>,
}

impl TargetResolver {
    pub fn new<I, S>(max_range: f32, category_filter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetResolver {
            max_range,
            category_filter: category_filter.into_iter().map(Into::into).collect(),
        }
    }

    pub fn accept_any(max_range: f32) -> Self {
        TargetResolver {
            max_range,
            category_filter: HashSet::new(),
        }
    }

    pub fn resolve<Q: CollisionQuery + ?Sized>(
        &self,
        query: &Q,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
    ) -> RayResult {
        resolve(
            query,
            &RayQuery {
                origin,
                direction,
                max_range: self.max_range,
                category_filter: &self.category_filter,
            },
        )
    }

    pub fn max_range(&self) -> f32 {
        self.max_range
    }

    pub fn category_filter(&self) -> &HashSet<String> {
        &self.category_filter
    }
}
