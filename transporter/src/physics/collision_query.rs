use cgmath::{Vector3, vec3};

/// Outcome of a ray cast.
///
/// A miss always reports `distance == 0` and a zero `point`; a hit reports a
/// distance in `(0, max_range]`.
#[derive(Clone, Debug, PartialEq)]
pub struct RayResult {
    pub hit: bool,
    pub point: Vector3<f32>,
    pub distance: f32,
    pub category: Option<String>,
}

impl RayResult {
    pub fn miss() -> Self {
        RayResult {
            hit: false,
            point: vec3(0.0, 0.0, 0.0),
            distance: 0.0,
            category: None,
        }
    }

    pub fn hit(point: Vector3<f32>, distance: f32, category: Option<String>) -> Self {
        RayResult {
            hit: true,
            point,
            distance,
            category,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True for a hit whose category label is exactly `category`
    pub fn is_category(&self, category: &str) -> bool {
        self.hit && self.category() == Some(category)
    }
}

impl Default for RayResult {
    fn default() -> Self {
        RayResult::miss()
    }
}

/// Read-only ray query against scene geometry.
///
/// Implementations report only the nearest intersection, and a `max_range`
/// of zero must always report a miss.
pub trait CollisionQuery {
    fn cast(&self, origin: Vector3<f32>, direction: Vector3<f32>, max_range: f32) -> RayResult;
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    fn cast(&self, origin: Vector3<f32>, direction: Vector3<f32>, max_range: f32) -> RayResult {
        (**self).cast(origin, direction, max_range)
    }
}
