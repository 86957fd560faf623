use cgmath::{InnerSpace, Vector3};

use super::TargetResolver;
use crate::physics::{CollisionQuery, RayResult};

/// What the host should draw for the pointer this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayVisual {
    pub start: Vector3<f32>,
    pub end: Vector3<f32>,
    /// Landing marker, present only when the ray hit an accepted target
    pub indicator: Option<Vector3<f32>>,
}

/// Laser pointer that can be queried for what it is pointing at.
///
/// While disabled it neither casts nor draws, and its target is a miss.
#[derive(Clone, Debug)]
pub struct PointerRay {
    resolver: TargetResolver,
    enabled: bool,
    target: RayResult,
    visual: Option<RayVisual>,
}

impl PointerRay {
    pub fn new(resolver: TargetResolver) -> Self {
        PointerRay {
            resolver,
            enabled: true,
            target: RayResult::miss(),
            visual: None,
        }
    }

    /// Cast from the controller and refresh the target and visual. Call once per frame.
    pub fn update<Q: CollisionQuery + ?Sized>(
        &mut self,
        query: &Q,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
    ) -> &RayResult {
        self.target = RayResult::miss();

        if !self.enabled {
            self.visual = None;
            return &self.target;
        }

        self.target = self.resolver.resolve(query, origin, direction);

        let visual = if self.target.hit {
            RayVisual {
                start: origin,
                end: self.target.point,
                indicator: Some(self.target.point),
            }
        } else {
            let reach = if direction.magnitude2() > f32::EPSILON {
                direction.normalize() * self.resolver.max_range()
            } else {
                Vector3::new(0.0, 0.0, 0.0)
            };
            RayVisual {
                start: origin,
                end: origin + reach,
                indicator: None,
            }
        };
        self.visual = Some(visual);

        &self.target
    }

    /// Show or hide the ray. Hiding also drops the landing marker immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.visual = None;
            self.target = RayResult::miss();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Result of the most recent update
    pub fn target(&self) -> &RayResult {
        &self.target
    }

    pub fn visual(&self) -> Option<&RayVisual> {
        self.visual.as_ref()
    }

    pub fn resolver(&self) -> &TargetResolver {
        &self.resolver
    }
}
