// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::Arc;

use ledge_geom::{Aabb, BoundingBox, GeomError, Transform};
use ledge_math::Vec3;

use crate::objects::{ObjectId, ObjectKind};

/// Capability set the frame loop needs from every simulated object.
pub trait Body {
    /// Stable identifier within the world.
    fn id(&self) -> ObjectId;
    /// Object type; selects the shared model bounds.
    fn kind(&self) -> ObjectKind;
    /// Placement and cached world box.
    fn spatial(&self) -> &Spatial;
    /// Mutable placement.
    fn spatial_mut(&mut self) -> &mut Spatial;
    /// Advances the object's own motion by `dt` seconds.
    ///
    /// Only the transform changes; call [`Body::refresh`] afterwards.
    fn update(&mut self, dt: f32);

    /// Whether the player is pushed out of this object.
    fn is_solid(&self) -> bool {
        true
    }

    /// Current model-to-world transform.
    fn transform(&self) -> &Transform {
        self.spatial().transform()
    }

    /// World box as of the last successful refresh.
    fn world_box(&self) -> &Aabb {
        self.spatial().world_box()
    }

    /// Rebuilds the world box from the current transform.
    fn refresh(&mut self) -> Result<(), GeomError> {
        self.spatial_mut().refresh()
    }
}

/// Transform plus the world box derived from it.
///
/// The world box is only ever replaced by a successful rebuild. When a
/// rebuild fails the transform rolls back to the last one that produced a
/// box, so the pair stays consistent.
#[derive(Debug, Clone)]
pub struct Spatial {
    model: Arc<BoundingBox>,
    transform: Transform,
    last_good: Transform,
    world: Aabb,
}

impl Spatial {
    /// Places `model` at `transform`; fails when the initial box cannot be built.
    pub fn new(model: Arc<BoundingBox>, transform: Transform) -> Result<Self, GeomError> {
        let world = model.world_box(&transform)?;
        Ok(Self {
            model,
            transform,
            last_good: transform,
            world,
        })
    }

    /// Shared model-space bounds.
    pub fn model(&self) -> &Arc<BoundingBox> {
        &self.model
    }

    /// Current transform (possibly newer than the world box).
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Transform that produced the current world box.
    pub const fn last_good(&self) -> &Transform {
        &self.last_good
    }

    /// World box from the last successful refresh.
    pub const fn world_box(&self) -> &Aabb {
        &self.world
    }

    /// Current translation.
    pub const fn position(&self) -> Vec3 {
        self.transform.translation()
    }

    /// Replaces the transform without rebuilding.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Moves the transform to `position` without rebuilding.
    pub fn set_position(&mut self, position: Vec3) {
        self.transform = self.transform.with_translation(position);
    }

    /// Offsets the transform by `delta` without rebuilding.
    pub fn translate(&mut self, delta: Vec3) {
        self.transform = self.transform.translated(delta);
    }

    /// Rebuilds the world box from the current transform.
    ///
    /// On failure the transform is restored to [`Spatial::last_good`] and the
    /// previous world box is kept.
    pub fn refresh(&mut self) -> Result<(), GeomError> {
        match self.model.world_box(&self.transform) {
            Ok(world) => {
                self.world = world;
                self.last_good = self.transform;
                Ok(())
            }
            Err(err) => {
                self.transform = self.last_good;
                Err(err)
            }
        }
    }
}
