// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{move_towards, Vec3};

use crate::body::{Body, Spatial};
use crate::objects::{ObjectId, ObjectKind};

/// Pressure plate. Landing on it activates it once: it sinks a little and
/// raises every bridge it is linked to.
#[derive(Debug, Clone)]
pub struct Trigger {
    id: ObjectId,
    spatial: Spatial,
    bridges: Vec<ObjectId>,
    activated: bool,
    target_y: f32,
}

impl Trigger {
    /// Depth the plate sinks when pressed.
    pub const SINK_DEPTH: f32 = 0.2;
    /// Sinking speed in units per second.
    pub const SINK_SPEED: f32 = 4.0;

    /// Unpressed plate linked to `bridges`.
    pub fn new(id: ObjectId, spatial: Spatial, bridges: Vec<ObjectId>) -> Self {
        let target_y = spatial.position().y();
        Self {
            id,
            spatial,
            bridges,
            activated: false,
            target_y,
        }
    }

    /// Bridges raised on activation.
    pub fn bridges(&self) -> &[ObjectId] {
        &self.bridges
    }

    /// Whether the plate has been pressed.
    pub const fn is_activated(&self) -> bool {
        self.activated
    }

    /// Presses the plate; returns `false` if it was already pressed.
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;
        self.target_y -= Self::SINK_DEPTH;
        true
    }
}

impl Body for Trigger {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Trigger
    }

    fn spatial(&self) -> &Spatial {
        &self.spatial
    }

    fn spatial_mut(&mut self) -> &mut Spatial {
        &mut self.spatial
    }

    fn update(&mut self, dt: f32) {
        let p = self.spatial.position();
        let y = move_towards(p.y(), self.target_y, Self::SINK_SPEED * dt);
        self.spatial.set_position(Vec3::new(p.x(), y, p.z()));
    }
}
