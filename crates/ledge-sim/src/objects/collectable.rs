// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::Quat;

use crate::body::{Body, Spatial};
use crate::objects::{ObjectId, ObjectKind};

/// Spinning pickup. Never blocks the player; touching it collects it.
#[derive(Debug, Clone)]
pub struct Collectable {
    id: ObjectId,
    spatial: Spatial,
    angle: f32,
    collected: bool,
}

impl Collectable {
    /// Spin rate in radians per second.
    pub const SPIN_SPEED: f32 = 2.0;

    /// Uncollected pickup.
    pub fn new(id: ObjectId, spatial: Spatial) -> Self {
        Self {
            id,
            spatial,
            angle: 0.0,
            collected: false,
        }
    }

    /// Whether the player has picked it up.
    pub const fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks as collected; returns `false` if it already was.
    pub fn collect(&mut self) -> bool {
        !core::mem::replace(&mut self.collected, true)
    }
}

impl Body for Collectable {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Collectable
    }

    fn spatial(&self) -> &Spatial {
        &self.spatial
    }

    fn spatial_mut(&mut self) -> &mut Spatial {
        &mut self.spatial
    }

    fn update(&mut self, dt: f32) {
        if self.collected {
            return;
        }
        self.angle = (self.angle + Self::SPIN_SPEED * dt) % core::f32::consts::TAU;
        let transform = self.spatial.transform().with_rotation(Quat::from_yaw(self.angle));
        self.spatial.set_transform(transform);
    }

    fn is_solid(&self) -> bool {
        false
    }
}
