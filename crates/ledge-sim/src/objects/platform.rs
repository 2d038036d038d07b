// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::Vec3;

use crate::body::{Body, Spatial};
use crate::objects::{ObjectId, ObjectKind};

/// Back-and-forth route for a moving platform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Patrol {
    /// First endpoint; the platform starts here.
    pub from: Vec3,
    /// Second endpoint.
    pub to: Vec3,
    /// Travel speed in units per second.
    pub speed: f32,
}

/// Solid slab the player stands on.
#[derive(Debug, Clone)]
pub struct Platform {
    id: ObjectId,
    spatial: Spatial,
    patrol: Option<Patrol>,
    outbound: bool,
}

impl Platform {
    /// Static platform.
    pub fn fixed(id: ObjectId, spatial: Spatial) -> Self {
        Self {
            id,
            spatial,
            patrol: None,
            outbound: true,
        }
    }

    /// Platform travelling between the endpoints of `patrol`.
    pub fn patrolling(id: ObjectId, spatial: Spatial, patrol: Patrol) -> Self {
        Self {
            id,
            spatial,
            patrol: Some(patrol),
            outbound: true,
        }
    }

    /// Route, if the platform moves.
    pub const fn patrol(&self) -> Option<&Patrol> {
        self.patrol.as_ref()
    }
}

impl Body for Platform {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Platform
    }

    fn spatial(&self) -> &Spatial {
        &self.spatial
    }

    fn spatial_mut(&mut self) -> &mut Spatial {
        &mut self.spatial
    }

    fn update(&mut self, dt: f32) {
        let Some(patrol) = self.patrol else {
            return;
        };
        let target = if self.outbound { patrol.to } else { patrol.from };
        let to_target = target - self.spatial.position();
        let step = patrol.speed * dt;
        if to_target.length() <= step {
            self.spatial.set_position(target);
            self.outbound = !self.outbound;
        } else {
            self.spatial.translate(to_target.normalize() * step);
        }
    }
}
