// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{move_towards, Vec3};

use crate::body::{Body, Spatial};
use crate::objects::{ObjectId, ObjectKind};

/// Span that starts lowered and rises to `raised_y` once a trigger fires.
#[derive(Debug, Clone)]
pub struct Bridge {
    id: ObjectId,
    spatial: Spatial,
    raised_y: f32,
    speed: f32,
    raised: bool,
}

impl Bridge {
    /// Lowered bridge that will rise to `raised_y` at `speed` units per second.
    pub fn new(id: ObjectId, spatial: Spatial, raised_y: f32, speed: f32) -> Self {
        Self {
            id,
            spatial,
            raised_y,
            speed,
            raised: false,
        }
    }

    /// Starts raising; returns `false` if already raising.
    pub fn raise(&mut self) -> bool {
        if self.raised {
            return false;
        }
        self.raised = true;
        true
    }

    /// Whether a trigger has raised the bridge.
    pub const fn is_raised(&self) -> bool {
        self.raised
    }

    /// Height the bridge rises to.
    pub const fn raised_y(&self) -> f32 {
        self.raised_y
    }
}

impl Body for Bridge {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Bridge
    }

    fn spatial(&self) -> &Spatial {
        &self.spatial
    }

    fn spatial_mut(&mut self) -> &mut Spatial {
        &mut self.spatial
    }

    fn update(&mut self, dt: f32) {
        if !self.raised {
            return;
        }
        let p = self.spatial.position();
        let y = move_towards(p.y(), self.raised_y, self.speed * dt);
        self.spatial.set_position(Vec3::new(p.x(), y, p.z()));
    }
}
