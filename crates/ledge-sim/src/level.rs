// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_geom::Transform;
use ledge_math::{Quat, Vec3};

use crate::objects::{ObjectId, ObjectKind, Patrol};

/// Placement of one obstacle before the world instantiates it.
#[derive(Debug, Clone, PartialEq)]
pub enum ObstacleDesc {
    /// Platform, optionally patrolling.
    Platform {
        /// Initial placement; the scale is the platform's size.
        transform: Transform,
        /// Route for a moving platform.
        patrol: Option<Patrol>,
    },
    /// Pressure plate.
    Trigger {
        /// Placement of the unpressed plate.
        transform: Transform,
        /// Bridges raised when the plate is pressed.
        bridges: Vec<ObjectId>,
    },
    /// Bridge waiting to be raised.
    Bridge {
        /// Lowered placement.
        transform: Transform,
        /// Center height once fully raised.
        raised_y: f32,
        /// Rise speed in units per second.
        speed: f32,
    },
    /// Pickup.
    Collectable {
        /// Placement.
        transform: Transform,
    },
}

impl ObstacleDesc {
    /// Kind the description instantiates.
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Platform { .. } => ObjectKind::Platform,
            Self::Trigger { .. } => ObjectKind::Trigger,
            Self::Bridge { .. } => ObjectKind::Bridge,
            Self::Collectable { .. } => ObjectKind::Collectable,
        }
    }

    /// Initial placement.
    pub const fn transform(&self) -> &Transform {
        match self {
            Self::Platform { transform, .. }
            | Self::Trigger { transform, .. }
            | Self::Bridge { transform, .. }
            | Self::Collectable { transform } => transform,
        }
    }
}

/// A course composed in code: spawn point plus obstacles in test order.
///
/// Ids are handed out as obstacles are added, starting at 1; the player is
/// always [`ObjectId::PLAYER`].
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    spawn: Vec3,
    spawn_yaw: f32,
    player_size: Vec3,
    obstacles: Vec<(ObjectId, ObstacleDesc)>,
}

impl Level {
    /// Default player footprint (width, height, depth).
    pub const PLAYER_SIZE: Vec3 = Vec3::new(0.6, 1.0, 0.6);

    /// Empty course with the player spawning at `spawn` facing +Z.
    pub fn new(spawn: Vec3) -> Self {
        Self {
            spawn,
            spawn_yaw: 0.0,
            player_size: Self::PLAYER_SIZE,
            obstacles: Vec::new(),
        }
    }

    /// Sets the facing at spawn.
    pub fn with_spawn_yaw(mut self, yaw: f32) -> Self {
        self.spawn_yaw = yaw;
        self
    }

    /// Sets the player's size.
    pub fn with_player_size(mut self, size: Vec3) -> Self {
        self.player_size = size;
        self
    }

    /// Spawn position.
    pub const fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Facing at spawn.
    pub const fn spawn_yaw(&self) -> f32 {
        self.spawn_yaw
    }

    /// Player size.
    pub const fn player_size(&self) -> Vec3 {
        self.player_size
    }

    /// Obstacles in insertion order.
    pub fn obstacles(&self) -> &[(ObjectId, ObstacleDesc)] {
        &self.obstacles
    }

    /// Appends an obstacle and returns its id.
    pub fn add(&mut self, desc: ObstacleDesc) -> ObjectId {
        let id = ObjectId(u32::try_from(self.obstacles.len()).map_or(u32::MAX, |n| n.saturating_add(1)));
        self.obstacles.push((id, desc));
        id
    }

    /// Static platform of `size` centered at `center`.
    pub fn platform(&mut self, center: Vec3, size: Vec3) -> ObjectId {
        self.add(ObstacleDesc::Platform {
            transform: boxed(center, size),
            patrol: None,
        })
    }

    /// Platform shuttling between `from` and `to` at `speed`.
    pub fn moving_platform(&mut self, from: Vec3, to: Vec3, size: Vec3, speed: f32) -> ObjectId {
        self.add(ObstacleDesc::Platform {
            transform: boxed(from, size),
            patrol: Some(Patrol { from, to, speed }),
        })
    }

    /// Lowered bridge at `center` that rises to `raised_y`.
    pub fn bridge(&mut self, center: Vec3, size: Vec3, raised_y: f32, speed: f32) -> ObjectId {
        self.add(ObstacleDesc::Bridge {
            transform: boxed(center, size),
            raised_y,
            speed,
        })
    }

    /// Pressure plate raising `bridges`.
    pub fn trigger(&mut self, center: Vec3, size: Vec3, bridges: &[ObjectId]) -> ObjectId {
        self.add(ObstacleDesc::Trigger {
            transform: boxed(center, size),
            bridges: bridges.to_vec(),
        })
    }

    /// Pickup at `center`.
    pub fn collectable(&mut self, center: Vec3) -> ObjectId {
        self.add(ObstacleDesc::Collectable {
            transform: Transform::from_translation(center),
        })
    }

    /// Sample course: start slab with a pickup and a pressure plate, a gap
    /// closed by a bridge, a walled landing with a second pickup, a shuttle
    /// platform, and a goal slab. Walking along +Z reaches the shuttle; getting
    /// onto the goal depends on the shuttle's timing, and a straight walk
    /// drops off its far end.
    pub fn demo() -> Self {
        let mut level = Self::new(Vec3::new(0.0, 2.5, 0.0));
        level.platform(Vec3::new(0.0, 1.5, 3.0), Vec3::new(6.0, 1.0, 10.0));
        level.collectable(Vec3::new(0.0, 2.6, 4.0));
        let bridge = level.bridge(
            Vec3::new(0.0, 0.5, 11.0),
            Vec3::new(2.0, 0.4, 6.0),
            1.8,
            4.0,
        );
        level.trigger(
            Vec3::new(0.0, 1.9, 7.0),
            Vec3::new(2.0, 0.2, 2.0),
            &[bridge],
        );
        level.platform(Vec3::new(0.0, 1.5, 17.0), Vec3::new(6.0, 1.0, 6.0));
        level.platform(Vec3::new(3.5, 3.0, 17.0), Vec3::new(1.0, 2.0, 6.0));
        level.collectable(Vec3::new(1.5, 2.6, 17.0));
        level.moving_platform(
            Vec3::new(0.0, 1.75, 21.5),
            Vec3::new(0.0, 1.75, 27.5),
            Vec3::new(3.0, 0.5, 3.0),
            2.0,
        );
        level.platform(Vec3::new(0.0, 1.5, 32.0), Vec3::new(6.0, 1.0, 6.0));
        level
    }
}

fn boxed(center: Vec3, size: Vec3) -> Transform {
    Transform::new(center, Quat::identity(), size)
}
