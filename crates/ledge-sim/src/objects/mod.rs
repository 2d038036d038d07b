// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::Vec3;

use crate::body::{Body, Spatial};

mod bridge;
mod collectable;
mod platform;
mod player;
mod trigger;

pub use bridge::Bridge;
pub use collectable::Collectable;
pub use platform::{Patrol, Platform};
pub use player::Player;
pub use trigger::Trigger;

/// Identifier of a simulated object; assigned in insertion order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// The player is always object 0; obstacles count up from 1.
    pub const PLAYER: Self = Self(0);
}

impl core::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Object type. Every instance of a kind shares one model-space box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The player-controlled body.
    Player,
    /// Static or patrolling platform.
    Platform,
    /// Pressure plate that raises bridges.
    Trigger,
    /// Bridge raised by a trigger.
    Bridge,
    /// Pickup counted into the score.
    Collectable,
}

const CUBE: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

// Collectables render as a diamond.
const OCTAHEDRON: [Vec3; 6] = [
    Vec3::new(0.25, 0.0, 0.0),
    Vec3::new(-0.25, 0.0, 0.0),
    Vec3::new(0.0, 0.4, 0.0),
    Vec3::new(0.0, -0.4, 0.0),
    Vec3::new(0.0, 0.0, 0.25),
    Vec3::new(0.0, 0.0, -0.25),
];

impl ObjectKind {
    /// Model-space vertex positions of the kind's mesh.
    pub fn mesh(self) -> &'static [Vec3] {
        match self {
            Self::Collectable => &OCTAHEDRON,
            Self::Player | Self::Platform | Self::Trigger | Self::Bridge => &CUBE,
        }
    }

    /// Lowercase display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Platform => "platform",
            Self::Trigger => "trigger",
            Self::Bridge => "bridge",
            Self::Collectable => "collectable",
        }
    }
}

impl core::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything in the course that is not the player.
#[derive(Debug, Clone)]
pub enum Obstacle {
    /// See [`Platform`].
    Platform(Platform),
    /// See [`Trigger`].
    Trigger(Trigger),
    /// See [`Bridge`].
    Bridge(Bridge),
    /// See [`Collectable`].
    Collectable(Collectable),
}

impl Obstacle {
    fn body(&self) -> &dyn Body {
        match self {
            Self::Platform(p) => p,
            Self::Trigger(t) => t,
            Self::Bridge(b) => b,
            Self::Collectable(c) => c,
        }
    }

    fn body_mut(&mut self) -> &mut dyn Body {
        match self {
            Self::Platform(p) => p,
            Self::Trigger(t) => t,
            Self::Bridge(b) => b,
            Self::Collectable(c) => c,
        }
    }

    /// The bridge inside, if this is one.
    pub fn as_bridge(&self) -> Option<&Bridge> {
        match self {
            Self::Bridge(b) => Some(b),
            _ => None,
        }
    }

    /// The trigger inside, if this is one.
    pub fn as_trigger(&self) -> Option<&Trigger> {
        match self {
            Self::Trigger(t) => Some(t),
            _ => None,
        }
    }

    /// The collectable inside, if this is one.
    pub fn as_collectable(&self) -> Option<&Collectable> {
        match self {
            Self::Collectable(c) => Some(c),
            _ => None,
        }
    }
}

impl Body for Obstacle {
    fn id(&self) -> ObjectId {
        self.body().id()
    }

    fn kind(&self) -> ObjectKind {
        self.body().kind()
    }

    fn spatial(&self) -> &Spatial {
        self.body().spatial()
    }

    fn spatial_mut(&mut self) -> &mut Spatial {
        self.body_mut().spatial_mut()
    }

    fn update(&mut self, dt: f32) {
        self.body_mut().update(dt);
    }

    fn is_solid(&self) -> bool {
        self.body().is_solid()
    }
}
