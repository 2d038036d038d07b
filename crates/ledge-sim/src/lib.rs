// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Ledge simulation: the per-frame loop that drives the collision core.

A [`World`] owns one [`Player`] and an ordered list of [`Obstacle`]s built from
a [`Level`]. Each call to [`World::step`] runs one fixed frame:

1. apply input, jump, and gravity to the player;
2. update obstacles and refresh their world boxes;
3. move the player with the configured resolver (discrete or swept);
4. run the interaction pass (pressure plates, collectables);
5. respawn the player if it fell below the course.

Obstacles are tested in insertion order, so when the player overlaps two
solids in the same frame the later correction wins.
"]

mod body;
mod cache;
mod clock;
mod error;
mod input;
mod level;
/// Player and obstacle variants.
pub mod objects;
mod world;

pub use body::{Body, Spatial};
pub use cache::BoundsCache;
pub use clock::FrameClock;
pub use error::SimError;
pub use input::{AppContext, InputSnapshot};
pub use level::{Level, ObstacleDesc};
pub use objects::{
    Bridge, Collectable, ObjectId, ObjectKind, Obstacle, Patrol, Platform, Player, Trigger,
};
pub use world::{FrameReport, SimEvent, World};
