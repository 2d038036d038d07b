// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Collision core for Ledge.

This crate provides:
- Model-space bounding boxes built once from mesh vertices (`BoundingBox`).
- World-space axis-aligned boxes rebuilt under a transform (`Aabb`, `Transform`).
- A strict pairwise overlap predicate (`overlaps`).
- A per-axis discrete resolver that picks the entry axis and separates along it
  (`DiscreteResolver`, `resolve_discrete`).
- A swept (continuous) test returning time of impact and an axis normal (`sweep`).

Design notes:
- Deterministic: axes are always visited x, then y, then z; ties keep the
  first axis.
- Float32 throughout; degenerate inputs are rejected with `GeomError`
  instead of leaking sentinels or infinities into gameplay state.
"]

/// Pairwise collision queries and responses.
pub mod collide;
mod error;
/// Foundational geometric types.
pub mod types;

pub use collide::discrete::{entry_axis, resolve_along, resolve_discrete, Contact, DiscreteResolver};
pub use collide::overlap::overlaps;
pub use collide::swept::{sweep, sweep_axis_times, AxisTimes, Sweep};
pub use error::GeomError;
pub use types::aabb::Aabb;
pub use types::bounding_box::BoundingBox;
pub use types::transform::Transform;
