// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the collision layer.
//!
//! - `BoundingBox` is model-space data built once per mesh.
//! - `Aabb` is the world-space box rebuilt whenever the owning object moves.
//! - `Transform` composes `M = T * R * S` with plain `f32` ops (no FMA).

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Eight-corner model-space bounding boxes."]
pub mod bounding_box;
#[doc = "Rigid transforms with non-uniform scale."]
pub mod transform;
