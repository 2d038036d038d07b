// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pairwise collision between world-space boxes.
//!
//! Contract shared by every query here:
//! - Overlap is strict: boxes that only share a face are separate.
//! - Axes are visited x, then y, then z, and ties keep the first axis.
//! - Pairs are tested brute-force by the caller, in obstacle-list order.

#[doc = "Per-axis entry-axis heuristic and positional correction."]
pub mod discrete;
#[doc = "Strict discrete intersection predicate."]
pub mod overlap;
#[doc = "Swept AABB time of impact and collision normal."]
pub mod swept;
