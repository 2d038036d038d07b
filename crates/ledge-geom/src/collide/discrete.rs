// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{Axis, Vec3};

use crate::collide::overlap::overlaps;
use crate::Aabb;

/// Outcome of separating one overlapping pair along a single axis.
///
/// Body `a` is the moving body; the correction is meant to be applied to it
/// immediately, before the next pair is tested.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    /// Entry axis chosen for this pair.
    pub axis: Axis,
    /// Signed distance `a` must move along `axis` to just clear `b`.
    pub depth: f32,
    /// `depth` expressed as a world-space vector along `axis`.
    pub correction: Vec3,
    /// Input velocity with the `axis` component zeroed.
    pub velocity: Vec3,
    /// Set when the resolved axis is vertical.
    pub grounded: bool,
}

/// Per-axis entry candidates for `a` against `b`, indexed by [`Axis::index`].
///
/// For each axis the larger of the signed center displacement and its
/// negation is reduced by the combined half-extents. On an overlapping axis
/// this is minus the penetration depth, so the largest candidate marks the
/// shallowest penetration.
pub fn entry_candidates(a: &Aabb, b: &Aabb) -> [f32; 3] {
    let (ha, hb) = (a.half_extents(), b.half_extents());
    Axis::ALL.map(|axis| {
        let d = b.center().get(axis) - a.center().get(axis);
        d.max(-d) - (ha.get(axis) + hb.get(axis))
    })
}

/// Axis with the largest entry candidate; ties keep x, then y, then z.
///
/// This is a per-axis approximation of the minimum translation vector and can
/// pick a visually wrong axis on near-diagonal approaches.
pub fn entry_axis(a: &Aabb, b: &Aabb) -> Axis {
    let candidates = entry_candidates(a, b);
    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if candidates[axis.index()] > candidates[best.index()] {
            best = axis;
        }
    }
    best
}

/// Exact 1-D distance that moves `a` clear of `b` along `axis`.
///
/// When `b` lies on the positive side of `a` the result is `b.min - a.max`
/// (negative), otherwise `b.max - a.min` (positive).
pub fn separation_along(a: &Aabb, b: &Aabb, axis: Axis) -> f32 {
    if b.center().get(axis) > a.center().get(axis) {
        b.min().get(axis) - a.max().get(axis)
    } else {
        b.max().get(axis) - a.min().get(axis)
    }
}

/// Separates `a` from `b` along `axis` and zeroes that velocity component.
///
/// Assumes the boxes overlap; the result is meaningless otherwise.
pub fn resolve_along(a: &Aabb, b: &Aabb, axis: Axis, velocity: Vec3) -> Contact {
    let depth = separation_along(a, b, axis);
    Contact {
        axis,
        depth,
        correction: Vec3::along(axis, depth),
        velocity: velocity.with(axis, 0.0),
        grounded: axis.is_vertical(),
    }
}

/// Resolves an overlapping pair along its [`entry_axis`].
///
/// Assumes the boxes overlap (run [`crate::overlaps`] first).
pub fn resolve_discrete(a: &Aabb, b: &Aabb, velocity: Vec3) -> Contact {
    resolve_along(a, b, entry_axis(a, b), velocity)
}

/// Discrete resolver with an optional step guard.
///
/// With the guard set to `h`, a side (x/z) resolution is skipped whenever the
/// bottom of `a` is within `h` of the top of `b`, i.e. `b` is beneath `a`.
/// The pair is then separated vertically instead, so platform edges do not
/// shove a body sideways while it stands on them.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DiscreteResolver {
    step_guard: Option<f32>,
}

impl DiscreteResolver {
    /// Resolver without a step guard.
    pub const fn new() -> Self {
        Self { step_guard: None }
    }

    /// Enables the step guard with tolerance `height`.
    pub const fn with_step_guard(self, height: f32) -> Self {
        Self {
            step_guard: Some(height),
        }
    }

    /// Configured step guard tolerance.
    pub const fn step_guard(&self) -> Option<f32> {
        self.step_guard
    }

    /// Axis this resolver separates `a` and `b` along.
    pub fn choose_axis(&self, a: &Aabb, b: &Aabb) -> Axis {
        let axis = entry_axis(a, b);
        match self.step_guard {
            Some(step) if !axis.is_vertical() && a.min().y() >= b.max().y() - step => Axis::Y,
            _ => axis,
        }
    }

    /// Resolves `a` against `b`; `None` when the boxes do not overlap.
    pub fn resolve(&self, a: &Aabb, b: &Aabb, velocity: Vec3) -> Option<Contact> {
        if !overlaps(a, b) {
            return None;
        }
        Some(resolve_along(a, b, self.choose_axis(a, b), velocity))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn boxed(min: [f32; 3], max: [f32; 3]) -> Aabb {
        Aabb::new(min.into(), max.into()).expect("ordered corners")
    }

    #[test]
    fn landing_resolves_upward_and_grounds() {
        let player = boxed([0.0, 0.9, 0.0], [1.0, 1.9, 1.0]);
        let floor = boxed([-5.0, 0.0, -5.0], [5.0, 1.0, 5.0]);
        let c = resolve_discrete(&player, &floor, Vec3::new(1.0, -3.0, 2.0));
        assert_eq!(c.axis, Axis::Y);
        assert!((c.depth - 0.1).abs() < 1e-6);
        assert_eq!(c.velocity.to_array(), [1.0, 0.0, 2.0]);
        assert!(c.grounded);
    }

    #[test]
    fn wall_resolves_sideways_without_grounding() {
        let player = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let wall = boxed([0.8, -3.0, -3.0], [1.8, 3.0, 3.0]);
        let c = resolve_discrete(&player, &wall, Vec3::new(4.0, -1.0, 0.0));
        assert_eq!(c.axis, Axis::X);
        assert!((c.depth + 0.2).abs() < 1e-6);
        assert_eq!(c.correction.to_array(), [c.depth, 0.0, 0.0]);
        assert_eq!(c.velocity.to_array(), [0.0, -1.0, 0.0]);
        assert!(!c.grounded);
    }

    #[test]
    fn ties_prefer_x_then_y() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([0.5, 0.5, 0.5], [1.5, 1.5, 1.5]);
        assert_eq!(entry_axis(&a, &b), Axis::X);
        let b = boxed([0.0, 0.5, 0.5], [1.0, 1.5, 1.5]);
        assert_eq!(entry_axis(&a, &b), Axis::Y);
    }

    #[test]
    fn step_guard_turns_edge_contact_into_standing_contact() {
        // Player sunk 0.2 into a ledge but only 0.1 past its edge.
        let player = boxed([4.9, 0.8, 0.0], [5.9, 1.8, 1.0]);
        let ledge = boxed([-5.0, 0.0, -5.0], [5.0, 1.0, 5.0]);
        assert_eq!(entry_axis(&player, &ledge), Axis::X);

        let guarded = DiscreteResolver::new().with_step_guard(0.25);
        let c = guarded
            .resolve(&player, &ledge, Vec3::new(0.0, -1.0, 0.0))
            .expect("boxes overlap");
        assert_eq!(c.axis, Axis::Y);
        assert!(c.depth > 0.0);

        let plain = DiscreteResolver::new();
        let c = plain
            .resolve(&player, &ledge, Vec3::ZERO)
            .expect("boxes overlap");
        assert_eq!(c.axis, Axis::X);
    }

    #[test]
    fn resolver_ignores_separate_boxes() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([1.0, 0.0, 0.0], [2.0, 1.0, 1.0]);
        assert_eq!(DiscreteResolver::new().resolve(&a, &b, Vec3::ONE), None);
    }
}
