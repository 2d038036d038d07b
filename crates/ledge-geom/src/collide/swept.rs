// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{Axis, Vec3};

use crate::collide::overlap::overlaps_on;
use crate::{Aabb, GeomError};

/// Result of a swept test over one step.
///
/// `time_of_impact` is the fraction of the step's displacement at which the
/// boxes first touch. `1.0` with a zero normal means "no collision this step,
/// move the full distance". A hit exactly at `1.0` is still reported (with a
/// non-zero normal): contact happens at the final instant of the step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sweep {
    /// Fraction of the displacement in `[0, 1]`.
    pub time_of_impact: f32,
    /// Axis-aligned normal of the struck face of the obstacle, or zero.
    pub normal: Vec3,
}

impl Sweep {
    /// No collision within the step.
    pub const NONE: Self = Self {
        time_of_impact: 1.0,
        normal: Vec3::ZERO,
    };

    /// Returns `true` when the sweep found a collision.
    pub fn is_hit(&self) -> bool {
        !self.normal.is_zero()
    }

    /// Axis of the collision normal, if any.
    pub fn axis(&self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| self.normal.get(*axis) != 0.0)
    }
}

/// Per-axis distances and times computed by [`sweep`], indexed by
/// [`Axis::index`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisTimes {
    /// Gap the moving box must close before touching along each axis.
    pub entry_distance: [f32; 3],
    /// Distance after which the moving box has fully passed along each axis.
    pub exit_distance: [f32; 3],
    /// `entry_distance / v`, or `-inf` on a stationary axis.
    pub entry: [f32; 3],
    /// `exit_distance / v`, or `+inf` on a stationary axis.
    pub exit: [f32; 3],
}

/// Computes the per-axis entry/exit distances and times of `a` moving by
/// `displacement` towards stationary `b`.
///
/// When the displacement is positive on an axis the entry distance is
/// `b.min - a.max` and the exit distance `b.max - a.min`; otherwise the roles
/// of min and max are swapped. A zero component never divides: that axis
/// gets `-inf`/`+inf` so it cannot bound the collision window.
pub fn sweep_axis_times(a: &Aabb, b: &Aabb, displacement: Vec3) -> AxisTimes {
    let mut out = AxisTimes {
        entry_distance: [0.0; 3],
        exit_distance: [0.0; 3],
        entry: [f32::NEG_INFINITY; 3],
        exit: [f32::INFINITY; 3],
    };
    for axis in Axis::ALL {
        let i = axis.index();
        let v = displacement.get(axis);
        let (a_min, a_max) = (a.min().get(axis), a.max().get(axis));
        let (b_min, b_max) = (b.min().get(axis), b.max().get(axis));
        if v > 0.0 {
            out.entry_distance[i] = b_min - a_max;
            out.exit_distance[i] = b_max - a_min;
        } else {
            out.entry_distance[i] = b_max - a_min;
            out.exit_distance[i] = b_min - a_max;
        }
        if v != 0.0 {
            out.entry[i] = out.entry_distance[i] / v;
            out.exit[i] = out.exit_distance[i] / v;
        }
    }
    out
}

/// Swept AABB test of `a` moving by `displacement` against stationary `b`.
///
/// Returns [`Sweep::NONE`] when:
/// - the latest entry time is after the earliest exit time,
/// - every moving axis has a negative entry time (already past or inside),
/// - any axis has an entry time beyond `1.0`,
/// - the boxes are separated on an axis the body does not move along.
///
/// Otherwise the hit happens at the latest entry time (clamped to `>= 0`),
/// on the axis that produced it (first in x, y, z order on ties). The normal
/// points against the direction of travel on that axis.
///
/// A zero or non-finite displacement is a contract violation and yields
/// [`GeomError::DegenerateSweep`].
pub fn sweep(a: &Aabb, b: &Aabb, displacement: Vec3) -> Result<Sweep, GeomError> {
    if displacement.is_zero() || !displacement.is_finite() {
        return Err(GeomError::DegenerateSweep {
            displacement: displacement.to_array(),
        });
    }
    let times = sweep_axis_times(a, b, displacement);

    let mut moving = Axis::ALL
        .into_iter()
        .filter(|axis| displacement.get(*axis) != 0.0);
    let all_behind = moving.all(|axis| times.entry[axis.index()] < 0.0);
    let stationary_apart = Axis::ALL
        .into_iter()
        .any(|axis| displacement.get(axis) == 0.0 && !overlaps_on(a, b, axis));

    let mut hit_axis = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if times.entry[axis.index()] > times.entry[hit_axis.index()] {
            hit_axis = axis;
        }
    }
    let entry_time = times.entry[hit_axis.index()];
    let exit_time = times.exit.iter().copied().fold(f32::INFINITY, f32::min);
    let too_late = times.entry.iter().any(|t| *t > 1.0);

    if entry_time > exit_time || all_behind || too_late || stationary_apart {
        return Ok(Sweep::NONE);
    }

    let i = hit_axis.index();
    let v = displacement.get(hit_axis);
    // Face contact (zero gap) takes its side from the direction of travel.
    let sign = if times.entry_distance[i] < 0.0 || (times.entry_distance[i] <= 0.0 && v < 0.0) {
        1.0
    } else {
        -1.0
    };
    Ok(Sweep {
        time_of_impact: entry_time.max(0.0),
        normal: Vec3::along(hit_axis, sign),
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn boxed(min: [f32; 3], max: [f32; 3]) -> Aabb {
        Aabb::new(min.into(), max.into()).expect("ordered corners")
    }

    #[test]
    fn head_on_hit_reports_fraction_and_face() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([2.0, 0.0, 0.0], [3.0, 1.0, 1.0]);
        let s = sweep(&a, &b, Vec3::new(4.0, 0.0, 0.0)).expect("moving");
        assert_eq!(s.time_of_impact, 0.25);
        assert_eq!(s.normal.to_array(), [-1.0, 0.0, 0.0]);
        assert_eq!(s.axis(), Some(Axis::X));
    }

    #[test]
    fn falling_onto_floor_hits_top_face() {
        let a = boxed([0.0, 2.0, 0.0], [1.0, 3.0, 1.0]);
        let floor = boxed([-5.0, 0.0, -5.0], [5.0, 1.0, 5.0]);
        let s = sweep(&a, &floor, Vec3::new(0.0, -2.0, 0.0)).expect("moving");
        assert_eq!(s.time_of_impact, 0.5);
        assert_eq!(s.normal.to_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn resting_contact_is_an_immediate_hit() {
        let a = boxed([0.0, 1.0, 0.0], [1.0, 2.0, 1.0]);
        let floor = boxed([-5.0, 0.0, -5.0], [5.0, 1.0, 5.0]);
        let s = sweep(&a, &floor, Vec3::new(0.3, -0.1, 0.0)).expect("moving");
        assert_eq!(s.time_of_impact, 0.0);
        assert_eq!(s.normal.to_array(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn entry_exactly_at_one_is_a_hit_at_the_last_instant() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([3.0, 0.0, 0.0], [4.0, 1.0, 1.0]);
        let times = sweep_axis_times(&a, &b, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(times.entry[0], 1.0);
        assert_eq!(times.entry[1], f32::NEG_INFINITY);
        let s = sweep(&a, &b, Vec3::new(2.0, 0.0, 0.0)).expect("moving");
        assert_eq!(s.time_of_impact, 1.0);
        assert!(s.is_hit());
        assert_eq!(s.normal.to_array(), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn out_of_reach_and_receding_targets_miss() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let far = boxed([5.0, 0.0, 0.0], [6.0, 1.0, 1.0]);
        assert_eq!(sweep(&a, &far, Vec3::new(2.0, 0.0, 0.0)), Ok(Sweep::NONE));
        let behind = boxed([-3.0, 0.0, 0.0], [-2.0, 1.0, 1.0]);
        assert_eq!(sweep(&a, &behind, Vec3::new(2.0, 0.0, 0.0)), Ok(Sweep::NONE));
    }

    #[test]
    fn separated_on_a_stationary_axis_misses() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let above = boxed([2.0, 5.0, 0.0], [3.0, 6.0, 1.0]);
        assert_eq!(sweep(&a, &above, Vec3::new(4.0, 0.0, 0.0)), Ok(Sweep::NONE));
    }

    #[test]
    fn diagonal_motion_uses_latest_entry_axis() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([2.0, 1.5, -1.0], [4.0, 4.0, 2.0]);
        // x enters at 1/2 = 0.5, y enters at 0.5/2 = 0.25 -> x is the hit axis.
        let s = sweep(&a, &b, Vec3::new(2.0, 2.0, 0.0)).expect("moving");
        assert_eq!(s.time_of_impact, 0.5);
        assert_eq!(s.normal.to_array(), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_or_nan_displacement_is_rejected() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert!(matches!(
            sweep(&a, &a, Vec3::ZERO),
            Err(GeomError::DegenerateSweep { .. })
        ));
        assert!(matches!(
            sweep(&a, &a, Vec3::new(f32::NAN, 0.0, 0.0)),
            Err(GeomError::DegenerateSweep { .. })
        ));
    }
}
