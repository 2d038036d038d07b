// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::Axis;

use crate::Aabb;

/// Returns `true` iff `a` and `b` overlap on all three axes.
///
/// Per axis: `a.min < b.max && a.max > b.min`. The comparison is strict, so
/// two boxes sharing exactly one face are not overlapping. Symmetric in its
/// arguments.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    Axis::ALL.iter().all(|axis| overlaps_on(a, b, *axis))
}

/// Strict interval overlap of `a` and `b` projected onto `axis`.
pub(crate) fn overlaps_on(a: &Aabb, b: &Aabb, axis: Axis) -> bool {
    a.min().get(axis) < b.max().get(axis) && a.max().get(axis) > b.min().get(axis)
}
