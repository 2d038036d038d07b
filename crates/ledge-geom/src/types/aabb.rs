// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{Axis, Mat4, Vec3};

use crate::GeomError;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - All corners are finite.
/// - `center` is always `(min + max) / 2`; it is stored because the discrete
///   resolver reads it for every pair, every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
    center: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeomError::NonFiniteBounds {
                min: min.to_array(),
                max: max.to_array(),
            });
        }
        if Axis::ALL.iter().any(|a| min.get(*a) > max.get(*a)) {
            return Err(GeomError::InvertedBox {
                min: min.to_array(),
                max: max.to_array(),
            });
        }
        Ok(Self::from_ordered(min, max))
    }

    /// Builds a box from corners the caller has already ordered.
    pub(crate) fn from_ordered(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            center: min.add(&max).scale(0.5),
        }
    }

    /// Builds an AABB centered at `center` with the given half-extents.
    ///
    /// Negative half-extents are folded to their absolute value.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let he = half_extents.abs();
        Self::from_ordered(center.sub(&he), center.add(&he))
    }

    /// Builds the minimal AABB that contains all `points`.
    pub fn from_points(points: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyVertices)?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Self::new(min, max)
    }

    /// Returns the minimum corner.
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Midpoint of the min and max corners.
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Width, height, and depth (`max - min`).
    pub fn extents(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Half of [`Aabb::extents`].
    pub fn half_extents(&self) -> Vec3 {
        self.extents().scale(0.5)
    }

    /// Width along X.
    pub fn width(&self) -> f32 {
        self.max.x() - self.min.x()
    }

    /// Height along Y.
    pub fn height(&self) -> f32 {
        self.max.y() - self.min.y()
    }

    /// Depth along Z.
    pub fn depth(&self) -> f32 {
        self.max.z() - self.min.z()
    }

    /// Returns `true` if this AABB strictly overlaps another.
    ///
    /// See [`crate::overlaps`]; boxes sharing only a face do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        crate::overlaps(self, other)
    }

    /// Returns the box moved by `delta`.
    pub fn translated(&self, delta: Vec3) -> Self {
        Self::from_ordered(self.min.add(&delta), self.max.add(&delta))
    }

    /// Returns the union of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ordered(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self::from_ordered(self.min.sub(&delta), self.max.add(&delta))
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// This evaluates the eight corners under the affine transform and builds
    /// a new axis-aligned box containing them.
    pub fn transformed(&self, mat: &Mat4) -> Result<Self, GeomError> {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ];
        bound_transformed(&corners, mat)
    }
}

/// Transforms `corners` by `mat` and takes componentwise extrema.
pub(crate) fn bound_transformed(corners: &[Vec3; 8], mat: &Mat4) -> Result<Aabb, GeomError> {
    if !mat.is_finite() {
        return Err(GeomError::NonFiniteTransform);
    }
    let mut min = mat.transform_point(&corners[0]);
    let mut max = min;
    for c in &corners[1..] {
        let p = mat.transform_point(c);
        min = min.min(&p);
        max = max.max(&p);
    }
    // A finite matrix can still overflow on huge coordinates.
    Aabb::new(min, max).map_err(|_| GeomError::NonFiniteTransform)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_and_non_finite_corners() {
        let err = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
        assert!(matches!(err, Err(GeomError::InvertedBox { .. })));
        let err = Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
        assert!(matches!(err, Err(GeomError::NonFiniteBounds { .. })));
    }

    #[test]
    fn derived_fields_follow_corners() {
        let b = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 2.0, 3.0))
            .expect("valid corners");
        assert_eq!(b.center().to_array(), [1.0, 1.0, 2.5]);
        assert_eq!(b.extents().to_array(), [4.0, 2.0, 1.0]);
        assert_eq!((b.width(), b.height(), b.depth()), (4.0, 2.0, 1.0));
    }

    #[test]
    fn from_points_requires_input() {
        assert_eq!(Aabb::from_points(&[]), Err(GeomError::EmptyVertices));
        let pts = [Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 4.0, 0.5)];
        let b = Aabb::from_points(&pts).expect("non-empty input");
        assert_eq!(b.min().to_array(), [-1.0, -2.0, 0.0]);
        assert_eq!(b.max().to_array(), [1.0, 4.0, 0.5]);
    }

    #[test]
    fn transformed_rejects_nan_matrix() {
        let b = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let bad = Mat4::translation(f32::NAN, 0.0, 0.0);
        assert_eq!(b.transformed(&bad), Err(GeomError::NonFiniteTransform));
    }
}
