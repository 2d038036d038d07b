// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{Mat4, Vec3};

use crate::types::aabb::{bound_transformed, Aabb};
use crate::types::transform::Transform;
use crate::GeomError;

/// Model-space bounding box stored as its eight corners.
///
/// Built once from a mesh's local vertex positions and reused every frame to
/// rebuild the owner's world-space [`Aabb`]. Meshes are static per object
/// type, so the corners never change after construction.
///
/// Corner `i` takes the max on X when bit 2 is set, on Y when bit 1 is set,
/// and on Z when bit 0 is set; corner 0 is the min corner and corner 7 the
/// max corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    corners: [Vec3; 8],
}

impl BoundingBox {
    /// Builds the box spanning the componentwise min and max of `vertices`.
    ///
    /// Every vertex is visited exactly once and the result does not depend on
    /// vertex order. An empty slice or a non-finite vertex is an error.
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = vertices.split_first().ok_or(GeomError::EmptyVertices)?;
        if !first.is_finite() {
            return Err(GeomError::NonFiniteVertex { index: 0 });
        }
        let mut min = *first;
        let mut max = *first;
        for (offset, v) in rest.iter().enumerate() {
            if !v.is_finite() {
                return Err(GeomError::NonFiniteVertex { index: offset + 1 });
            }
            min = min.min(v);
            max = max.max(v);
        }
        Ok(Self::from_min_max(min, max))
    }

    /// Builds the eight corners of a local-space box.
    pub fn from_aabb(local: &Aabb) -> Self {
        Self::from_min_max(local.min(), local.max())
    }

    fn from_min_max(min: Vec3, max: Vec3) -> Self {
        let pick = |bit: bool, lo: f32, hi: f32| if bit { hi } else { lo };
        let corners = core::array::from_fn(|i| {
            Vec3::new(
                pick(i & 0b100 != 0, min.x(), max.x()),
                pick(i & 0b010 != 0, min.y(), max.y()),
                pick(i & 0b001 != 0, min.z(), max.z()),
            )
        });
        Self { corners }
    }

    /// The eight model-space corners.
    pub const fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Model-space minimum corner.
    pub const fn min(&self) -> Vec3 {
        self.corners[0]
    }

    /// Model-space maximum corner.
    pub const fn max(&self) -> Vec3 {
        self.corners[7]
    }

    /// Rebuilds the world-space box under `transform`.
    ///
    /// Each corner is transformed and the componentwise extrema of the eight
    /// results become the new min/max. The center is the midpoint of those
    /// extrema, not the transformed model origin; under rotation this is the
    /// center of the axis-aligned re-bound.
    pub fn world_box(&self, transform: &Transform) -> Result<Aabb, GeomError> {
        if !transform.is_finite() {
            return Err(GeomError::NonFiniteTransform);
        }
        self.world_box_with(&transform.to_mat4())
    }

    /// Same as [`BoundingBox::world_box`] for a prebuilt model matrix.
    pub fn world_box_with(&self, model: &Mat4) -> Result<Aabb, GeomError> {
        bound_transformed(&self.corners, model)
    }
}
