// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Quat, Vec3};

/// Affine 4×4 matrix stored as four columns.
///
/// The first three columns are the images of the basis vectors, the last one
/// holds the translation. Points are transformed with `w = 1`, directions
/// with `w = 0`; no perspective divide is ever performed.
///
/// # Examples
/// ```
/// use ledge_math::{Mat4, Vec3};
/// let lift = Mat4::translation(0.0, 2.0, 0.0);
/// let p = Vec3::new(1.0, 1.0, -1.0);
/// assert_eq!(lift.transform_point(&p).to_array(), [1.0, 3.0, -1.0]);
/// assert_eq!(lift.transform_direction(&p).to_array(), [1.0, 1.0, -1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self =
        Self::from_basis(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z, Vec3::ZERO);

    /// Returns [`Mat4::IDENTITY`].
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from raw columns.
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Affine matrix mapping the unit axes to `x`, `y`, `z` and the origin to
    /// `translation`.
    pub const fn from_basis(x: Vec3, y: Vec3, z: Vec3, translation: Vec3) -> Self {
        Self {
            cols: [
                [x.x(), x.y(), x.z(), 0.0],
                [y.x(), y.y(), y.z(), 0.0],
                [z.x(), z.y(), z.z(), 0.0],
                [translation.x(), translation.y(), translation.z(), 1.0],
            ],
        }
    }

    /// Translation by `(tx, ty, tz)`.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::from_basis(
            Vec3::UNIT_X,
            Vec3::UNIT_Y,
            Vec3::UNIT_Z,
            Vec3::new(tx, ty, tz),
        )
    }

    /// Non-uniform scale.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_basis(
            Vec3::new(sx, 0.0, 0.0),
            Vec3::new(0.0, sy, 0.0),
            Vec3::new(0.0, 0.0, sz),
            Vec3::ZERO,
        )
    }

    /// Right-handed rotation about +X by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_basis(
            Vec3::UNIT_X,
            Vec3::new(0.0, c, s),
            Vec3::new(0.0, -s, c),
            Vec3::ZERO,
        )
    }

    /// Right-handed rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_basis(
            Vec3::new(c, 0.0, -s),
            Vec3::UNIT_Y,
            Vec3::new(s, 0.0, c),
            Vec3::ZERO,
        )
    }

    /// Right-handed rotation about +Z by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_basis(
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::UNIT_Z,
            Vec3::ZERO,
        )
    }

    /// Rotation matrix of `q`.
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Rotation from Euler angles in radians: `R_y(yaw) * R_x(pitch) * R_z(roll)`.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use ledge_math::{Mat4, Vec3};
    /// // A quarter yaw turns +Z into +X.
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_y(yaw) * Self::rotation_x(pitch) * Self::rotation_z(roll)
    }

    /// Columns of the matrix.
    pub const fn cols(&self) -> [[f32; 4]; 4] {
        self.cols
    }

    /// Entries in column-major order.
    pub fn to_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (chunk, col) in out.chunks_exact_mut(4).zip(self.cols) {
            chunk.copy_from_slice(&col);
        }
        out
    }

    /// Returns `true` when all sixteen entries are finite.
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }

    /// `self * v` for a homogeneous column vector.
    fn apply(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (col, weight) in self.cols.iter().zip(v) {
            for (o, c) in out.iter_mut().zip(col) {
                *o += c * weight;
            }
        }
        out
    }

    /// Matrix product `self * rhs`; `rhs` applies first.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self {
            cols: rhs.cols.map(|col| self.apply(col)),
        }
    }

    /// Transforms a point (`w = 1`).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, _] = self.apply([point.x(), point.y(), point.z(), 1.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z, _] = self.apply([direction.x(), direction.y(), direction.z(), 0.0]);
        Vec3::new(x, y, z)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
