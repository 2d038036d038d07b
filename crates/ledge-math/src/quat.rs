// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Mat4, Vec3};

/// Rotation quaternion: vector part `(x, y, z)` and scalar part `w`.
///
/// Angles are in radians. [`Quat::to_mat4`] normalises first, so slightly
/// drifted inputs still yield a proper rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    v: Vec3,
    w: f32,
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            v: Vec3::new(x, y, z),
            w,
        }
    }

    /// Returns [`Quat::IDENTITY`].
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [f32; 4] {
        [self.v.x(), self.v.y(), self.v.z(), self.w]
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// A (near) zero axis yields the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        if axis.is_zero() {
            return Self::IDENTITY;
        }
        let (s, c) = (angle * 0.5).sin_cos();
        Self {
            v: axis.scale(s),
            w: c,
        }
    }

    /// Rotation about +Y; zero yaw faces +Z and a quarter turn faces +X.
    pub fn from_yaw(yaw: f32) -> Self {
        Self::from_axis_angle(Vec3::UNIT_Y, yaw)
    }

    /// Euler rotation `R_y(yaw) * R_x(pitch) * R_z(roll)`, matching
    /// [`Mat4::rotation_from_euler`].
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::from_axis_angle(Vec3::UNIT_Y, yaw)
            * Self::from_axis_angle(Vec3::UNIT_X, pitch)
            * Self::from_axis_angle(Vec3::UNIT_Z, roll)
    }

    /// Hamilton product `self * other`; `other` rotates first.
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            v: other
                .v
                .scale(self.w)
                .add(&self.v.scale(other.w))
                .add(&self.v.cross(&other.v)),
            w: self.w * other.w - self.v.dot(&other.v),
        }
    }

    /// Unit-length copy; identity when the norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = (self.v.length_squared() + self.w * self.w).sqrt();
        if len <= crate::EPSILON {
            return Self::IDENTITY;
        }
        let inv = 1.0 / len;
        Self {
            v: self.v.scale(inv),
            w: self.w * inv,
        }
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.v.is_finite() && self.w.is_finite()
    }

    /// Rotates `p` by this quaternion, which must be unit length.
    pub fn rotate(&self, p: Vec3) -> Vec3 {
        let t = self.v.cross(&p).scale(2.0);
        p.add(&t.scale(self.w)).add(&self.v.cross(&t))
    }

    /// Rotation matrix of the normalised quaternion.
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        Mat4::from_basis(
            q.rotate(Vec3::UNIT_X),
            q.rotate(Vec3::UNIT_Y),
            q.rotate(Vec3::UNIT_Z),
            Vec3::ZERO,
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Quat {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
