// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::{Mat4, Quat, Vec3};

/// Rigid transform with non-uniform scale placing a model in the world.
///
/// Conventions:
/// - `translation` in world units.
/// - `rotation` as a unit quaternion (normalized internally when converting).
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// `to_mat4` constructs `M = T * R * S` with `f32` ops; no FMA, so results
/// are stable across targets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation with identity rotation and unit scale.
    pub const fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity(), Vec3::ONE)
    }

    /// Translation component.
    pub const fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Copy with the translation replaced.
    pub const fn with_translation(&self, translation: Vec3) -> Self {
        Self::new(translation, self.rotation, self.scale)
    }

    /// Copy with the rotation replaced.
    pub const fn with_rotation(&self, rotation: Quat) -> Self {
        Self::new(self.translation, rotation, self.scale)
    }

    /// Copy with the scale replaced.
    pub const fn with_scale(&self, scale: Vec3) -> Self {
        Self::new(self.translation, self.rotation, scale)
    }

    /// Copy moved by `delta`.
    pub fn translated(&self, delta: Vec3) -> Self {
        self.with_translation(self.translation.add(&delta))
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    pub fn to_mat4(&self) -> Mat4 {
        // M = T * R * S (column-major)
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        let s = Mat4::scale(sx, sy, sz);
        let r = self.rotation.to_mat4();
        let t = Mat4::translation(tx, ty, tz);
        t.multiply(&r).multiply(&s)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
