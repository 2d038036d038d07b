// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Axis, EPSILON};

/// Three `f32` components in x, y, z order.
///
/// The same type carries positions, box extents and velocities. Whether a
/// value is a point or a direction only matters when it meets a matrix:
/// see [`crate::Mat4::transform_point`] and
/// [`crate::Mat4::transform_direction`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// `+X`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// `+Y`, the up axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// `+Z`, forward at zero yaw.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Vector `(x, y, z)`.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Unit vector along `axis` scaled by `value`.
    pub fn along(axis: Axis, value: f32) -> Self {
        Self::ZERO.with(axis, value)
    }

    /// `[x, y, z]`.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component along `axis`.
    pub const fn get(&self, axis: Axis) -> f32 {
        self.data[axis.index()]
    }

    /// Copy of `self` with the component along `axis` replaced by `value`.
    pub fn with(&self, axis: Axis, value: f32) -> Self {
        let mut data = self.data;
        data[axis.index()] = value;
        Self { data }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(f(ax, bx), f(ay, by), f(az, bz))
    }

    /// `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Every component multiplied by `factor`.
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            data: self.data.map(|c| c * factor),
        }
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip_with(other, f32::min)
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip_with(other, f32::max)
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self {
            data: self.data.map(f32::abs),
        }
    }

    /// Inner product, summed in x, y, z order.
    pub fn dot(&self, other: &Self) -> f32 {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        ax * bx + ay * by + az * bz
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// `self · self`.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit-length copy, or [`Vec3::ZERO`] when the length is at most
    /// [`EPSILON`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > EPSILON {
            self.scale(len.recip())
        } else {
            Self::ZERO
        }
    }

    /// Returns `true` when every component is finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Returns `true` when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }
}

/// Reads `[x, y, z]`.
///
/// ```
/// use ledge_math::{Axis, Vec3};
/// let v = Vec3::from([0.5, -2.0, 8.0]);
/// assert_eq!(v.get(Axis::Y), -2.0);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(data: [f32; 3]) -> Self {
        Self { data }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}
