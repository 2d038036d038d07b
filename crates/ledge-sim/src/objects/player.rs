// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::Arc;

use ledge_app_core::prefs::PhysicsPrefs;
use ledge_geom::{BoundingBox, GeomError, Transform};
use ledge_math::{Axis, Quat, Vec3};

use crate::body::{Body, Spatial};
use crate::input::InputSnapshot;
use crate::objects::{ObjectId, ObjectKind};

/// The player-controlled body.
///
/// Horizontal velocity is set from input every frame; vertical velocity
/// accumulates gravity until a collision zeroes it.
#[derive(Debug, Clone)]
pub struct Player {
    spatial: Spatial,
    velocity: Vec3,
    yaw: f32,
    grounded: bool,
    spawn: Vec3,
    spawn_yaw: f32,
    tuning: PhysicsPrefs,
}

impl Player {
    /// Places a player of `size` at `spawn`, facing `spawn_yaw`.
    pub fn new(
        model: Arc<BoundingBox>,
        spawn: Vec3,
        spawn_yaw: f32,
        size: Vec3,
        tuning: PhysicsPrefs,
    ) -> Result<Self, GeomError> {
        let transform = Transform::new(spawn, Quat::from_yaw(spawn_yaw), size);
        Ok(Self {
            spatial: Spatial::new(model, transform)?,
            velocity: Vec3::ZERO,
            yaw: spawn_yaw,
            grounded: false,
            spawn,
            spawn_yaw,
            tuning,
        })
    }

    /// Current position.
    pub const fn position(&self) -> Vec3 {
        self.spatial.position()
    }

    /// Current velocity.
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Overrides the velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Facing angle around +Y in radians; zero faces +Z.
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Whether the player stood on something at the end of the last move.
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub(crate) fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    /// Respawn position.
    pub const fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Physics parameters the player moves with.
    pub const fn tuning(&self) -> &PhysicsPrefs {
        &self.tuning
    }

    /// Maps input to yaw and velocity, and starts a jump when grounded.
    pub fn apply_input(&mut self, input: &InputSnapshot, dt: f32) {
        let t = &self.tuning;
        self.yaw += input.turn * t.turn_speed * dt;
        let (sin, cos) = self.yaw.sin_cos();
        let (f, s) = (input.forward * t.move_speed, input.strafe * t.move_speed);
        self.velocity = Vec3::new(sin * f + cos * s, self.velocity.y(), cos * f - sin * s);
        if input.jump && self.grounded {
            self.velocity = self.velocity.with(Axis::Y, t.jump_velocity);
            self.grounded = false;
        }
        let transform = self.spatial.transform().with_rotation(Quat::from_yaw(self.yaw));
        self.spatial.set_transform(transform);
    }

    /// Returns to the spawn point at rest.
    pub fn respawn(&mut self) {
        self.velocity = Vec3::ZERO;
        self.yaw = self.spawn_yaw;
        self.grounded = false;
        let transform = self
            .spatial
            .transform()
            .with_translation(self.spawn)
            .with_rotation(Quat::from_yaw(self.spawn_yaw));
        self.spatial.set_transform(transform);
    }
}

impl Body for Player {
    fn id(&self) -> ObjectId {
        ObjectId::PLAYER
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Player
    }

    fn spatial(&self) -> &Spatial {
        &self.spatial
    }

    fn spatial_mut(&mut self) -> &mut Spatial {
        &mut self.spatial
    }

    /// Applies gravity to the vertical velocity.
    fn update(&mut self, dt: f32) {
        let vy = self.velocity.y() - self.tuning.gravity * dt;
        self.velocity = self.velocity.with(Axis::Y, vy);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f32::consts::FRAC_PI_2;

    fn player(yaw: f32) -> Player {
        let model = Arc::new(
            BoundingBox::from_vertices(ObjectKind::Player.mesh()).expect("player mesh"),
        );
        Player::new(model, Vec3::ZERO, yaw, Vec3::ONE, PhysicsPrefs::default())
            .expect("finite spawn")
    }

    #[test]
    fn forward_follows_yaw() {
        let mut p = player(0.0);
        p.apply_input(&InputSnapshot::new(1.0, 0.0, 0.0, false), 0.0);
        assert_abs_diff_eq!(p.velocity().z(), 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.velocity().x(), 0.0, epsilon = 1e-6);

        let mut p = player(FRAC_PI_2);
        p.apply_input(&InputSnapshot::new(1.0, 0.0, 0.0, false), 0.0);
        assert_abs_diff_eq!(p.velocity().x(), 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.velocity().z(), 0.0, epsilon = 1e-5);

        let mut p = player(0.0);
        p.apply_input(&InputSnapshot::new(0.0, 1.0, 0.0, false), 0.0);
        assert_abs_diff_eq!(p.velocity().x(), 4.0, epsilon = 1e-6);
    }

    #[test]
    fn turning_scales_with_turn_speed_and_dt() {
        let mut p = player(0.0);
        p.apply_input(&InputSnapshot::new(0.0, 0.0, 1.0, false), 0.5);
        assert_abs_diff_eq!(p.yaw(), 0.75, epsilon = 1e-6);
    }

    #[test]
    fn jump_requires_ground() {
        let mut p = player(0.0);
        let jump = InputSnapshot::new(0.0, 0.0, 0.0, true);
        p.apply_input(&jump, 0.1);
        assert_eq!(p.velocity().y(), 0.0);

        p.set_grounded(true);
        p.apply_input(&jump, 0.1);
        assert_eq!(p.velocity().y(), 5.0);
        assert!(!p.is_grounded());
    }

    #[test]
    fn gravity_accumulates_and_respawn_resets() {
        let mut p = player(0.3);
        p.update(0.5);
        p.update(0.5);
        assert_abs_diff_eq!(p.velocity().y(), -4.0, epsilon = 1e-6);
        p.spatial_mut().translate(Vec3::new(3.0, -10.0, 0.0));
        p.respawn();
        assert_eq!(p.position(), Vec3::ZERO);
        assert_eq!(p.velocity(), Vec3::ZERO);
        assert_eq!(p.yaw(), 0.3);
    }
}
