// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted preferences for Ledge front ends (physics tuning + resolver choice).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which [`GamePrefs`] are stored.
pub const PREFS_KEY: &str = "prefs";

/// Saved preferences for a Ledge session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GamePrefs {
    /// Player movement and collision tuning.
    pub physics: PhysicsPrefs,
}

/// Which collision resolver moves the player each frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Integrate, then push out of every overlapping obstacle.
    #[default]
    Discrete,
    /// Stop at the earliest time of impact and slide along the struck face.
    Swept,
}

impl ResolverMode {
    /// Lowercase name used in JSON and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Swept => "swept",
        }
    }
}

impl core::fmt::Display for ResolverMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ResolverMode {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discrete" => Ok(Self::Discrete),
            "swept" => Ok(Self::Swept),
            other => Err(PrefsError::UnknownResolver(other.to_owned())),
        }
    }
}

/// Player physics parameters. Units are world units and seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsPrefs {
    /// Downward acceleration applied to the player's vertical velocity.
    pub gravity: f32,
    /// Horizontal speed at full forward/strafe input.
    pub move_speed: f32,
    /// Yaw rate (radians per second) at full turn input.
    pub turn_speed: f32,
    /// Vertical velocity set by a jump from the ground.
    pub jump_velocity: f32,
    /// Falling below this height respawns the player.
    pub respawn_height: f32,
    /// Length of one simulation step.
    pub fixed_dt: f32,
    /// Collision resolver used for the player.
    pub resolver: ResolverMode,
    /// Tolerance under which side contacts with an obstacle beneath the
    /// player are resolved vertically. `None` disables the guard.
    ///
    /// Only discrete resolution reads it, including the residual pass of
    /// [`ResolverMode::Swept`]. A sweep stops at a kerb's side face instead
    /// of stepping onto it.
    pub step_guard: Option<f32>,
    /// Upper bound on slide passes per frame for the swept resolver.
    pub max_slide_iterations: u32,
}

impl Default for PhysicsPrefs {
    fn default() -> Self {
        Self {
            gravity: 4.0,
            move_speed: 4.0,
            turn_speed: 1.5,
            jump_velocity: 5.0,
            respawn_height: 0.0,
            fixed_dt: 1.0 / 60.0,
            resolver: ResolverMode::Discrete,
            step_guard: Some(0.25),
            max_slide_iterations: 3,
        }
    }
}

/// Rejected preference values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrefsError {
    /// A field that must be finite is NaN or infinite.
    #[error("{field} must be finite (got {value})")]
    NonFinite {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A field is outside its allowed range.
    #[error("{field} must be {rule} (got {value})")]
    OutOfRange {
        /// Offending field name.
        field: &'static str,
        /// Human-readable constraint.
        rule: &'static str,
        /// Offending value.
        value: f32,
    },
    /// Resolver name is neither `discrete` nor `swept`.
    #[error("unknown resolver {0:?} (expected \"discrete\" or \"swept\")")]
    UnknownResolver(String),
}

impl PhysicsPrefs {
    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<(), PrefsError> {
        let finite = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("turn_speed", self.turn_speed),
            ("jump_velocity", self.jump_velocity),
            ("respawn_height", self.respawn_height),
            ("fixed_dt", self.fixed_dt),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(PrefsError::NonFinite { field, value });
            }
        }
        let non_negative = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("turn_speed", self.turn_speed),
            ("jump_velocity", self.jump_velocity),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(PrefsError::OutOfRange {
                    field,
                    rule: ">= 0",
                    value,
                });
            }
        }
        if self.fixed_dt <= 0.0 {
            return Err(PrefsError::OutOfRange {
                field: "fixed_dt",
                rule: "> 0",
                value: self.fixed_dt,
            });
        }
        if let Some(step) = self.step_guard {
            if !step.is_finite() {
                return Err(PrefsError::NonFinite {
                    field: "step_guard",
                    value: step,
                });
            }
            if step < 0.0 {
                return Err(PrefsError::OutOfRange {
                    field: "step_guard",
                    rule: ">= 0",
                    value: step,
                });
            }
        }
        if self.max_slide_iterations == 0 {
            return Err(PrefsError::OutOfRange {
                field: "max_slide_iterations",
                rule: ">= 1",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PhysicsPrefs::default().validate(), Ok(()));
    }

    #[test]
    fn validate_names_the_offending_field() {
        let prefs = PhysicsPrefs {
            fixed_dt: 0.0,
            ..PhysicsPrefs::default()
        };
        assert!(matches!(
            prefs.validate(),
            Err(PrefsError::OutOfRange { field: "fixed_dt", .. })
        ));

        let prefs = PhysicsPrefs {
            gravity: f32::NAN,
            ..PhysicsPrefs::default()
        };
        assert!(matches!(
            prefs.validate(),
            Err(PrefsError::NonFinite { field: "gravity", .. })
        ));

        let prefs = PhysicsPrefs {
            step_guard: Some(-0.1),
            ..PhysicsPrefs::default()
        };
        assert!(matches!(
            prefs.validate(),
            Err(PrefsError::OutOfRange { field: "step_guard", .. })
        ));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let prefs: GamePrefs =
            serde_json::from_str(r#"{"physics":{"gravity":9.5,"resolver":"swept"}}"#)
                .expect("valid json");
        assert_eq!(prefs.physics.gravity, 9.5);
        assert_eq!(prefs.physics.resolver, ResolverMode::Swept);
        assert_eq!(prefs.physics.move_speed, 4.0);
        assert_eq!(prefs.physics.step_guard, Some(0.25));
    }

    #[test]
    fn resolver_names_parse_case_insensitively() {
        assert_eq!("Swept".parse::<ResolverMode>(), Ok(ResolverMode::Swept));
        assert_eq!(ResolverMode::Discrete.to_string(), "discrete");
        assert!(matches!(
            "teleport".parse::<ResolverMode>(),
            Err(PrefsError::UnknownResolver(_))
        ));
    }
}
