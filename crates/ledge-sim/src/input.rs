// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use ledge_math::clamp;

/// Player input sampled once per frame.
///
/// Axes are in `[-1, 1]`; out-of-range values are clamped on construction.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct InputSnapshot {
    /// Forward (+) / backward (-) along the player's facing.
    pub forward: f32,
    /// Right (+) / left (-) perpendicular to the facing.
    pub strafe: f32,
    /// Yaw input; positive turns clockwise seen from above.
    pub turn: f32,
    /// Jump held this frame.
    pub jump: bool,
}

impl InputSnapshot {
    /// No input.
    pub const IDLE: Self = Self {
        forward: 0.0,
        strafe: 0.0,
        turn: 0.0,
        jump: false,
    };

    /// Builds a snapshot, clamping each axis to `[-1, 1]`.
    ///
    /// Non-finite axes read as zero.
    pub fn new(forward: f32, strafe: f32, turn: f32, jump: bool) -> Self {
        let axis = |v: f32| if v.is_finite() { clamp(v, -1.0, 1.0) } else { 0.0 };
        Self {
            forward: axis(forward),
            strafe: axis(strafe),
            turn: axis(turn),
            jump,
        }
    }
}

/// Per-frame application context handed to [`crate::World::step`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AppContext {
    /// Input for this frame.
    pub input: InputSnapshot,
    /// Index of the frame being simulated.
    pub frame: u64,
}

impl AppContext {
    /// Context for `frame` with the given input.
    pub const fn new(frame: u64, input: InputSnapshot) -> Self {
        Self { input, frame }
    }
}
