// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// World axis selector.
///
/// `Axis::ALL` fixes the iteration order (x, then y, then z); collision
/// heuristics rely on it to break ties deterministically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis (up is `+Y`).
    Y,
    /// Depth axis.
    Z,
}

impl Axis {
    /// All axes in tie-break order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of the axis (`0`, `1`, or `2`).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Returns `true` for the vertical axis.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Y)
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
