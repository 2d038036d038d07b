// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::time::{Duration, Instant};

/// Wall-clock frame timer.
///
/// [`FrameClock::mark`] returns the time since the previous mark and starts a
/// new interval; [`FrameClock::peek`] reads the running interval without
/// resetting it.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    /// Starts a clock at the current instant.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous mark; starts a new interval.
    pub fn mark(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }

    /// Seconds since the previous mark, leaving it in place.
    pub fn peek(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Running interval as a [`Duration`].
    pub fn elapsed(&self) -> Duration {
        self.last.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
