// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-bounded horizontal offset animations.
//!
//! An [`Animation`] is plain data: where it starts, where it ends, when it
//! started and how long it runs. [`Animation::sample`] is a pure function of
//! the animation and the current time, so render code never carries hidden
//! timer state. [`crate::MotionSurface`] owns at most one animation at a time
//! and applies one sample per frame.

use crate::Easing;

/// Identifies one started animation on a [`crate::MotionSurface`].
///
/// Ids increase monotonically per surface, so a finished id can be matched
/// against the id returned when the animation was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// A described horizontal motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Offset at `start_ms`.
    pub from: f64,
    /// Offset written exactly once the duration has elapsed.
    pub to: f64,
    /// Monotonic start time in milliseconds.
    pub start_ms: u64,
    /// Duration in milliseconds. Zero completes on the first sample.
    pub duration_ms: u64,
    /// Curve applied to the elapsed fraction.
    pub easing: Easing,
}

/// Result of sampling an [`Animation`] at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Interpolated offset, or exactly [`Animation::to`] once done.
    pub offset_x: f64,
    /// `true` once the duration has elapsed.
    pub is_done: bool,
}

impl Animation {
    /// Creates an animation from `from` to `to` starting at `start_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Returns the monotonic time at which the animation completes.
    #[must_use]
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    /// Samples the animation at `now_ms`.
    ///
    /// Times before `start_ms` sample the start offset. Once the duration has
    /// elapsed the exact target is returned instead of the interpolated value,
    /// so rounding can never leave the panel off its resting position.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> Sample {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return Sample {
                offset_x: self.to,
                is_done: true,
            };
        }
        let fraction = elapsed as f64 / self.duration_ms as f64;
        let eased = self.easing.apply(fraction);
        Sample {
            offset_x: self.from + (self.to - self.from) * eased,
            is_done: false,
        }
    }
}
