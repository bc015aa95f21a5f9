// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal velocity estimation over a short trailing window.
//!
//! The tracker keeps a small ring of `(time, position)` samples and reports
//! the average velocity across the samples no older than [`HORIZON_MS`]
//! relative to the newest one. The elapsed time is never taken as less than
//! [`MIN_WINDOW_MS`], so two samples with the same timestamp produce a finite
//! result instead of dividing by zero.
//!
//! Units are pixels per millisecond.

/// Number of samples retained.
const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest sample, are ignored.
pub const HORIZON_MS: u64 = 100;

/// Smallest time window velocity is computed over.
pub const MIN_WINDOW_MS: u64 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Point1D {
    time_ms: u64,
    position: f64,
}

/// Ring-buffer velocity tracker for one axis.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: [Option<Point1D>; HISTORY_SIZE],
    index: usize,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `position` at `time_ms`.
    pub fn add(&mut self, time_ms: u64, position: f64) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Point1D { time_ms, position });
    }

    /// Average velocity over the trailing window, in pixels per millisecond.
    ///
    /// Returns `0.0` with fewer than two samples in the window.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut oldest = newest;
        let mut count = 1;
        let mut cursor = self.index;
        for _ in 1..HISTORY_SIZE {
            cursor = if cursor == 0 {
                HISTORY_SIZE - 1
            } else {
                cursor - 1
            };
            let Some(sample) = self.samples[cursor] else {
                break;
            };
            if sample.time_ms > newest.time_ms
                || newest.time_ms - sample.time_ms > HORIZON_MS
            {
                break;
            }
            oldest = sample;
            count += 1;
        }

        if count < 2 {
            return 0.0;
        }
        let window = (newest.time_ms - oldest.time_ms).max(MIN_WINDOW_MS);
        (newest.position - oldest.position) / window as f64
    }

    /// Clears all samples.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
