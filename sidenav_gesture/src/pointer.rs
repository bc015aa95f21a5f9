// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer identity and samples delivered by the event driver.

use kurbo::Point;

/// Platform pointer identifier, stable for the lifetime of one touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// One pointer position at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Which pointer this sample belongs to.
    pub id: PointerId,
    /// Position in the same coordinate space as the panel offset (pixels).
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerSample {
    /// Creates a sample for pointer `id` at `(x, y)` and `time_ms`.
    #[must_use]
    pub fn new(id: PointerId, x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
            time_ms,
        }
    }
}
