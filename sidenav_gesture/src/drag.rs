// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session bookkeeping: movement deltas, unconsumed displacement and
//! release velocity for one tracked pointer.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`] on a claimed pointer-down.
//! 2) On each move, call [`DragSession::update`] to get the delta since the
//!    last position. The delta is also added to the pending displacement and
//!    fed to the velocity tracker.
//! 3) Consume pending displacement with [`DragSession::take_pending_x`] once
//!    it has been applied to the panel.
//! 4) Call [`DragSession::release_velocity`] when the pointer lifts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use sidenav_gesture::{DragSession, PointerId};
//!
//! let mut drag = DragSession::start(PointerId(0), Point::new(10.0, 20.0), 0);
//!
//! let delta = drag.update(Point::new(15.0, 25.0), 5);
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(drag.pending().x, 5.0);
//! assert_eq!(drag.release_velocity(), 1.0);
//! ```

use kurbo::{Point, Vec2};

use crate::{PointerId, VelocityTracker};

/// Live state of one in-progress single-pointer drag.
#[derive(Clone, Debug)]
pub struct DragSession {
    pointer: PointerId,
    start_pos: Point,
    last_pos: Point,
    pending: Vec2,
    travel_x: f64,
    revealed: bool,
    tracker: VelocityTracker,
}

impl DragSession {
    /// Starts tracking `pointer` from `pos` at `time_ms`.
    #[must_use]
    pub fn start(pointer: PointerId, pos: Point, time_ms: u64) -> Self {
        let mut tracker = VelocityTracker::new();
        tracker.add(time_ms, 0.0);
        Self {
            pointer,
            start_pos: pos,
            last_pos: pos,
            pending: Vec2::ZERO,
            travel_x: 0.0,
            revealed: false,
            tracker,
        }
    }

    /// Pointer currently driving the session.
    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Position where the session started.
    #[must_use]
    pub fn start_pos(&self) -> Point {
        self.start_pos
    }

    /// Last recorded position of the tracked pointer.
    #[must_use]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    /// Displacement accumulated but not yet applied to the panel.
    #[must_use]
    pub fn pending(&self) -> Vec2 {
        self.pending
    }

    /// Total horizontal travel since the session started.
    ///
    /// Travel is accumulated from deltas, so retargeting to another pointer
    /// does not introduce a jump.
    #[must_use]
    pub fn travel_x(&self) -> f64 {
        self.travel_x
    }

    /// Returns `true` once the session has made a closed panel visible.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
    }

    /// Records a new position, returning the delta since the last one.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        self.pending += delta;
        self.travel_x += delta.x;
        self.tracker.add(time_ms, self.travel_x);
        delta
    }

    /// Returns and clears the pending horizontal displacement.
    ///
    /// The vertical component is dropped; the panel only slides horizontally.
    pub fn take_pending_x(&mut self) -> f64 {
        let dx = self.pending.x;
        self.pending = Vec2::ZERO;
        dx
    }

    /// Moves tracking to `pointer`, whose last known position is `pos`.
    ///
    /// No delta is produced, so the next move continues smoothly from `pos`.
    pub fn retarget(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = pointer;
        self.last_pos = pos;
    }

    /// Velocity over the tracker's trailing window, in pixels per millisecond.
    #[must_use]
    pub fn release_velocity(&self) -> f64 {
        self.tracker.velocity()
    }
}
