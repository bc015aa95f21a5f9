// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidenav Gesture: drag recognition for edge-activated drawers.
//!
//! This crate turns a raw pointer stream into drawer motion. Each module
//! handles one part of that job:
//!
//! - [`pointer`]: pointer identifiers and timestamped samples
//! - [`velocity`]: trailing-window velocity estimation
//! - [`drag`]: per-session deltas, pending displacement and release velocity
//! - [`interpreter`]: claim decisions, drag forwarding and release intent
//!
//! ## Design Philosophy
//!
//! - **Single pointer**: at most one drag session exists; extra fingers are
//!   only remembered so the drag can hand over when the dragging finger lifts.
//! - **Host-agnostic**: the driver delivers samples with monotonic
//!   millisecond timestamps; nothing here reads a clock or touches a window.
//! - **Geometry lives elsewhere**: displacement goes into a
//!   [`sidenav_motion::MotionSurface`], which owns clamping and animation.
//!
//! ## Usage
//!
//! ```rust
//! use sidenav_gesture::{Claim, GestureInterpreter, Intent, PanelSnapshot};
//! use sidenav_gesture::{PointerId, PointerSample, PointerUp};
//! use sidenav_motion::{DrawerMode, MotionSurface, PanelMetrics};
//!
//! let mut surface = MotionSurface::new(PanelMetrics::new(300.0), DrawerMode::Left);
//! surface.set_offset_x(0.0);
//! let mut gestures = GestureInterpreter::default();
//!
//! // Grab the open panel near its trailing edge and flick it closed.
//! let finger = PointerId(7);
//! let claim = gestures.on_pointer_down(
//!     PointerSample::new(finger, 290.0, 40.0, 0),
//!     &PanelSnapshot::of(&surface),
//! );
//! assert_eq!(claim, Claim::Drag);
//!
//! gestures.on_pointer_move(PointerSample::new(finger, 190.0, 40.0, 50), &mut surface);
//! assert_eq!(surface.offset_x(), -100.0);
//!
//! match gestures.on_pointer_up(PointerSample::new(finger, 190.0, 40.0, 50)) {
//!     PointerUp::Released(release) => {
//!         assert_eq!(release.intent, Intent::Close);
//!         assert_eq!(release.velocity, -2.0);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! Cancelled gestures leave the panel where it is; deciding whether to snap
//! back is up to the caller.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

pub mod drag;
pub mod interpreter;
pub mod pointer;
pub mod velocity;

pub use drag::DragSession;
pub use interpreter::{
    Claim, DragUpdate, GestureConfig, GestureInterpreter, HandleBehavior, Intent, PanelSnapshot,
    PointerUp, Release, resolve_release,
};
pub use pointer::{PointerId, PointerSample};
pub use velocity::VelocityTracker;
