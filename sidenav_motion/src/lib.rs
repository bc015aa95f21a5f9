// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidenav Motion: offset and settling-animation state for sliding panels.
//!
//! This crate provides the geometry half of an edge-activated drawer. It
//! focuses on:
//! - The panel's translation offset and its derived quantities (percent open,
//!   visibility, trailing edge, translated handle bounds).
//! - Clamped drag steps for the supported docking mode.
//! - Time-bounded offset animations with easing, sampled by a pure function
//!   and advanced one step per frame.
//!
//! It does **not** interpret pointer events or decide when to open or close.
//! Callers are expected to:
//! - Feed drag displacement from a gesture layer (see `sidenav_gesture`).
//! - Drive [`MotionSurface::tick`] from their render loop and schedule another
//!   frame while it returns [`Tick::Running`].
//! - Supply monotonic time in milliseconds.
//!
//! ## Minimal example
//!
//! ```rust
//! use sidenav_motion::{DrawerMode, Easing, MotionSurface, PanelMetrics, Tick};
//!
//! let metrics = PanelMetrics::new(280.0).with_shadow_width(20.0);
//! let mut surface = MotionSurface::new(metrics, DrawerMode::Left);
//!
//! // Follow a finger for a bit.
//! surface.drag_by(120.0);
//! assert_eq!(surface.offset_x(), -180.0);
//! assert!(surface.is_visible());
//!
//! // Settle open.
//! let from = surface.offset_x();
//! let id = surface.animate_offset_x(from, 0.0, 90, 1_000, Easing::Decelerate, None);
//! let mut now = 1_000;
//! while surface.tick(now) != Tick::Finished(id) {
//!     now += 16;
//! }
//! assert_eq!(surface.percent_open(), 1.0);
//! ```
//!
//! ## Completion notifications
//!
//! Only one animation runs at a time. Starting a new one supersedes the old
//! one, and the superseded animation's [`AnimationListener::on_stop`] is
//! dropped. Completion callbacks are best-effort notifications; code that
//! must run after a specific motion should compare the [`AnimationId`]
//! reported by [`Tick::Finished`].
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod easing;
mod mode;
mod surface;

pub use animation::{Animation, AnimationId, Sample};
pub use easing::Easing;
pub use mode::DrawerMode;
pub use surface::{
    AnimationListener, MotionDebugInfo, MotionSurface, OnStop, PanelMetrics, Tick,
};
