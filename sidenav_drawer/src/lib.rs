// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidenav Drawer: a host-agnostic controller for edge-activated drawers.
//!
//! A [`Drawer`] ties together the panel's motion state
//! ([`sidenav_motion::MotionSurface`]) and the pointer gesture recognizer
//! ([`sidenav_gesture::GestureInterpreter`]), and drives a platform
//! [`PanelHost`] that owns the real views.
//!
//! It provides:
//! - Programmatic [`Drawer::show`], [`Drawer::hide`] and [`Drawer::toggle`].
//! - Pointer entry points that claim edge drags, follow the finger and settle
//!   the panel at release with a velocity-derived duration
//!   ([`settle_duration`]).
//! - Mode switching with a full layout rebuild ([`Drawer::set_mode`]).
//! - Structured [`DrawerEvent`]s delivered to an injectable
//!   [`DrawerObserver`]. The default [`LogObserver`] writes them to the `log`
//!   facade.
//!
//! ## Driving a drawer
//!
//! The embedder owns the event loop and the clock. Pointer events go to
//! [`Drawer::pointer_down`], [`Drawer::pointer_move`], [`Drawer::pointer_up`]
//! and [`Drawer::pointer_cancel`]. Whenever the host is asked to redraw, it
//! calls [`Drawer::frame`] with the current time in milliseconds; `frame`
//! returns `true` (and asks for another redraw) while a settle is running.
//!
//! ```rust
//! use sidenav_drawer::{
//!     Drawer, DrawerConfig, DrawerMode, Intent, PanelHost, PanelMetrics, PointerId,
//!     PointerSample, PointerUp,
//! };
//!
//! struct Host;
//!
//! impl PanelHost for Host {
//!     fn layout(&mut self, _mode: DrawerMode) -> Option<PanelMetrics> {
//!         Some(PanelMetrics::new(300.0))
//!     }
//!     fn request_redraw(&mut self) {}
//!     fn set_content_visible(&mut self, _visible: bool) {}
//! }
//!
//! let mut drawer = Drawer::with_observer(DrawerConfig::default(), Host, ())?;
//!
//! // Swipe in from the left edge.
//! let finger = PointerId(0);
//! drawer.pointer_down(PointerSample::new(finger, 10.0, 400.0, 0));
//! drawer.pointer_move(PointerSample::new(finger, 60.0, 400.0, 25));
//! assert_eq!(drawer.surface().offset_x(), -250.0);
//!
//! let up = drawer.pointer_up(PointerSample::new(finger, 60.0, 400.0, 25));
//! assert!(matches!(up, PointerUp::Released(r) if r.intent == Intent::Open));
//!
//! // 250 px at 2 px/ms settles in 125 ms.
//! assert!(drawer.frame(100));
//! assert!(!drawer.frame(150));
//! assert_eq!(drawer.percent_open(), 1.0);
//! # Ok::<(), sidenav_drawer::DrawerError>(())
//! ```
//!
//! Only [`DrawerMode::Left`] has motion. In [`DrawerMode::Right`] drags and
//! settles are no-ops, reported through [`DrawerEvent::MotionUnsupported`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
mod controller;
mod error;
mod host;
mod observer;
mod settle;

pub use config::{CancelBehavior, DrawerConfig};
pub use controller::Drawer;
pub use error::{ConfigError, DrawerError};
pub use host::PanelHost;
pub use observer::{DrawerEvent, DrawerObserver, LogObserver};
pub use settle::settle_duration;

pub use sidenav_gesture::{
    Claim, DragUpdate, HandleBehavior, Intent, PointerId, PointerSample, PointerUp, Release,
};
pub use sidenav_motion::{DrawerMode, Easing, PanelMetrics};
