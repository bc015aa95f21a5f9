// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured notifications about what a drawer is doing.
//!
//! A [`DrawerObserver`] is passed in when the drawer is built. The default,
//! [`LogObserver`], forwards everything to the `log` facade; `()` discards
//! everything. Tests and inspectors can record events instead.

use sidenav_gesture::{Claim, Intent, PointerId, Release};
use sidenav_motion::{AnimationId, DrawerMode};

/// One notable step in the drawer's life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    /// A pointer went down and was classified.
    PointerClaimed {
        /// The pointer.
        pointer: PointerId,
        /// How it was classified.
        claim: Claim,
    },
    /// A drag from the closed state made the panel visible.
    Revealed,
    /// Tracking moved to another finger.
    Retargeted {
        /// Pointer that lifted.
        from: PointerId,
        /// Pointer now driving the drag.
        to: PointerId,
    },
    /// A drag ended with a resolved intent.
    Released(Release),
    /// The platform cancelled a drag.
    DragCancelled {
        /// Pointer reported with the cancel.
        pointer: PointerId,
    },
    /// The handle was touched in button mode.
    HandleClicked,
    /// A settling animation started.
    SettleStarted {
        /// Direction of the motion.
        intent: Intent,
        /// Animation id, matched by the later [`DrawerEvent::Settled`].
        animation: AnimationId,
        /// Start offset.
        from: f64,
        /// Target offset.
        to: f64,
        /// Chosen duration.
        duration_ms: u64,
    },
    /// A settling animation reached its target.
    Settled {
        /// Direction of the motion.
        intent: Intent,
        /// Animation id.
        animation: AnimationId,
    },
    /// `show` was refused because a drag is in progress.
    ShowRefused,
    /// `hide` was refused because a drag is in progress.
    HideRefused,
    /// Settling was skipped because the mode has no motion support.
    MotionUnsupported {
        /// Current mode.
        mode: DrawerMode,
    },
    /// The mode changed and the layout was rebuilt.
    ModeChanged {
        /// New mode.
        mode: DrawerMode,
    },
}

/// Receives [`DrawerEvent`]s and opening progress.
pub trait DrawerObserver {
    /// Called for every event.
    fn on_event(&mut self, event: &DrawerEvent);

    /// Called with the percent open after every frame or drag step that moved
    /// the panel. The value is not clamped.
    fn on_progress(&mut self, percent_open: f64) {
        let _ = percent_open;
    }
}

impl DrawerObserver for () {
    fn on_event(&mut self, _event: &DrawerEvent) {}
}

/// Observer that writes events to the `log` facade.
///
/// Events are logged at `debug`, progress at `trace`, and refused or
/// unsupported operations at `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl DrawerObserver for LogObserver {
    fn on_event(&mut self, event: &DrawerEvent) {
        match event {
            DrawerEvent::ShowRefused => log::warn!("show refused while dragging"),
            DrawerEvent::HideRefused => log::warn!("hide refused while dragging"),
            DrawerEvent::MotionUnsupported { mode } => {
                log::warn!("settling is not implemented for {mode:?} mode");
            }
            other => log::debug!("{other:?}"),
        }
    }

    fn on_progress(&mut self, percent_open: f64) {
        log::trace!("percent open: {percent_open:.3}");
    }
}
