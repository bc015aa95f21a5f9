// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the drawer and the platform view hosting it.

use sidenav_motion::{DrawerMode, PanelMetrics};

/// Platform adapter driven by a [`Drawer`](crate::Drawer).
///
/// The host owns the real views: the panel content, its shadow and handle,
/// and the dimming "scrim" drawn over the rest of the screen while the panel
/// is out. The drawer only asks it to measure, to redraw, and to toggle
/// visibility.
pub trait PanelHost {
    /// Builds (or rebuilds) the panel for `mode` and returns its metrics.
    ///
    /// Returning `None` means there is no content view to bind, which the
    /// drawer reports as [`DrawerError::MissingContent`](crate::DrawerError::MissingContent).
    fn layout(&mut self, mode: DrawerMode) -> Option<PanelMetrics>;

    /// Schedules one more frame; the driver answers with
    /// [`Drawer::frame`](crate::Drawer::frame).
    fn request_redraw(&mut self);

    /// Shows or hides the panel content.
    ///
    /// Hidden content must not take part in hit testing.
    fn set_content_visible(&mut self, visible: bool);

    /// Shows or hides the scrim and sets its opacity in `[0, 1]`.
    fn set_scrim(&mut self, visible: bool, alpha: f64) {
        let _ = (visible, alpha);
    }
}
