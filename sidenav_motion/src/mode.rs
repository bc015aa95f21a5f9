// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Screen edge the drawer docks to.
///
/// The mode decides which edge is the activation zone and which direction
/// "open" means. It is shared by [`crate::MotionSurface`] (clamping and the
/// closed resting offset) and by the gesture and controller layers built on
/// top of this crate.
///
/// Only [`DrawerMode::Left`] has complete drag and settling behavior.
/// [`DrawerMode::Right`] is accepted as configuration, parks the panel past
/// the right edge, and otherwise leaves drag steps as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawerMode {
    /// Panel slides in from the left edge; open means `offset.x == 0`.
    #[default]
    Left,
    /// Panel docks to the right edge. Dragging is not implemented.
    Right,
}

impl DrawerMode {
    /// Returns the horizontal offset at which a panel of `width` is fully closed.
    #[must_use]
    pub fn closed_offset(self, width: f64) -> f64 {
        match self {
            Self::Left => -width,
            Self::Right => width,
        }
    }

    /// Returns the horizontal offset at which the panel is fully open.
    #[must_use]
    pub fn open_offset(self) -> f64 {
        0.0
    }

    /// Returns `true` if drag and settling motion is implemented for this mode.
    #[must_use]
    pub fn supports_motion(self) -> bool {
        matches!(self, Self::Left)
    }
}
