// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration.

use sidenav_gesture::{GestureConfig, HandleBehavior};
use sidenav_motion::{DrawerMode, Easing};

use crate::ConfigError;

/// What happens to the panel when the platform cancels a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CancelBehavior {
    /// Leave the panel wherever the finger left it.
    #[default]
    Stay,
    /// Settle to the nearest resting state: open if at least half open.
    SnapToNearest,
}

/// Configuration for a [`Drawer`](crate::Drawer).
///
/// ```
/// use sidenav_drawer::{CancelBehavior, DrawerConfig};
///
/// let config = DrawerConfig::default()
///     .with_activation_margin(24.0)
///     .with_cancel_behavior(CancelBehavior::SnapToNearest);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_show_duration_ms, 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Edge the panel docks to.
    pub mode: DrawerMode,
    /// Width of the edge activation zones, in pixels.
    pub activation_margin: f64,
    /// Ceiling for opening animations.
    pub max_show_duration_ms: u64,
    /// Ceiling for closing animations.
    pub max_hide_duration_ms: u64,
    /// Smallest release speed after a drag, in pixels per millisecond.
    pub min_release_velocity: f64,
    /// Speed used by `show`/`hide` when no drag velocity is available.
    pub programmatic_velocity: f64,
    /// What touching the drag handle does.
    pub handle_behavior: HandleBehavior,
    /// What a cancelled drag does.
    pub cancel_behavior: CancelBehavior,
    /// Curve for opening animations.
    pub show_easing: Easing,
    /// Curve for closing animations.
    pub hide_easing: Easing,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            mode: DrawerMode::Left,
            activation_margin: 30.0,
            max_show_duration_ms: 500,
            max_hide_duration_ms: 200,
            min_release_velocity: 0.8,
            programmatic_velocity: 1.0,
            handle_behavior: HandleBehavior::Button,
            cancel_behavior: CancelBehavior::Stay,
            show_easing: Easing::Decelerate,
            hide_easing: Easing::Linear,
        }
    }
}

impl DrawerConfig {
    /// Sets the docking mode.
    #[must_use]
    pub fn with_mode(mut self, mode: DrawerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the activation margin.
    #[must_use]
    pub fn with_activation_margin(mut self, margin: f64) -> Self {
        self.activation_margin = margin;
        self
    }

    /// Sets the show and hide duration ceilings.
    #[must_use]
    pub fn with_max_durations(mut self, show_ms: u64, hide_ms: u64) -> Self {
        self.max_show_duration_ms = show_ms;
        self.max_hide_duration_ms = hide_ms;
        self
    }

    /// Sets the minimum release velocity.
    #[must_use]
    pub fn with_min_release_velocity(mut self, velocity: f64) -> Self {
        self.min_release_velocity = velocity;
        self
    }

    /// Sets the handle behavior.
    #[must_use]
    pub fn with_handle_behavior(mut self, behavior: HandleBehavior) -> Self {
        self.handle_behavior = behavior;
        self
    }

    /// Sets the cancel behavior.
    #[must_use]
    pub fn with_cancel_behavior(mut self, behavior: CancelBehavior) -> Self {
        self.cancel_behavior = behavior;
        self
    }

    /// Sets the opening and closing curves.
    #[must_use]
    pub fn with_easing(mut self, show: Easing, hide: Easing) -> Self {
        self.show_easing = show;
        self.hide_easing = hide;
        self
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.activation_margin.is_finite() || self.activation_margin < 0.0 {
            return Err(ConfigError::ActivationMargin(self.activation_margin));
        }
        if !self.min_release_velocity.is_finite() || self.min_release_velocity <= 0.0 {
            return Err(ConfigError::MinReleaseVelocity(self.min_release_velocity));
        }
        if !self.programmatic_velocity.is_finite() || self.programmatic_velocity <= 0.0 {
            return Err(ConfigError::ProgrammaticVelocity(
                self.programmatic_velocity,
            ));
        }
        if self.max_show_duration_ms == 0 {
            return Err(ConfigError::ZeroShowDuration);
        }
        if self.max_hide_duration_ms == 0 {
            return Err(ConfigError::ZeroHideDuration);
        }
        Ok(())
    }

    /// Gesture settings derived from this configuration.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            activation_margin: self.activation_margin,
            min_release_velocity: self.min_release_velocity,
            handle_behavior: self.handle_behavior,
        }
    }
}
