// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while setting up or rebuilding a drawer.

use core::fmt;

use sidenav_motion::DrawerMode;

/// A [`DrawerConfig`](crate::DrawerConfig) field holds an unusable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The activation margin is negative or not finite.
    ActivationMargin(f64),
    /// The minimum release velocity is not a positive finite number.
    MinReleaseVelocity(f64),
    /// The programmatic show/hide velocity is not a positive finite number.
    ProgrammaticVelocity(f64),
    /// The show duration ceiling is zero.
    ZeroShowDuration,
    /// The hide duration ceiling is zero.
    ZeroHideDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActivationMargin(v) => {
                write!(f, "activation margin must be finite and >= 0, got {v}")
            }
            Self::MinReleaseVelocity(v) => {
                write!(f, "minimum release velocity must be finite and > 0, got {v}")
            }
            Self::ProgrammaticVelocity(v) => {
                write!(f, "programmatic velocity must be finite and > 0, got {v}")
            }
            Self::ZeroShowDuration => f.write_str("show duration ceiling must be > 0 ms"),
            Self::ZeroHideDuration => f.write_str("hide duration ceiling must be > 0 ms"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned when a drawer cannot be bound to its host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerError {
    /// The host has no content view to place in the panel for `mode`.
    MissingContent {
        /// Mode the layout was requested for.
        mode: DrawerMode,
    },
    /// The host reported a panel width that is not a positive finite number.
    InvalidWidth {
        /// Mode the layout was requested for.
        mode: DrawerMode,
        /// Reported width.
        width: f64,
    },
    /// The configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContent { mode } => {
                write!(f, "no panel content is bound for {mode:?} mode")
            }
            Self::InvalidWidth { mode, width } => {
                write!(f, "panel width for {mode:?} mode must be > 0, got {width}")
            }
            Self::Config(err) => write!(f, "invalid drawer configuration: {err}"),
        }
    }
}

impl core::error::Error for DrawerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for DrawerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::error::Error;

    use sidenav_motion::DrawerMode;

    use super::{ConfigError, DrawerError};

    #[test]
    fn display_names_the_problem() {
        let err = DrawerError::MissingContent {
            mode: DrawerMode::Right,
        };
        assert_eq!(err.to_string(), "no panel content is bound for Right mode");

        let err = DrawerError::InvalidWidth {
            mode: DrawerMode::Left,
            width: 0.0,
        };
        assert_eq!(err.to_string(), "panel width for Left mode must be > 0, got 0");
    }

    #[test]
    fn config_errors_chain() {
        let err = DrawerError::from(ConfigError::ZeroHideDuration);
        assert_eq!(
            err.to_string(),
            "invalid drawer configuration: hide duration ceiling must be > 0 ms"
        );
        assert!(err.source().is_some());
        assert!(
            DrawerError::MissingContent {
                mode: DrawerMode::Left
            }
            .source()
            .is_none()
        );
    }
}
