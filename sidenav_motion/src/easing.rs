// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for settling animations.
//!
//! An [`Easing`] maps a linear time fraction in `[0, 1]` to an eased progress
//! fraction. Inputs outside `[0, 1]` are clamped, so every curve returns
//! exactly `0.0` at the start and `1.0` at the end.

/// Easing curve applied to an [`Animation`](crate::Animation).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts fast and slows down: `1 - (1 - t)^2`.
    ///
    /// This is the default for opening motion.
    #[default]
    Decelerate,
    /// Starts slow and speeds up: `t^2`.
    Accelerate,
    /// Material "fast out, slow in" curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    FastOutSlowIn,
    /// Arbitrary CSS-style cubic Bézier with fixed end points `(0,0)` and `(1,1)`.
    CubicBezier {
        /// X of the first control point, expected in `[0, 1]`.
        x1: f64,
        /// Y of the first control point.
        y1: f64,
        /// X of the second control point, expected in `[0, 1]`.
        x2: f64,
        /// Y of the second control point.
        y2: f64,
    },
}

impl Easing {
    /// Applies the curve to a linear time fraction.
    #[must_use]
    pub fn apply(self, fraction: f64) -> f64 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => fraction,
            Self::Decelerate => {
                let inv = 1.0 - fraction;
                1.0 - inv * inv
            }
            Self::Accelerate => fraction * fraction,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let slope = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton first; fall back to bisection when the slope flattens out.
    let mut t = fraction;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            return sample(ay, by, cy, t);
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = fraction;
    for _ in 0..32 {
        let x = sample(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-7 {
            break;
        }
        if x > fraction {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }
    sample(ay, by, cy, t)
}
