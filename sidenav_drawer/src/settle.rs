// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Duration of a settling animation covering `distance` at `velocity`.
///
/// The result is `|distance| / |velocity|` truncated to whole milliseconds.
/// Non-finite, negative or over-ceiling values become `ceiling_ms`, so the
/// result is always in `[0, ceiling_ms]`.
///
/// ```
/// use sidenav_drawer::settle_duration;
///
/// assert_eq!(settle_duration(250.0, 2.0, 500), 125);
/// assert_eq!(settle_duration(-200.0, -1.5, 200), 133);
/// assert_eq!(settle_duration(300.0, 0.0, 200), 200);
/// ```
#[must_use]
pub fn settle_duration(distance: f64, velocity: f64, ceiling_ms: u64) -> u64 {
    let raw = (distance / velocity).abs();
    if !raw.is_finite() {
        return ceiling_ms;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation to whole milliseconds is intended; the value is finite and non-negative"
    )]
    let ms = raw as u64;
    ms.min(ceiling_ms)
}
