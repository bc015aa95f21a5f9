// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Rect, Vec2};

use crate::{Animation, AnimationId, DrawerMode, Easing};

/// Geometry of the sliding panel as measured by the host.
///
/// The panel width used for clamping and percent-open math is the content
/// width plus its horizontal margins plus the width of the drop shadow that
/// travels with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelMetrics {
    /// Width of the content view, in pixels.
    pub content_width: f64,
    /// Left margin of the content view.
    pub margin_left: f64,
    /// Right margin of the content view.
    pub margin_right: f64,
    /// Width of the shadow strip drawn beside the content.
    pub shadow_width: f64,
    /// Height of the panel.
    pub height: f64,
    /// Untranslated bounds of the always-visible drag handle, if any.
    pub handle: Option<Rect>,
}

impl PanelMetrics {
    /// Creates metrics for content of the given width with no margins,
    /// shadow or handle.
    #[must_use]
    pub fn new(content_width: f64) -> Self {
        Self {
            content_width,
            margin_left: 0.0,
            margin_right: 0.0,
            shadow_width: 0.0,
            height: 0.0,
            handle: None,
        }
    }

    /// Sets the content view's horizontal margins.
    #[must_use]
    pub fn with_margins(mut self, left: f64, right: f64) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Sets the shadow strip width.
    #[must_use]
    pub fn with_shadow_width(mut self, width: f64) -> Self {
        self.shadow_width = width;
        self
    }

    /// Sets the panel height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the untranslated handle bounds.
    #[must_use]
    pub fn with_handle(mut self, handle: Rect) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Full horizontal travel of the panel.
    #[must_use]
    pub fn panel_width(&self) -> f64 {
        self.content_width + self.margin_left + self.margin_right + self.shadow_width
    }
}

/// Receives start/stop notifications for one animation.
///
/// `on_start` fires synchronously from
/// [`MotionSurface::animate_offset_x`]. `on_stop` fires exactly once from
/// [`MotionSurface::tick`] when the animation completes naturally. An
/// animation that is superseded by another, or dropped by
/// [`MotionSurface::cancel_animation`] / [`MotionSurface::reset`], never
/// receives `on_stop`.
pub trait AnimationListener {
    /// Called when the animation starts.
    fn on_start(&mut self) {}

    /// Called when the animation reaches its target.
    fn on_stop(&mut self) {}
}

/// Adapts a closure into an [`AnimationListener`] that only observes completion.
pub struct OnStop<F>(pub F);

impl<F: FnMut()> AnimationListener for OnStop<F> {
    fn on_stop(&mut self) {
        (self.0)();
    }
}

impl<F> fmt::Debug for OnStop<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnStop").finish_non_exhaustive()
    }
}

/// Outcome of one [`MotionSurface::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No animation is active; no further frames are needed.
    Idle,
    /// The animation advanced and needs another frame.
    Running(AnimationId),
    /// The animation reached its exact target during this tick.
    Finished(AnimationId),
}

impl Tick {
    /// Returns `true` if the driver should schedule another frame.
    #[must_use]
    pub fn wants_frame(self) -> bool {
        matches!(self, Self::Running(_))
    }
}

struct Active {
    id: AnimationId,
    animation: Animation,
    listener: Option<Box<dyn AnimationListener>>,
}

impl fmt::Debug for Active {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Active")
            .field("id", &self.id)
            .field("animation", &self.animation)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

/// Translation state of a sliding panel.
///
/// `MotionSurface` owns the panel's 2-D offset and at most one horizontal
/// [`Animation`]. It is pure geometry and animation state; it knows nothing
/// about pointers. Every mutation marks a pending redraw that the driver
/// consumes with [`MotionSurface::take_redraw`].
///
/// ```
/// use sidenav_motion::{DrawerMode, Easing, MotionSurface, PanelMetrics, Tick};
///
/// let mut surface = MotionSurface::new(PanelMetrics::new(300.0), DrawerMode::Left);
/// assert_eq!(surface.offset_x(), -300.0);
/// assert!(!surface.is_visible());
///
/// let id = surface.animate_offset_x(-300.0, 0.0, 100, 0, Easing::Linear, None);
/// assert_eq!(surface.tick(50), Tick::Running(id));
/// assert_eq!(surface.percent_open(), 0.5);
/// assert_eq!(surface.tick(100), Tick::Finished(id));
/// assert_eq!(surface.offset_x(), 0.0);
/// assert_eq!(surface.tick(116), Tick::Idle);
/// ```
#[derive(Debug)]
pub struct MotionSurface {
    metrics: PanelMetrics,
    mode: DrawerMode,
    offset: Vec2,
    active: Option<Active>,
    next_id: u64,
    redraw: bool,
}

impl MotionSurface {
    /// Creates a surface parked at the closed offset for `mode`.
    ///
    /// Callers are expected to validate that `metrics.panel_width()` is
    /// positive and finite; percent-open math divides by it.
    #[must_use]
    pub fn new(metrics: PanelMetrics, mode: DrawerMode) -> Self {
        Self {
            metrics,
            mode,
            offset: Vec2::new(mode.closed_offset(metrics.panel_width()), 0.0),
            active: None,
            next_id: 0,
            redraw: true,
        }
    }

    /// Replaces the metrics and mode after a layout rebuild.
    ///
    /// Any running animation is dropped without `on_stop` and the panel is
    /// parked at its closed offset.
    pub fn reset(&mut self, metrics: PanelMetrics, mode: DrawerMode) {
        self.cancel_animation();
        self.metrics = metrics;
        self.mode = mode;
        self.offset = Vec2::new(mode.closed_offset(metrics.panel_width()), 0.0);
        self.redraw = true;
    }

    /// Returns the current metrics.
    #[must_use]
    pub fn metrics(&self) -> &PanelMetrics {
        &self.metrics
    }

    /// Returns the current docking mode.
    #[must_use]
    pub fn mode(&self) -> DrawerMode {
        self.mode
    }

    /// Full horizontal travel of the panel.
    #[must_use]
    pub fn panel_width(&self) -> f64 {
        self.metrics.panel_width()
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the horizontal offset.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset.x
    }

    /// Returns the vertical offset.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset.y
    }

    /// Adds `(dx, dy)` to the offset without clamping.
    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.offset += Vec2::new(dx, dy);
        self.redraw = true;
    }

    /// Sets the horizontal offset.
    pub fn set_offset_x(&mut self, x: f64) {
        self.offset.x = x;
        self.redraw = true;
    }

    /// Sets the vertical offset.
    pub fn set_offset_y(&mut self, y: f64) {
        self.offset.y = y;
        self.redraw = true;
    }

    /// Applies one drag step of `dx`, clamped to the resting bounds.
    ///
    /// In [`DrawerMode::Left`] the result stays within `[-panel_width, 0]`.
    /// [`DrawerMode::Right`] is not implemented and ignores the step.
    /// Returns `true` if the offset changed.
    pub fn drag_by(&mut self, dx: f64) -> bool {
        match self.mode {
            DrawerMode::Left => {
                let width = self.panel_width();
                let next = (self.offset.x + dx).clamp(-width, 0.0);
                if next == self.offset.x {
                    return false;
                }
                self.set_offset_x(next);
                true
            }
            DrawerMode::Right => false,
        }
    }

    /// Fraction of the panel's travel that is on screen.
    ///
    /// `0.0` when fully closed and `1.0` when fully open. The value is not
    /// clamped; raw offset writes may push it outside `[0, 1]`.
    #[must_use]
    pub fn percent_open(&self) -> f64 {
        let width = self.panel_width();
        (width + self.offset.x) / width
    }

    /// Returns `true` if any part of the panel is on screen.
    ///
    /// Derived from the offset on every call so it is never stale during an
    /// animation.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.offset.x.abs() < self.panel_width()
    }

    /// X coordinate of the panel's trailing edge in screen space.
    #[must_use]
    pub fn right_edge(&self) -> f64 {
        self.panel_width() + self.offset.x
    }

    /// Handle bounds translated by the current offset.
    #[must_use]
    pub fn handle_rect(&self) -> Option<Rect> {
        self.metrics.handle.map(|rect| rect + self.offset)
    }

    /// Starts animating the horizontal offset from `from` to `to`.
    ///
    /// The offset jumps to `from` immediately. `listener.on_start` runs before
    /// this returns. A previously running animation is superseded: its
    /// listener is dropped and never sees `on_stop`.
    pub fn animate_offset_x(
        &mut self,
        from: f64,
        to: f64,
        duration_ms: u64,
        now_ms: u64,
        easing: Easing,
        mut listener: Option<Box<dyn AnimationListener>>,
    ) -> AnimationId {
        if let Some(previous) = self.active.take() {
            log::trace!("animation {:?} superseded", previous.id);
        }
        let id = AnimationId(self.next_id);
        self.next_id += 1;

        self.set_offset_x(from);
        if let Some(listener) = listener.as_deref_mut() {
            listener.on_start();
        }
        self.active = Some(Active {
            id,
            animation: Animation::new(from, to, now_ms, duration_ms, easing),
            listener,
        });
        log::trace!("animation {id:?}: {from} -> {to} over {duration_ms}ms");
        id
    }

    /// Returns `true` while an animation is active.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the active animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<(AnimationId, &Animation)> {
        self.active.as_ref().map(|a| (a.id, &a.animation))
    }

    /// Drops the active animation without notifying its listener.
    ///
    /// The offset stays wherever the last tick left it.
    pub fn cancel_animation(&mut self) -> Option<AnimationId> {
        self.active.take().map(|a| a.id)
    }

    /// Advances the active animation to `now_ms`.
    ///
    /// Writes the sampled offset and reports whether another frame is needed.
    /// On completion the exact target is written, the animation is cleared and
    /// its listener receives `on_stop`.
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        let Some(active) = self.active.as_ref() else {
            return Tick::Idle;
        };
        let id = active.id;
        let sample = active.animation.sample(now_ms);
        self.set_offset_x(sample.offset_x);
        if !sample.is_done {
            return Tick::Running(id);
        }
        if let Some(mut finished) = self.active.take() {
            if let Some(listener) = finished.listener.as_deref_mut() {
                listener.on_stop();
            }
        }
        Tick::Finished(id)
    }

    /// Returns `true` if a redraw has been requested since the last
    /// [`MotionSurface::take_redraw`].
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Consumes the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MotionDebugInfo {
        MotionDebugInfo {
            mode: self.mode,
            panel_width: self.panel_width(),
            offset: self.offset,
            percent_open: self.percent_open(),
            is_visible: self.is_visible(),
            animation: self.active.as_ref().map(|a| (a.id, a.animation)),
        }
    }
}

/// Debug snapshot of a [`MotionSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionDebugInfo {
    /// Docking mode.
    pub mode: DrawerMode,
    /// Full horizontal travel.
    pub panel_width: f64,
    /// Current offset.
    pub offset: Vec2,
    /// Derived percent open.
    pub percent_open: f64,
    /// Derived visibility.
    pub is_visible: bool,
    /// Active animation, if any.
    pub animation: Option<(AnimationId, Animation)>,
}
