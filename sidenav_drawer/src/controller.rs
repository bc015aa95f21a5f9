// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer controller.

use core::fmt;

use sidenav_gesture::{
    Claim, DragUpdate, GestureInterpreter, Intent, PanelSnapshot, PointerId, PointerSample,
    PointerUp,
};
use sidenav_motion::{AnimationId, DrawerMode, MotionSurface, PanelMetrics, Tick};

use crate::{
    CancelBehavior, DrawerConfig, DrawerError, DrawerEvent, DrawerObserver, LogObserver,
    PanelHost, settle_duration,
};

/// An edge-activated drawer bound to a [`PanelHost`].
///
/// The drawer owns a [`MotionSurface`] and a [`GestureInterpreter`] and keeps
/// the host's content and scrim visibility in step with them. The embedder
/// forwards pointer events through the `pointer_*` methods and calls
/// [`Drawer::frame`] whenever the host asks for a redraw.
///
/// ```
/// use sidenav_drawer::{Drawer, DrawerConfig, DrawerMode, PanelHost, PanelMetrics};
///
/// #[derive(Default)]
/// struct Host {
///     content_visible: bool,
///     frames_requested: u32,
/// }
///
/// impl PanelHost for Host {
///     fn layout(&mut self, _mode: DrawerMode) -> Option<PanelMetrics> {
///         Some(PanelMetrics::new(300.0))
///     }
///     fn request_redraw(&mut self) {
///         self.frames_requested += 1;
///     }
///     fn set_content_visible(&mut self, visible: bool) {
///         self.content_visible = visible;
///     }
/// }
///
/// let mut drawer = Drawer::new(DrawerConfig::default(), Host::default())?;
/// assert!(!drawer.is_open());
///
/// assert!(drawer.show(0));
/// assert!(drawer.host().content_visible);
/// let mut now = 0;
/// while drawer.frame(now) {
///     now += 16;
/// }
/// assert_eq!(drawer.percent_open(), 1.0);
/// # Ok::<(), sidenav_drawer::DrawerError>(())
/// ```
pub struct Drawer<H: PanelHost, O: DrawerObserver = LogObserver> {
    config: DrawerConfig,
    host: H,
    observer: O,
    surface: MotionSurface,
    gestures: GestureInterpreter,
    settling: Option<(AnimationId, Intent)>,
    scrim_visible: bool,
}

impl<H: PanelHost, O: DrawerObserver> fmt::Debug for Drawer<H, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawer")
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("gestures", &self.gestures)
            .field("settling", &self.settling)
            .field("scrim_visible", &self.scrim_visible)
            .finish_non_exhaustive()
    }
}

impl<H: PanelHost> Drawer<H, LogObserver> {
    /// Binds a drawer to `host`, reporting events to the `log` facade.
    pub fn new(config: DrawerConfig, host: H) -> Result<Self, DrawerError> {
        Self::with_observer(config, host, LogObserver)
    }
}

impl<H: PanelHost, O: DrawerObserver> Drawer<H, O> {
    /// Binds a drawer to `host`, reporting events to `observer`.
    ///
    /// The configuration is validated and the host is asked for the panel
    /// layout of `config.mode`. The drawer starts closed with its content and
    /// scrim hidden.
    pub fn with_observer(
        config: DrawerConfig,
        mut host: H,
        observer: O,
    ) -> Result<Self, DrawerError> {
        config.validate()?;
        let metrics = bind(&mut host, config.mode)?;
        let mut drawer = Self {
            config,
            host,
            observer,
            surface: MotionSurface::new(metrics, config.mode),
            gestures: GestureInterpreter::new(config.gesture_config()),
            settling: None,
            scrim_visible: false,
        };
        drawer.set_drawer_invisible();
        drawer.flush();
        Ok(drawer)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Returns the motion state.
    #[must_use]
    pub fn surface(&self) -> &MotionSurface {
        &self.surface
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns the current docking mode.
    #[must_use]
    pub fn mode(&self) -> DrawerMode {
        self.config.mode
    }

    /// Returns `true` if any part of the panel is on screen.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.surface.is_visible()
    }

    /// Fraction of the panel that is on screen. Not clamped.
    #[must_use]
    pub fn percent_open(&self) -> f64 {
        self.surface.percent_open()
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Makes the content visible and settles the panel open.
    ///
    /// Refused while a drag is in progress, since the finger owns the offset
    /// until it lifts: nothing changes and `false` is returned.
    pub fn show(&mut self, now_ms: u64) -> bool {
        if self.gestures.is_dragging() {
            self.observer.on_event(&DrawerEvent::ShowRefused);
            return false;
        }
        self.set_drawer_visible();
        self.settle(Intent::Open, self.config.programmatic_velocity, now_ms);
        true
    }

    /// Settles the panel closed and hides the content once it gets there.
    ///
    /// Refused while a drag is in progress: nothing changes and `false` is
    /// returned.
    pub fn hide(&mut self, now_ms: u64) -> bool {
        if self.gestures.is_dragging() {
            self.observer.on_event(&DrawerEvent::HideRefused);
            return false;
        }
        self.settle(Intent::Close, -self.config.programmatic_velocity, now_ms);
        true
    }

    /// Hides the drawer if it is open, shows it otherwise.
    ///
    /// Returns `false` if the underlying call was refused.
    pub fn toggle(&mut self, now_ms: u64) -> bool {
        if self.is_open() {
            self.hide(now_ms)
        } else {
            self.show(now_ms)
        }
    }

    /// Switches the docking mode and rebuilds the panel layout.
    ///
    /// Any drag is ended and any animation dropped; the drawer is closed
    /// afterwards. On error the previous mode and layout stay bound.
    /// Calling this twice with the same mode leaves the same state.
    pub fn set_mode(&mut self, mode: DrawerMode, now_ms: u64) -> Result<(), DrawerError> {
        self.hide(now_ms);
        self.gestures.reset();
        let metrics = bind(&mut self.host, mode)?;
        self.surface.reset(metrics, mode);
        self.settling = None;
        self.config.mode = mode;
        self.set_drawer_invisible();
        self.flush();
        self.observer.on_event(&DrawerEvent::ModeChanged { mode });
        Ok(())
    }

    /// Routes a pointer-down. Returns how it was claimed; anything other than
    /// [`Claim::PassThrough`] must not reach the content underneath.
    ///
    /// Starting a drag stops a running settle so the finger takes over from
    /// wherever the panel currently is. A handle click toggles the drawer.
    pub fn pointer_down(&mut self, sample: PointerSample) -> Claim {
        let snapshot = PanelSnapshot::of(&self.surface);
        let claim = self.gestures.on_pointer_down(sample, &snapshot);
        self.observer.on_event(&DrawerEvent::PointerClaimed {
            pointer: sample.id,
            claim,
        });
        match claim {
            Claim::Drag => {
                if self.surface.cancel_animation().is_some() {
                    self.settling = None;
                }
            }
            Claim::HandleClick => {
                self.observer.on_event(&DrawerEvent::HandleClicked);
                self.toggle(sample.time_ms);
            }
            Claim::Panel | Claim::PassThrough => {}
        }
        claim
    }

    /// Routes a pointer-move.
    pub fn pointer_move(&mut self, sample: PointerSample) -> DragUpdate {
        let before = self.surface.offset_x();
        let update = self.gestures.on_pointer_move(sample, &mut self.surface);
        if update == DragUpdate::Revealed {
            self.set_drawer_visible();
            self.observer.on_event(&DrawerEvent::Revealed);
        }
        if self.surface.offset_x() != before {
            self.report_progress();
        }
        self.flush();
        update
    }

    /// Routes a pointer-up. A finished drag settles toward the resolved intent.
    pub fn pointer_up(&mut self, sample: PointerSample) -> PointerUp {
        let up = self.gestures.on_pointer_up(sample);
        match up {
            PointerUp::Retargeted { from, to } => {
                self.observer.on_event(&DrawerEvent::Retargeted { from, to });
            }
            PointerUp::Released(release) => {
                self.observer.on_event(&DrawerEvent::Released(release));
                if release.intent == Intent::Open {
                    self.set_drawer_visible();
                }
                self.settle(release.intent, release.velocity, sample.time_ms);
            }
            PointerUp::Ignored | PointerUp::Lifted => {}
        }
        up
    }

    /// Routes a platform cancel. Returns `true` if a drag was active.
    ///
    /// The panel stays where it is unless [`CancelBehavior::SnapToNearest`]
    /// is configured.
    pub fn pointer_cancel(&mut self, pointer: PointerId, now_ms: u64) -> bool {
        if !self.gestures.on_pointer_cancel(pointer) {
            return false;
        }
        self.observer.on_event(&DrawerEvent::DragCancelled { pointer });
        if self.config.cancel_behavior == CancelBehavior::SnapToNearest {
            let speed = self.config.programmatic_velocity;
            if self.surface.percent_open() >= 0.5 {
                self.set_drawer_visible();
                self.settle(Intent::Open, speed, now_ms);
            } else {
                self.settle(Intent::Close, -speed, now_ms);
            }
        }
        true
    }

    /// Advances the running settle to `now_ms`.
    ///
    /// Requests another frame from the host and returns `true` while the
    /// animation is still running. When a closing settle completes, the
    /// content and scrim are hidden.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        let before = self.surface.offset_x();
        let tick = self.surface.tick(now_ms);
        self.surface.take_redraw();
        if self.surface.offset_x() != before {
            self.report_progress();
        }
        if let Tick::Finished(id) = tick {
            if let Some((settling, intent)) = self.settling.take_if(|(s, _)| *s == id) {
                self.observer.on_event(&DrawerEvent::Settled {
                    intent,
                    animation: settling,
                });
                if intent == Intent::Close {
                    self.set_drawer_invisible();
                }
            }
        }
        let more = tick.wants_frame();
        if more {
            self.host.request_redraw();
        }
        more
    }

    fn settle(&mut self, intent: Intent, velocity: f64, now_ms: u64) {
        let mode = self.config.mode;
        if !mode.supports_motion() {
            self.observer.on_event(&DrawerEvent::MotionUnsupported { mode });
            return;
        }
        let (to, ceiling, easing) = match intent {
            Intent::Open => (
                mode.open_offset(),
                self.config.max_show_duration_ms,
                self.config.show_easing,
            ),
            Intent::Close => (
                mode.closed_offset(self.surface.panel_width()),
                self.config.max_hide_duration_ms,
                self.config.hide_easing,
            ),
        };
        let from = self.surface.offset_x();
        let duration_ms = settle_duration(to - from, velocity, ceiling);
        let animation = self
            .surface
            .animate_offset_x(from, to, duration_ms, now_ms, easing, None);
        self.settling = Some((animation, intent));
        self.observer.on_event(&DrawerEvent::SettleStarted {
            intent,
            animation,
            from,
            to,
            duration_ms,
        });
        self.flush();
    }

    fn set_drawer_visible(&mut self) {
        self.host.set_content_visible(true);
        self.scrim_visible = true;
        self.host.set_scrim(true, scrim_alpha(self.surface.percent_open()));
    }

    fn set_drawer_invisible(&mut self) {
        self.host.set_content_visible(false);
        self.scrim_visible = false;
        self.host.set_scrim(false, 0.0);
    }

    fn report_progress(&mut self) {
        let percent = self.surface.percent_open();
        self.observer.on_progress(percent);
        if self.scrim_visible {
            self.host.set_scrim(true, scrim_alpha(percent));
        }
    }

    fn flush(&mut self) {
        if self.surface.take_redraw() {
            self.host.request_redraw();
        }
    }
}

fn bind<H: PanelHost>(host: &mut H, mode: DrawerMode) -> Result<PanelMetrics, DrawerError> {
    let metrics = host
        .layout(mode)
        .ok_or(DrawerError::MissingContent { mode })?;
    let width = metrics.panel_width();
    if !width.is_finite() || width <= 0.0 {
        return Err(DrawerError::InvalidWidth { mode, width });
    }
    Ok(metrics)
}

fn scrim_alpha(percent_open: f64) -> f64 {
    if percent_open.is_nan() {
        0.0
    } else {
        percent_open.clamp(0.0, 1.0)
    }
}
