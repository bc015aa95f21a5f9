// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer stream interpretation for an edge-activated drawer.
//!
//! [`GestureInterpreter`] decides which pointer-downs start a drawer drag,
//! forwards drag displacement into a [`MotionSurface`], and classifies the
//! user's intent when the finger lifts. It holds at most one
//! [`DragSession`]; other pointers that go down while a drag is active are
//! only remembered so tracking can move to them if the dragging finger
//! lifts first.

use kurbo::{Point, Rect};
use sidenav_motion::MotionSurface;
use smallvec::SmallVec;

use crate::{DragSession, PointerId, PointerSample};

/// What a touch on the drag handle does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HandleBehavior {
    /// The handle is a button: touching it toggles the drawer.
    #[default]
    Button,
    /// The handle starts a drag like the activation edge does.
    DragInitiator,
}

/// Tunables for gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Width of the activation zones, in pixels.
    pub activation_margin: f64,
    /// Smallest release speed, in pixels per millisecond.
    pub min_release_velocity: f64,
    /// Behavior of touches on the drag handle.
    pub handle_behavior: HandleBehavior,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            activation_margin: 30.0,
            min_release_velocity: 0.8,
            handle_behavior: HandleBehavior::Button,
        }
    }
}

/// Panel state needed to classify a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSnapshot {
    /// Whether any part of the panel is on screen.
    pub is_open: bool,
    /// Screen X of the panel's trailing edge.
    pub right_edge: f64,
    /// Handle bounds in screen space.
    pub handle: Option<Rect>,
}

impl PanelSnapshot {
    /// Captures the relevant state of `surface`.
    #[must_use]
    pub fn of(surface: &MotionSurface) -> Self {
        Self {
            is_open: surface.is_visible(),
            right_edge: surface.right_edge(),
            handle: surface.handle_rect(),
        }
    }
}

/// How a pointer-down was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Claim {
    /// A drag session started for this pointer.
    Drag,
    /// The handle was touched and acts as a button; no drag was started.
    HandleClick,
    /// The event belongs to the open panel (or an active drag) but does not
    /// start a drag. It must not reach the content underneath.
    Panel,
    /// Not ours; deliver to the underlying content untouched.
    PassThrough,
}

impl Claim {
    /// Returns `true` unless the event should pass through.
    #[must_use]
    pub fn is_claimed(self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

/// Result of a pointer-move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragUpdate {
    /// Not the session's pointer, or no session.
    Ignored,
    /// The panel is closed and the drag has not yet crossed the activation margin.
    Pending,
    /// The drag just made the closed panel visible.
    Revealed,
    /// Displacement was forwarded to the visible panel.
    Moved,
}

/// User intent resolved at release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Finish opening.
    Open,
    /// Finish closing.
    Close,
}

/// A finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Pointer that lifted.
    pub pointer: PointerId,
    /// Resolved intent.
    pub intent: Intent,
    /// Velocity after the minimum-speed adjustment, in pixels per millisecond.
    pub velocity: f64,
    /// Velocity as measured.
    pub measured_velocity: f64,
}

/// Result of a pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerUp {
    /// Unknown pointer.
    Ignored,
    /// A pointer other than the dragging one lifted.
    Lifted,
    /// The dragging pointer lifted while another stayed down; tracking moved.
    Retargeted {
        /// Pointer that lifted.
        from: PointerId,
        /// Pointer now driving the drag.
        to: PointerId,
    },
    /// The drag ended.
    Released(Release),
}

/// Applies the minimum release speed and resolves intent.
///
/// Speeds below `min_velocity` are raised to it with the sign preserved; an
/// exact zero counts as negative. Positive velocity opens, everything else
/// closes.
///
/// ```
/// use sidenav_gesture::{Intent, resolve_release};
///
/// assert_eq!(resolve_release(2.0, 0.8), (Intent::Open, 2.0));
/// assert_eq!(resolve_release(0.3, 0.8), (Intent::Open, 0.8));
/// assert_eq!(resolve_release(0.0, 0.8), (Intent::Close, -0.8));
/// assert_eq!(resolve_release(-1.5, 0.8), (Intent::Close, -1.5));
/// ```
#[must_use]
pub fn resolve_release(measured: f64, min_velocity: f64) -> (Intent, f64) {
    let velocity = if measured.is_nan() {
        -min_velocity
    } else if measured.abs() < min_velocity {
        if measured > 0.0 {
            min_velocity
        } else {
            -min_velocity
        }
    } else {
        measured
    };
    let intent = if velocity > 0.0 {
        Intent::Open
    } else {
        Intent::Close
    };
    (intent, velocity)
}

/// Turns a raw pointer stream into drawer drags.
///
/// ```
/// use sidenav_gesture::{Claim, DragUpdate, GestureConfig, GestureInterpreter, Intent};
/// use sidenav_gesture::{PanelSnapshot, PointerId, PointerSample, PointerUp};
/// use sidenav_motion::{DrawerMode, MotionSurface, PanelMetrics};
///
/// let mut surface = MotionSurface::new(PanelMetrics::new(300.0), DrawerMode::Left);
/// let mut gestures = GestureInterpreter::new(GestureConfig::default());
/// let finger = PointerId(0);
///
/// let down = PointerSample::new(finger, 10.0, 200.0, 0);
/// assert_eq!(gestures.on_pointer_down(down, &PanelSnapshot::of(&surface)), Claim::Drag);
///
/// let moved = PointerSample::new(finger, 60.0, 200.0, 25);
/// assert_eq!(gestures.on_pointer_move(moved, &mut surface), DragUpdate::Revealed);
/// assert_eq!(surface.offset_x(), -250.0);
///
/// let PointerUp::Released(release) = gestures.on_pointer_up(moved) else {
///     panic!("the only finger lifted");
/// };
/// assert_eq!(release.intent, Intent::Open);
/// assert_eq!(release.velocity, 2.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    session: Option<DragSession>,
    pointers: SmallVec<[(PointerId, Point); 4]>,
}

impl GestureInterpreter {
    /// Creates an interpreter with `config`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
            pointers: SmallVec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the configuration. An active session keeps running.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the active session.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Classifies a pointer-down and starts a session when it claims a drag.
    ///
    /// Checked in order, first match wins:
    /// 1. inside the handle: a click or a drag per [`HandleBehavior`];
    /// 2. within the activation margin of the leading edge;
    /// 3. panel open and within the activation margin inside its trailing edge.
    ///
    /// Pointers that go down while a drag is active are remembered but never
    /// start a second session. [`Claim::PassThrough`] pointers are not
    /// remembered at all, since their later events go to the content.
    pub fn on_pointer_down(&mut self, sample: PointerSample, panel: &PanelSnapshot) -> Claim {
        if self.session.is_some() {
            self.track(sample.id, sample.position);
            return Claim::Panel;
        }

        let Point { x, y } = sample.position;
        let margin = self.config.activation_margin;
        let claim = if panel
            .handle
            .is_some_and(|handle| handle.contains(Point::new(x, y)))
        {
            match self.config.handle_behavior {
                HandleBehavior::Button => Claim::HandleClick,
                HandleBehavior::DragInitiator => Claim::Drag,
            }
        } else if x.abs() < margin || (panel.is_open && x > panel.right_edge - margin) {
            Claim::Drag
        } else if panel.is_open {
            Claim::Panel
        } else {
            Claim::PassThrough
        };

        if claim.is_claimed() {
            self.track(sample.id, sample.position);
        }
        if claim == Claim::Drag {
            self.session = Some(DragSession::start(
                sample.id,
                sample.position,
                sample.time_ms,
            ));
        }
        log::trace!(
            "pointer {:?} down at ({x}, {y}): {claim:?} (open: {}, edge: {})",
            sample.id,
            panel.is_open,
            panel.right_edge
        );
        claim
    }

    /// Feeds a pointer-move, forwarding displacement into `surface`.
    ///
    /// While the panel is visible every delta goes through
    /// [`MotionSurface::drag_by`]. While it is closed, horizontal movement is
    /// accumulated until it exceeds the activation margin and then applied
    /// in one step.
    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        surface: &mut MotionSurface,
    ) -> DragUpdate {
        self.refresh(sample.id, sample.position);
        let margin = self.config.activation_margin;
        let Some(session) = self.session.as_mut() else {
            return DragUpdate::Ignored;
        };
        if session.pointer() != sample.id {
            return DragUpdate::Ignored;
        }

        session.update(sample.position, sample.time_ms);
        if surface.is_visible() {
            let dx = session.take_pending_x();
            surface.drag_by(dx);
            return DragUpdate::Moved;
        }

        let pending = session.pending().x;
        if pending < 0.0 {
            // Already fully closed; moving further toward the edge is lost.
            session.take_pending_x();
            return DragUpdate::Pending;
        }
        if pending <= margin {
            return DragUpdate::Pending;
        }
        let dx = session.take_pending_x();
        if !surface.drag_by(dx) {
            return DragUpdate::Pending;
        }
        session.mark_revealed();
        log::trace!("pointer {:?} revealed the panel after {dx}px", sample.id);
        DragUpdate::Revealed
    }

    /// Feeds a pointer-up.
    ///
    /// When the dragging pointer lifts while others are still down, tracking
    /// moves to one of them. When it was the last pointer, the session ends and
    /// the release intent is returned.
    pub fn on_pointer_up(&mut self, sample: PointerSample) -> PointerUp {
        let was_tracked = self.untrack(sample.id);
        let Some(session) = self.session.as_mut() else {
            return if was_tracked {
                PointerUp::Lifted
            } else {
                PointerUp::Ignored
            };
        };
        if session.pointer() != sample.id {
            return if was_tracked {
                PointerUp::Lifted
            } else {
                PointerUp::Ignored
            };
        }

        if let Some(&(next, pos)) = self.pointers.first() {
            session.retarget(next, pos);
            log::trace!("drag moved from pointer {:?} to {next:?}", sample.id);
            return PointerUp::Retargeted {
                from: sample.id,
                to: next,
            };
        }

        session.update(sample.position, sample.time_ms);
        let measured = session.release_velocity();
        let (intent, velocity) = resolve_release(measured, self.config.min_release_velocity);
        self.session = None;
        log::trace!(
            "pointer {:?} released: {intent:?} at {velocity} px/ms (measured {measured})",
            sample.id
        );
        PointerUp::Released(Release {
            pointer: sample.id,
            intent,
            velocity,
            measured_velocity: measured,
        })
    }

    /// Ends the gesture without resolving intent.
    ///
    /// All pointer bookkeeping is cleared. The panel stays where it is.
    /// Returns `true` if a drag session was active.
    pub fn on_pointer_cancel(&mut self, id: PointerId) -> bool {
        self.pointers.clear();
        let ended = self.session.take().is_some();
        if ended {
            log::trace!("drag cancelled by pointer {id:?}");
        }
        ended
    }

    /// Drops the session and all pointer bookkeeping, as after a layout rebuild.
    pub fn reset(&mut self) {
        self.session = None;
        self.pointers.clear();
    }

    fn track(&mut self, id: PointerId, pos: Point) {
        match self.pointers.iter_mut().find(|(p, _)| *p == id) {
            Some(entry) => entry.1 = pos,
            None => self.pointers.push((id, pos)),
        }
    }

    fn refresh(&mut self, id: PointerId, pos: Point) {
        if let Some(entry) = self.pointers.iter_mut().find(|(p, _)| *p == id) {
            entry.1 = pos;
        }
    }

    fn untrack(&mut self, id: PointerId) -> bool {
        let before = self.pointers.len();
        self.pointers.retain(|(p, _)| *p != id);
        self.pointers.len() != before
    }
}
