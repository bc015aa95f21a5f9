// Copyright 2025 the Sidenav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drawer behavior driven through a recording host.

use kurbo::Rect;
use sidenav_drawer::{
    CancelBehavior, Claim, DragUpdate, Drawer, DrawerConfig, DrawerError, DrawerEvent,
    DrawerMode, DrawerObserver, HandleBehavior, Intent, PanelHost, PanelMetrics, PointerId,
    PointerSample, PointerUp, settle_duration,
};

#[derive(Debug, Default)]
struct RecordingHost {
    metrics: Option<PanelMetrics>,
    layouts: Vec<DrawerMode>,
    content_visible: bool,
    scrim: (bool, f64),
    redraws: usize,
}

impl RecordingHost {
    fn with_width(width: f64) -> Self {
        Self {
            metrics: Some(PanelMetrics::new(width)),
            ..Self::default()
        }
    }
}

impl PanelHost for RecordingHost {
    fn layout(&mut self, mode: DrawerMode) -> Option<PanelMetrics> {
        self.layouts.push(mode);
        self.metrics
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }

    fn set_scrim(&mut self, visible: bool, alpha: f64) {
        self.scrim = (visible, alpha);
    }
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<DrawerEvent>,
    progress: Vec<f64>,
}

impl Recorder {
    fn settle_durations(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrawerEvent::SettleStarted { duration_ms, .. } => Some(*duration_ms),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&DrawerEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl DrawerObserver for Recorder {
    fn on_event(&mut self, event: &DrawerEvent) {
        self.events.push(*event);
    }

    fn on_progress(&mut self, percent_open: f64) {
        self.progress.push(percent_open);
    }
}

type TestDrawer = Drawer<RecordingHost, Recorder>;

fn drawer_with(config: DrawerConfig, host: RecordingHost) -> TestDrawer {
    Drawer::with_observer(config, host, Recorder::default()).unwrap()
}

fn drawer(width: f64) -> TestDrawer {
    drawer_with(DrawerConfig::default(), RecordingHost::with_width(width))
}

fn at(id: u64, x: f64, t: u64) -> PointerSample {
    PointerSample::new(PointerId(id), x, 200.0, t)
}

/// Runs frames every 16 ms from `start` until the settle completes.
fn run_frames(drawer: &mut TestDrawer, start: u64) -> u64 {
    let mut now = start;
    while drawer.frame(now) {
        now += 16;
        assert!(now < start + 10_000, "settle never finished");
    }
    now
}

fn open_fully(drawer: &mut TestDrawer) -> u64 {
    drawer.show(0);
    run_frames(drawer, 0)
}

#[test]
fn edge_drag_opens_with_velocity_duration() {
    let mut drawer = drawer(300.0);

    assert_eq!(drawer.pointer_down(at(0, 10.0, 0)), Claim::Drag);
    assert!(!drawer.host().content_visible);
    assert_eq!(drawer.pointer_move(at(0, 60.0, 25)), DragUpdate::Revealed);
    assert_eq!(drawer.surface().offset_x(), -250.0);
    assert!(drawer.host().content_visible);
    assert!(drawer.host().scrim.0);

    let PointerUp::Released(release) = drawer.pointer_up(at(0, 60.0, 25)) else {
        panic!("expected a release");
    };
    assert_eq!(release.intent, Intent::Open);
    assert_eq!(release.velocity, 2.0);
    assert_eq!(drawer.observer().settle_durations(), vec![125]);

    let (_, animation) = drawer.surface().animation().unwrap();
    assert_eq!(animation.from, -250.0);
    assert_eq!(animation.to, 0.0);

    assert!(drawer.frame(100));
    assert!(!drawer.frame(150));
    assert_eq!(drawer.surface().offset_x(), 0.0);
    assert_eq!(drawer.host().scrim, (true, 1.0));
    assert_eq!(
        drawer
            .observer()
            .count(|e| matches!(e, DrawerEvent::Settled { intent: Intent::Open, .. })),
        1
    );
}

#[test]
fn trailing_edge_drag_closes_and_hides_content() {
    let mut drawer = drawer(300.0);
    let t = open_fully(&mut drawer);
    assert!(drawer.is_open());

    assert_eq!(drawer.pointer_down(at(0, 290.0, t)), Claim::Drag);
    assert_eq!(drawer.pointer_move(at(0, 230.0, t + 40)), DragUpdate::Moved);
    assert_eq!(drawer.surface().offset_x(), -60.0);

    let PointerUp::Released(release) = drawer.pointer_up(at(0, 230.0, t + 40)) else {
        panic!("expected a release");
    };
    assert_eq!(release.intent, Intent::Close);
    assert_eq!(release.velocity, -1.5);
    assert_eq!(drawer.observer().settle_durations().last(), Some(&160));

    assert!(drawer.frame(t + 120));
    assert!(drawer.host().content_visible);
    assert!(!drawer.frame(t + 200));
    assert_eq!(drawer.surface().offset_x(), -300.0);
    assert!(!drawer.is_open());
    assert!(!drawer.host().content_visible);
    assert_eq!(drawer.host().scrim, (false, 0.0));

    // Same speed over a 200 px gap.
    assert_eq!(settle_duration(-200.0, -1.5, 200), 133);
}

#[test]
fn slower_drag_over_a_longer_gap_closes_in_133_ms() {
    let mut drawer = drawer(300.0);
    let t = open_fully(&mut drawer);

    assert_eq!(drawer.pointer_down(at(0, 290.0, t)), Claim::Drag);
    drawer.pointer_move(at(0, 250.0, t + 100));
    assert_eq!(drawer.pointer_move(at(0, 190.0, t + 140)), DragUpdate::Moved);
    assert_eq!(drawer.surface().offset_x(), -100.0);

    // The down sample is outside the 100 ms window; only the last 40 ms count.
    let PointerUp::Released(release) = drawer.pointer_up(at(0, 190.0, t + 140)) else {
        panic!("expected a release");
    };
    assert_eq!(release.velocity, -1.5);
    assert_eq!(release.intent, Intent::Close);
    assert_eq!(drawer.observer().settle_durations().last(), Some(&133));

    assert!(drawer.frame(t + 272));
    assert!(drawer.host().content_visible);
    assert!(!drawer.frame(t + 273));
    assert_eq!(drawer.surface().offset_x(), -300.0);
    assert!(!drawer.host().content_visible);
}

#[test]
fn show_waits_for_the_finger() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 160.0, 20));

    assert!(!drawer.show(30));
    assert!(!drawer.surface().is_animating());
    drawer.pointer_move(at(0, 140.0, 40));
    drawer.frame(130);
    assert_eq!(drawer.surface().offset_x(), -170.0);

    drawer.pointer_up(at(0, 140.0, 40));
    assert!(!drawer.is_dragging());
    assert!(drawer.surface().is_animating());
}

#[test]
fn slow_release_is_raised_to_minimum_speed() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 10.0, 0));
    assert_eq!(drawer.pointer_move(at(0, 45.0, 100)), DragUpdate::Revealed);
    assert_eq!(drawer.surface().offset_x(), -265.0);

    let PointerUp::Released(release) = drawer.pointer_up(at(0, 45.0, 100)) else {
        panic!("expected a release");
    };
    assert_eq!(release.measured_velocity, 0.35);
    assert_eq!(release.velocity, 0.8);
    assert_eq!(release.intent, Intent::Open);
    assert_eq!(drawer.observer().settle_durations(), vec![331]);
}

#[test]
fn hide_during_drag_is_refused() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 160.0, 50));
    let offset = drawer.surface().offset_x();
    let redraws = drawer.host().redraws;

    assert!(!drawer.hide(60));
    assert_eq!(drawer.surface().offset_x(), offset);
    assert!(!drawer.surface().is_animating());
    assert!(drawer.is_dragging());
    assert!(drawer.host().content_visible);
    assert_eq!(drawer.host().redraws, redraws);
    assert_eq!(
        drawer.observer().events.last(),
        Some(&DrawerEvent::HideRefused)
    );
}

#[test]
fn drag_is_clamped_to_resting_bounds() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 5.0, 0));
    drawer.pointer_move(at(0, 900.0, 10));
    assert_eq!(drawer.surface().offset_x(), 0.0);
    drawer.pointer_move(at(0, -900.0, 20));
    assert_eq!(drawer.surface().offset_x(), -300.0);
    for p in &drawer.observer().progress {
        assert!((0.0..=1.0).contains(p), "progress {p} out of range");
    }
}

#[test]
fn opening_progress_is_monotonic() {
    let mut drawer = drawer(300.0);
    open_fully(&mut drawer);
    let progress = &drawer.observer().progress;
    assert!(progress.len() > 2);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(progress.last(), Some(&1.0));
}

#[test]
fn show_hide_toggle() {
    let mut drawer = drawer(300.0);
    drawer.toggle(0);
    let t = run_frames(&mut drawer, 0);
    assert_eq!(drawer.percent_open(), 1.0);

    drawer.toggle(t);
    assert_eq!(drawer.observer().settle_durations(), vec![300, 200]);
    run_frames(&mut drawer, t);
    assert!(!drawer.is_open());
    assert!(!drawer.host().content_visible);
}

#[test]
fn hide_when_closed_settles_immediately() {
    let mut drawer = drawer(300.0);
    assert!(drawer.hide(0));
    assert_eq!(drawer.observer().settle_durations(), vec![0]);
    assert!(!drawer.frame(0));
    assert!(!drawer.host().content_visible);
}

#[test]
fn handle_click_toggles() {
    let handle = Rect::new(300.0, 100.0, 340.0, 160.0);
    let host = RecordingHost {
        metrics: Some(PanelMetrics::new(300.0).with_handle(handle)),
        ..RecordingHost::default()
    };
    let mut drawer = drawer_with(DrawerConfig::default(), host);

    let down = PointerSample::new(PointerId(3), 20.0, 130.0, 0);
    assert_eq!(drawer.pointer_down(down), Claim::HandleClick);
    assert!(!drawer.is_dragging());
    assert!(drawer.host().content_visible);
    drawer.pointer_up(down);
    let t = run_frames(&mut drawer, 0);
    assert!(drawer.is_open());

    let down = PointerSample::new(PointerId(3), 320.0, 130.0, t);
    assert_eq!(drawer.pointer_down(down), Claim::HandleClick);
    drawer.pointer_up(down);
    run_frames(&mut drawer, t);
    assert!(!drawer.is_open());
    assert_eq!(
        drawer
            .observer()
            .count(|e| matches!(e, DrawerEvent::HandleClicked)),
        2
    );
}

#[test]
fn handle_can_start_a_drag() {
    let handle = Rect::new(300.0, 100.0, 340.0, 160.0);
    let host = RecordingHost {
        metrics: Some(PanelMetrics::new(300.0).with_handle(handle)),
        ..RecordingHost::default()
    };
    let config = DrawerConfig::default().with_handle_behavior(HandleBehavior::DragInitiator);
    let mut drawer = drawer_with(config, host);
    let down = PointerSample::new(PointerId(0), 35.0, 130.0, 0);
    assert_eq!(drawer.pointer_down(down), Claim::Drag);
    assert!(!drawer.host().content_visible);
}

#[test]
fn taps_outside_the_closed_panel_pass_through() {
    let mut drawer = drawer(300.0);
    assert_eq!(drawer.pointer_down(at(0, 150.0, 0)), Claim::PassThrough);
    assert_eq!(drawer.pointer_up(at(0, 150.0, 5)), PointerUp::Ignored);
    assert!(drawer.observer().settle_durations().is_empty());
}

#[test]
fn unreleased_pass_through_pointer_does_not_stall_the_next_drag() {
    let mut drawer = drawer(300.0);
    // The content owns this pointer; its up never reaches the drawer.
    assert_eq!(drawer.pointer_down(at(9, 150.0, 0)), Claim::PassThrough);

    assert_eq!(drawer.pointer_down(at(1, 10.0, 10)), Claim::Drag);
    drawer.pointer_move(at(1, 160.0, 30));
    assert!(matches!(
        drawer.pointer_up(at(1, 160.0, 30)),
        PointerUp::Released(_)
    ));
    assert!(!drawer.is_dragging());
    assert!(drawer.surface().is_animating());

    run_frames(&mut drawer, 30);
    assert!(drawer.hide(1_000));
}

#[test]
fn cancel_stays_by_default() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 210.0, 50));
    assert_eq!(drawer.surface().offset_x(), -100.0);

    assert!(drawer.pointer_cancel(PointerId(0), 60));
    assert!(!drawer.is_dragging());
    assert!(!drawer.surface().is_animating());
    assert_eq!(drawer.surface().offset_x(), -100.0);
    assert!(!drawer.pointer_cancel(PointerId(0), 70));
}

#[test]
fn cancel_can_snap_to_nearest() {
    let config = DrawerConfig::default().with_cancel_behavior(CancelBehavior::SnapToNearest);

    let mut drawer = drawer_with(config, RecordingHost::with_width(300.0));
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 210.0, 50));
    assert!(drawer.pointer_cancel(PointerId(0), 60));
    run_frames(&mut drawer, 60);
    assert_eq!(drawer.percent_open(), 1.0);

    let mut drawer = drawer_with(config, RecordingHost::with_width(300.0));
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 90.0, 50));
    assert!(drawer.percent_open() < 0.5);
    assert!(drawer.pointer_cancel(PointerId(0), 60));
    run_frames(&mut drawer, 60);
    assert!(!drawer.is_open());
    assert!(!drawer.host().content_visible);
}

#[test]
fn second_finger_takes_over() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 160.0, 20));
    assert_eq!(drawer.pointer_down(at(1, 200.0, 30)), Claim::Panel);

    let up = drawer.pointer_up(at(0, 160.0, 40));
    assert_eq!(
        up,
        PointerUp::Retargeted {
            from: PointerId(0),
            to: PointerId(1),
        }
    );
    assert!(drawer.is_dragging());
    assert!(drawer.observer().settle_durations().is_empty());

    let before = drawer.surface().offset_x();
    assert_eq!(drawer.pointer_move(at(1, 230.0, 50)), DragUpdate::Moved);
    assert_eq!(drawer.surface().offset_x(), before + 30.0);
    assert!(matches!(
        drawer.pointer_up(at(1, 230.0, 60)),
        PointerUp::Released(_)
    ));
    assert!(!drawer.is_dragging());
}

#[test]
fn mode_switch_is_idempotent() {
    let mut drawer = drawer(300.0);
    open_fully(&mut drawer);

    drawer.set_mode(DrawerMode::Left, 1_000).unwrap();
    let first = drawer.surface().debug_info();
    let content = drawer.host().content_visible;
    drawer.set_mode(DrawerMode::Left, 2_000).unwrap();

    assert_eq!(drawer.surface().debug_info(), first);
    assert_eq!(drawer.host().content_visible, content);
    assert!(!drawer.is_open());
    assert!(!content);
    assert!(!drawer.surface().is_animating());
    assert_eq!(drawer.mode(), DrawerMode::Left);
    assert_eq!(drawer.host().layouts.len(), 3);
}

#[test]
fn mode_switch_ends_drag() {
    let mut drawer = drawer(300.0);
    drawer.pointer_down(at(0, 10.0, 0));
    drawer.pointer_move(at(0, 160.0, 20));
    drawer.set_mode(DrawerMode::Left, 30).unwrap();
    assert!(!drawer.is_dragging());
    assert_eq!(drawer.surface().offset_x(), -300.0);
    assert_eq!(drawer.pointer_move(at(0, 200.0, 40)), DragUpdate::Ignored);
}

#[test]
fn right_mode_has_no_motion() {
    let mut drawer = drawer(300.0);
    drawer.set_mode(DrawerMode::Right, 0).unwrap();
    assert_eq!(drawer.mode(), DrawerMode::Right);
    assert_eq!(drawer.surface().offset_x(), 300.0);
    assert!(!drawer.is_open());

    drawer.show(10);
    assert!(!drawer.surface().is_animating());
    assert_eq!(
        drawer.observer().events.last(),
        Some(&DrawerEvent::MotionUnsupported {
            mode: DrawerMode::Right
        })
    );

    drawer.pointer_down(at(0, 10.0, 20));
    assert_eq!(drawer.pointer_move(at(0, 100.0, 30)), DragUpdate::Pending);
    assert_eq!(drawer.surface().offset_x(), 300.0);
}

#[test]
fn binding_failures_are_reported() {
    let err = Drawer::with_observer(DrawerConfig::default(), RecordingHost::default(), ())
        .unwrap_err();
    assert_eq!(
        err,
        DrawerError::MissingContent {
            mode: DrawerMode::Left
        }
    );

    let mut drawer = drawer(300.0);
    drawer.host_mut().metrics = Some(PanelMetrics::new(-10.0));
    let err = drawer.set_mode(DrawerMode::Right, 0).unwrap_err();
    assert!(matches!(err, DrawerError::InvalidWidth { mode: DrawerMode::Right, .. }));
    assert_eq!(drawer.mode(), DrawerMode::Left);
    assert_eq!(drawer.surface().panel_width(), 300.0);

    drawer.host_mut().metrics = None;
    assert_eq!(
        drawer.set_mode(DrawerMode::Left, 0),
        Err(DrawerError::MissingContent {
            mode: DrawerMode::Left
        })
    );
}

#[test]
fn log_observer_is_the_default() {
    let drawer = Drawer::new(DrawerConfig::default(), RecordingHost::with_width(280.0)).unwrap();
    assert_eq!(drawer.surface().offset_x(), -280.0);
    assert!(format!("{drawer:?}").starts_with("Drawer"));
}
