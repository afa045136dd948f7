//! End-to-end focus session scenarios driven with synthetic time.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use clockwidget_core::{Event, RenderEngine, SessionState, Settings};

fn base() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn base_utc() -> DateTime<Utc> {
    base().with_timezone(&Utc)
}

#[test]
fn one_minute_session_blinks_then_clears() {
    let mut engine = RenderEngine::new(210.0);
    engine.start_focus(1, base_utc());

    // Drive render ticks once per second, as a slow host would.
    let mut blink_started_at = None;
    let mut completed_at = None;
    for secs in 1..=60 {
        let update = engine.frame(base() + Duration::seconds(secs));
        match update.event {
            Some(Event::BlinkStarted { .. }) => blink_started_at = Some(secs),
            Some(Event::SessionCompleted { .. }) => completed_at = Some(secs),
            _ => {}
        }
    }

    // 90% of one minute is 54 seconds.
    assert_eq!(blink_started_at, Some(54));
    assert_eq!(completed_at, Some(60));
    assert_eq!(engine.session().state(), SessionState::Idle);
    assert!(!engine.session().is_active());
}

#[test]
fn fraction_is_ninety_percent_at_blink_onset() {
    let mut engine = RenderEngine::new(210.0);
    engine.start_focus(1, base_utc());

    engine.frame(base() + Duration::seconds(54));
    assert_eq!(engine.session().state(), SessionState::Blinking);
    let at_54 = base_utc() + Duration::seconds(54);
    assert!((engine.session().fraction(at_54) - 0.9).abs() < 1e-9);
}

#[test]
fn out_of_range_durations_clamp() {
    let mut engine = RenderEngine::new(210.0);
    match engine.start_focus(0, base_utc()) {
        Event::SessionStarted { minutes, .. } => assert_eq!(minutes, 1),
        e => panic!("unexpected event {e:?}"),
    }
    match engine.start_focus(9999, base_utc()) {
        Event::SessionStarted { minutes, .. } => assert_eq!(minutes, 250),
        e => panic!("unexpected event {e:?}"),
    }
}

#[test]
fn arc_tracks_the_session_and_vanishes_after_completion() {
    let mut engine = RenderEngine::new(210.0);
    engine.start_focus(1, base_utc());

    let update = engine.frame(base() + Duration::seconds(30));
    let arc = update.progress.expect("arc while running");
    assert!((arc.sweep_deg - 180.0).abs() < 1.0);

    let update = engine.frame(base() + Duration::seconds(61));
    assert!(matches!(update.event, Some(Event::SessionCompleted { .. })));
    assert!(update.progress.is_none());
    assert!(update.progress_visible);
}

#[test]
fn blink_timer_toggles_between_render_ticks() {
    let mut engine = RenderEngine::new(210.0);
    engine.start_focus(1, base_utc());
    engine.frame(base() + Duration::seconds(55));
    assert_eq!(engine.session().state(), SessionState::Blinking);

    let blink_at = base_utc() + Duration::seconds(55) + Duration::milliseconds(300);
    match engine.blink_tick(blink_at) {
        Some(Event::BlinkToggled { visible, .. }) => assert!(!visible),
        e => panic!("unexpected event {e:?}"),
    }
    let update = engine.frame(base() + Duration::seconds(56));
    assert!(!update.progress_visible);
}

#[test]
fn restart_while_blinking_goes_back_to_running() {
    let mut engine = RenderEngine::new(210.0);
    engine.start_focus(1, base_utc());
    engine.frame(base() + Duration::seconds(55));
    assert_eq!(engine.session().state(), SessionState::Blinking);

    let restart = base_utc() + Duration::seconds(55);
    engine.start_focus(25, restart);
    assert_eq!(engine.session().state(), SessionState::Running);
    assert_eq!(engine.session().fraction(restart), 0.0);
}

#[test]
fn settings_drive_the_face_size() {
    let mut settings = Settings::default();
    settings.clock_size = "Small".to_string();
    let mut engine = RenderEngine::new(settings.clock_size_px());
    assert_eq!(engine.face().size, 90.0);

    settings.clock_size = "Whatever".to_string();
    engine.set_size_px(settings.clock_size_px());
    assert_eq!(engine.face().size, 210.0);
}
