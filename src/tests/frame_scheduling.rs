//! Frame scheduling tests
//!
//! Pointer work is coalesced to animation frames: input only records the
//! latest position, and the tick at the next frame boundary does the
//! recomputation. These tests drive `TuiApp` directly with explicit times.

use crate::config::ResolvedConfig;
use crate::model::Portfolio;
use crate::view::{ColorConfig, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

/// Helper to create a test TuiApp
fn create_test_app() -> TuiApp<TestBackend> {
    let backend = TestBackend::new(80, 24);
    let terminal = Terminal::new(backend).unwrap();
    TuiApp::new_for_test(
        terminal,
        Portfolio::builtin().unwrap(),
        &ResolvedConfig::default(),
        ColorConfig::forced(false),
    )
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn moved(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A screen cell inside the first card, off its center.
fn first_card_cell(app: &TuiApp<TestBackend>) -> (u16, u16) {
    let card = app.app_state().layout().cards[0];
    (card.x + 1, card.y + 2)
}

#[test]
fn idle_pointer_costs_nothing() {
    let mut app = create_test_app();

    for frame in 1..=30 {
        app.tick_test(ms(frame * 16));
    }

    let bus = app.app_state().bus();
    assert_eq!(bus.frames_delivered(), 0);
    assert!(!bus.frame_pending());
}

#[test]
fn pointer_work_waits_for_the_frame_boundary() {
    let mut app = create_test_app();
    let (x, y) = first_card_cell(&app);

    app.handle_mouse_test(moved(x, y), ms(3));
    assert!(app.app_state().bus().frame_pending());
    assert_eq!(app.app_state().cards()[0].glow.recomputes(), 0);

    assert!(app.tick_test(ms(16)), "delivered frame marks the screen dirty");
    assert_eq!(app.app_state().cards()[0].glow.recomputes(), 1);
    assert!(!app.app_state().bus().frame_pending());
}

#[test]
fn scrolling_under_resting_pointer_schedules_a_frame() {
    let mut app = create_test_app();
    let (x, y) = first_card_cell(&app);
    app.handle_mouse_test(moved(x, y), ms(0));
    app.tick_test(ms(16));

    let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
    app.handle_key_test(key, ms(20));
    app.tick_test(ms(32));

    assert_eq!(app.app_state().cards()[0].glow.recomputes(), 2);
}

#[test]
fn pointer_leaving_cancels_pending_frame() {
    let mut app = create_test_app();
    let (x, y) = first_card_cell(&app);

    app.handle_mouse_test(moved(x, y), ms(0));
    app.handle_mouse_test(moved(2, 23), ms(5)); // status bar

    app.tick_test(ms(16));
    assert_eq!(app.app_state().bus().frames_delivered(), 0);
}

#[test]
fn losing_focus_dims_a_lit_glow() {
    let mut app = create_test_app();
    let (x, y) = first_card_cell(&app);
    app.handle_mouse_test(moved(x, y), ms(0));
    app.tick_test(ms(16));
    assert_eq!(app.app_state().cards()[0].glow.active_fraction(), 1.0);

    app.handle_focus_lost_test(ms(40));

    assert!(app.tick_test(ms(48)), "fade out keeps frames coming");
    let glow = &app.app_state().cards()[0].glow;
    assert_eq!(glow.active_fraction(), 0.0);
    assert_eq!(glow.frame(ms(1_000)).opacity, 0.0);
}

#[test]
fn reveal_fade_keeps_frames_coming() {
    let mut app = create_test_app();
    let (x, y) = first_card_cell(&app);
    app.handle_mouse_test(moved(x, y), ms(0));

    assert!(app.tick_test(ms(100)));
    assert!(app.app_state().is_animating(ms(100)));
    assert!(!app.app_state().cards()[0].reveal.is_animating(ms(400)));
}

#[test]
fn render_at_any_time_succeeds() {
    let mut app = create_test_app();
    for t in [0, 1, 16, 999, 60_000] {
        app.tick_test(ms(t));
        assert!(app.render_test(ms(t)).is_ok());
    }
}
