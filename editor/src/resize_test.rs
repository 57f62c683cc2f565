use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn default_width_is_sidebar_width() {
    let resize = ResizeController::default();
    assert_eq!(resize.width(), SIDEBAR_WIDTH);
    assert!(!resize.is_resizing());
    assert!(!resize.session_active());
}

#[test]
fn new_uses_given_width() {
    let resize = ResizeController::new(300.0);
    assert_eq!(resize.width(), 300.0);
}

// =============================================================
// begin_drag
// =============================================================

#[test]
fn begin_drag_opens_session_and_sets_flag() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    assert!(resize.session_active());
    assert!(resize.is_resizing());
}

#[test]
fn begin_drag_while_active_is_ignored() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    resize.update_drag(600.0, 1000.0);
    // A second begin must not re-anchor the gesture at the new pointer.
    resize.begin_drag(600.0);
    assert_eq!(resize.update_drag(650.0, 1000.0), 450.0);
}

// =============================================================
// update_drag
// =============================================================

#[test]
fn update_drag_applies_delta() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    assert_eq!(resize.update_drag(650.0, 1000.0), 450.0);
}

#[test]
fn update_drag_clamps_to_maximum() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    assert_eq!(resize.update_drag(1200.0, 1000.0), 850.0);
}

#[test]
fn update_drag_clamps_to_minimum() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    assert_eq!(resize.update_drag(0.0, 1000.0), 150.0);
}

#[test]
fn update_drag_is_idempotent_for_same_pointer() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    let first = resize.update_drag(620.0, 1000.0);
    let second = resize.update_drag(620.0, 1000.0);
    assert_eq!(first, second);
}

#[test]
fn update_drag_without_begin_starts_lazily() {
    let mut resize = ResizeController::new(300.0);
    // First move anchors the gesture: delta is zero against itself.
    assert_eq!(resize.update_drag(500.0, 1000.0), 300.0);
    assert!(resize.session_active());
    assert_eq!(resize.update_drag(550.0, 1000.0), 350.0);
}

#[test]
fn update_drag_recomputes_bounds_from_live_viewport() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    assert_eq!(resize.update_drag(1200.0, 1000.0), 850.0);
    // Browser shrank mid-gesture: the same pointer now clamps lower.
    assert_eq!(resize.update_drag(1200.0, 800.0), 680.0);
}

#[test]
fn width_stays_in_bounds_for_any_pointer_sequence() {
    let mut resize = ResizeController::new(300.0);
    for x in [-5000.0, -1.0, 0.0, 150.0, 499.0, 500.0, 501.0, 999.0, 5000.0] {
        let width = resize.update_drag(x, 1000.0);
        assert!((150.0..=850.0).contains(&width), "width {width} out of bounds at x {x}");
    }
}

// =============================================================
// end_drag
// =============================================================

#[test]
fn end_drag_commits_width_for_next_session() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    resize.update_drag(650.0, 1000.0);
    resize.end_drag();
    assert!(!resize.session_active());
    assert!(!resize.is_resizing());
    assert_eq!(resize.width(), 450.0);

    // A fresh session with a zero delta reproduces the committed width.
    resize.begin_drag(700.0);
    assert_eq!(resize.update_drag(700.0, 1000.0), 450.0);
}

// =============================================================
// cancel_drag
// =============================================================

#[test]
fn cancel_drag_clears_flag_only() {
    let mut resize = ResizeController::new(300.0);
    resize.begin_drag(500.0);
    resize.update_drag(650.0, 1000.0);
    resize.cancel_drag();
    assert!(!resize.is_resizing());
    // Applied width is never rolled back.
    assert_eq!(resize.width(), 450.0);
    // The gesture origin survives: a later drag-over continues the session.
    assert!(resize.session_active());
    assert_eq!(resize.update_drag(700.0, 1000.0), 500.0);
}
